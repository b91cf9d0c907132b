use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "logiq")]
#[command(about = "Terminal client for the LogiQ Gen AI assistant")]
#[command(version)]
pub struct Args {
    /// File containing a message to send (reads from stdin if not provided)
    pub file: Option<String>,

    /// Server root of the chat backend
    #[arg(short = 'u', long = "base-url", env = "LOGIQ_API_BASE", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode
    Chat,
    /// Check that the backend is reachable
    Health,
    /// Configure logiq settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_file() {
        let args = Args::try_parse_from(["logiq", "question.txt"]).unwrap();
        assert_eq!(args.file.as_deref(), Some("question.txt"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "logiq",
            "chat",
            "--base-url",
            "http://localhost:8000",
            "--timeout",
            "5",
            "-vv",
        ])
        .unwrap();
        assert!(matches!(args.command, Some(Command::Chat)));
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_parse_configure_show() {
        let args = Args::try_parse_from(["logiq", "configure", "--show"]).unwrap();
        assert!(matches!(args.command, Some(Command::Configure { show: true })));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(Args::try_parse_from(["logiq", "--timeout", "soon"]).is_err());
    }
}
