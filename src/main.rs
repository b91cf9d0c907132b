use anyhow::Result;
use clap::Parser;

use logiq_chat::cli::commands::{ask, chat, configure, health};
use logiq_chat::cli::{Args, Command};
use logiq_chat::config::ResolveOptions;
use logiq_chat::{logging, output};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(output::OutputConfig::from_flags(args.quiet));
    logging::init(args.verbose);

    let resolve = ResolveOptions {
        base_url: args.base_url,
        timeout_secs: args.timeout,
    };

    match args.command {
        Some(Command::Chat) => {
            chat::run_chat(resolve).await?;
        }
        Some(Command::Health) => {
            health::run_health(resolve).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = ask::AskOptions {
                file: args.file,
                resolve,
            };
            ask::run_ask(options).await?;
        }
    }

    output::flush_stderr();
    Ok(())
}
