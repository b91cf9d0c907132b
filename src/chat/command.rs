use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/dismiss", "Dismiss the error banner"),
    ("/help", "Show available commands"),
    ("/history", "Show the server-side transcript"),
    ("/quit", "Exit chat mode"),
    ("/reset", "Start a new conversation"),
    ("/save", "Save the transcript as Markdown"),
    ("/sessions", "List conversations"),
    ("/suggest", "Pick a suggested reply"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Dismiss,
    Help,
    History,
    Quit,
    Reset,
    Save(Option<String>),
    Sessions,
    /// `/suggest` opens a picker; `/suggest <n>` takes the n-th chip (1-based).
    Suggest(Option<usize>),
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies a prompt line. Chat text is returned exactly as typed;
/// trimming only decides whether the line is empty or a command.
pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(n, r)| (n, r.trim()));
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "config" => SlashCommand::Config,
        "dismiss" => SlashCommand::Dismiss,
        "help" => SlashCommand::Help,
        "history" => SlashCommand::History,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        "reset" | "new" => SlashCommand::Reset,
        "save" => SlashCommand::Save(arg),
        "sessions" => SlashCommand::Sessions,
        "suggest" => match arg.as_deref().map(str::parse::<usize>) {
            None => SlashCommand::Suggest(None),
            Some(Ok(n)) if n > 0 => SlashCommand::Suggest(Some(n)),
            Some(_) => SlashCommand::Unknown(cmd.to_string()),
        },
        _ => SlashCommand::Unknown(cmd.to_string()),
    };
    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("What services do you offer?"),
            Input::Text("What services do you offer?".to_string())
        );
    }

    #[test]
    fn test_parse_text_input_is_not_trimmed() {
        assert_eq!(
            parse_input("  indented question  "),
            Input::Text("  indented question  ".to_string())
        );
    }

    #[test]
    fn test_parse_command_with_surrounding_whitespace() {
        assert_eq!(parse_input("  /help  "), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
        assert_eq!(parse_input("/dismiss"), Input::Command(SlashCommand::Dismiss));
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
        assert_eq!(parse_input("/history"), Input::Command(SlashCommand::History));
        assert_eq!(parse_input("/sessions"), Input::Command(SlashCommand::Sessions));
    }

    #[test]
    fn test_parse_quit_aliases() {
        for cmd in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(cmd), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_reset_aliases() {
        assert_eq!(parse_input("/reset"), Input::Command(SlashCommand::Reset));
        assert_eq!(parse_input("/new"), Input::Command(SlashCommand::Reset));
    }

    #[test]
    fn test_parse_save() {
        assert_eq!(parse_input("/save"), Input::Command(SlashCommand::Save(None)));
        assert_eq!(
            parse_input("/save  notes/chat.md "),
            Input::Command(SlashCommand::Save(Some("notes/chat.md".to_string())))
        );
    }

    #[test]
    fn test_parse_suggest() {
        assert_eq!(parse_input("/suggest"), Input::Command(SlashCommand::Suggest(None)));
        assert_eq!(
            parse_input("/suggest 2"),
            Input::Command(SlashCommand::Suggest(Some(2)))
        );
        assert_eq!(
            parse_input("/suggest 0"),
            Input::Command(SlashCommand::Unknown("suggest 0".to_string()))
        );
        assert_eq!(
            parse_input("/suggest two"),
            Input::Command(SlashCommand::Unknown("suggest two".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown"),
            Input::Command(SlashCommand::Unknown("unknown".to_string()))
        );
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("hello").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/s").unwrap();
        assert_eq!(suggestions.len(), 3); // /save, /sessions, /suggest

        let suggestions = completer.get_suggestions("/r").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/reset"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/reset  Start a new conversation".to_string();
        let completion = completer.get_completion("/r", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/reset".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_completion("/x", None).unwrap().is_none());
    }
}
