//! Command line parser - Splits an input line into command name and arguments

use crate::application::errors::CommandError;

/// A command line split into its name and argument tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split on whitespace. A token that opens with `"` runs to the next `"` and
/// may contain spaces; the quotes themselves are dropped.
pub fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut rest = line.trim();

    while !rest.is_empty() {
        if let Some(quoted) = rest.strip_prefix('"') {
            let end = quoted.find('"').ok_or(CommandError::UnterminatedQuote)?;
            tokens.push(quoted[..end].to_string());
            rest = quoted[end + 1..].trim_start();
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            tokens.push(rest[..end].to_string());
            rest = rest[end..].trim_start();
        }
    }

    Ok(tokens)
}

/// Recognizes command lines by prefix
pub struct CommandParser {
    command_prefix: String,
}

impl CommandParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn is_command(&self, line: &str) -> bool {
        let line = line.trim_start();
        line.starts_with('/') || (!self.command_prefix.is_empty() && line.starts_with(&self.command_prefix))
    }

    /// Parse a line. Plain chat text yields `Ok(None)`.
    ///
    /// Commands are registered under `/name`, so a custom prefix is rewritten
    /// to the slash form.
    pub fn parse(&self, line: &str) -> Result<Option<ParsedCommand>, CommandError> {
        if !self.is_command(line) {
            return Ok(None);
        }

        let mut tokens = tokenize(line)?.into_iter();
        let Some(first) = tokens.next() else {
            return Ok(None);
        };

        let name = if first.starts_with('/') {
            first
        } else {
            format!("/{}", first.trim_start_matches(self.command_prefix.as_str()))
        };

        Ok(Some(ParsedCommand {
            name,
            args: tokens.collect(),
        }))
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace() {
        assert_eq!(tokenize("/fortune  3 ").unwrap(), vec!["/fortune", "3"]);
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn tokenize_keeps_quoted_spans_together() {
        assert_eq!(
            tokenize(r#"/say "hello there" friend"#).unwrap(),
            vec!["/say", "hello there", "friend"]
        );
        assert_eq!(tokenize(r#""""#).unwrap(), vec![""]);
    }

    #[test]
    fn tokenize_rejects_open_quote() {
        let err = tokenize(r#"/say "oops"#).unwrap_err();
        assert_eq!(err, CommandError::UnterminatedQuote);
        assert_eq!(err.to_string(), "Invalid argument. Did you forget a closing \"?");
    }

    #[test]
    fn plain_text_is_not_a_command() {
        let parser = CommandParser::default();
        assert_eq!(parser.parse("hello /fortune").unwrap(), None);
    }

    #[test]
    fn parse_splits_name_and_args() {
        let parser = CommandParser::default();
        let cmd = parser.parse("/fortune 3").unwrap().unwrap();
        assert_eq!(cmd.name, "/fortune");
        assert_eq!(cmd.args, vec!["3"]);

        let cmd = parser.parse("/fortune").unwrap().unwrap();
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn custom_prefix_maps_to_slash_name() {
        let parser = CommandParser::new("!");
        let cmd = parser.parse("!fortune 2").unwrap().unwrap();
        assert_eq!(cmd.name, "/fortune");
        assert_eq!(cmd.args, vec!["2"]);
    }
}
