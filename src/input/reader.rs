use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

use crate::chat::MAX_MESSAGE_CHARS;

// Hard cap on raw input before trimming; a valid message is far smaller.
const MAX_INPUT_BYTES: usize = 64 * 1024;

pub struct InputReader;

impl InputReader {
    /// Reads a one-shot message from `file_path`, or stdin if `None`.
    ///
    /// The text is trimmed and must be non-empty and at most
    /// [`MAX_MESSAGE_CHARS`] characters.
    pub fn read_message(file_path: Option<&str>) -> Result<String> {
        let raw = file_path.map_or_else(Self::read_stdin, Self::read_file)?;
        validate_message(&raw)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        if metadata.len() as usize > MAX_INPUT_BYTES {
            bail!(too_large(metadata.len() as usize));
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_BYTES {
                bail!(too_large(buffer.len()));
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn too_large(size: usize) -> String {
    format!(
        "Input size ({:.1} KB) is far beyond the {MAX_MESSAGE_CHARS}-character message limit.",
        size as f64 / 1024.0
    )
}

fn validate_message(raw: &str) -> Result<String> {
    let message = raw.trim();
    if message.is_empty() {
        bail!(
            "No message to send.\n\n\
             Provide one via a file argument or stdin:\n  \
             echo \"What services do you offer?\" | logiq"
        );
    }
    let chars = message.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        bail!(
            "Message is {chars} characters long; the maximum is {MAX_MESSAGE_CHARS}.\n\n\
             Consider splitting it into smaller parts."
        );
    }
    Ok(message.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn path_of(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }

    #[test]
    fn test_read_file_trims() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "  Tell me about LogiQ Gen  ").unwrap();

        let content = InputReader::read_message(Some(path_of(&temp_file))).unwrap();
        assert_eq!(content, "Tell me about LogiQ Gen");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read_message(Some("/nonexistent/path/to/file.txt"));
        assert!(result.unwrap_err().to_string().contains("Failed to access file"));
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "こんにちは世界！🌍").unwrap();

        let content = InputReader::read_message(Some(path_of(&temp_file))).unwrap();
        assert_eq!(content, "こんにちは世界！🌍");
    }

    #[test]
    fn test_read_empty_file_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "   ").unwrap();

        let result = InputReader::read_message(Some(path_of(&temp_file)));
        assert!(result.unwrap_err().to_string().contains("No message to send"));
    }

    #[test]
    fn test_message_limit_counts_chars() {
        let at_limit = "é".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_message(&at_limit).is_ok());

        let over = "é".repeat(MAX_MESSAGE_CHARS + 1);
        let err = validate_message(&over).unwrap_err();
        assert!(err.to_string().contains("maximum is 1000"));
    }

    #[test]
    fn test_read_file_exceeds_byte_cap() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_file.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_BYTES + 1)).unwrap();

        let result = InputReader::read_message(Some(file_path.to_str().unwrap()));
        assert!(result.unwrap_err().to_string().contains("message limit"));
    }

    #[test]
    fn test_read_file_multiline_kept() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Line 1\nLine 2").unwrap();

        let content = InputReader::read_message(Some(path_of(&temp_file))).unwrap();
        assert_eq!(content, "Line 1\nLine 2");
    }
}
