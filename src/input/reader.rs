use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// Largest input accepted; the text travels in a GET query string.
pub const MAX_INPUT_SIZE: usize = 16 * 1024;

/// Reads source text from command-line words, a file, or stdin.
pub struct InputReader;

impl InputReader {
    /// Joins `words` with spaces if any were given, else reads `file_path`,
    /// else stdin.
    pub fn read(words: &[String], file_path: Option<&str>) -> Result<String> {
        if !words.is_empty() {
            let text = words.join(" ");
            Self::check_size(text.len(), "text")?;
            return Ok(text);
        }

        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn check_size(size: usize, what: &str) -> Result<()> {
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} KB) exceeds maximum allowed size (16 KB).\n\n\
                 Consider splitting the {what} into smaller parts.",
                size as f64 / 1024.0
            );
        }
        Ok(())
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        Self::check_size(metadata.len() as usize, "file")?;

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

            Self::check_size(buffer.len(), "input")?;
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
