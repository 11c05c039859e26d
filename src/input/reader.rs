use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 64 * 1024; // 64KB

pub struct InputReader;

impl InputReader {
    /// Reads the whole of stdin.
    pub fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock())
    }

    fn read_from(mut reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} KB) exceeds maximum allowed size (64 KB).\n\n\
                     The demo translates one sentence at a time.",
                    buffer.len() as f64 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_sentence() {
        let content = InputReader::read_from(Cursor::new("Rahajeng semeng\n")).unwrap();
        assert_eq!(content, "Rahajeng semeng\n");
    }

    #[test]
    fn test_read_empty() {
        let content = InputReader::read_from(Cursor::new("")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_exceeds_max_size() {
        let large_content = "x".repeat(MAX_INPUT_SIZE + 1);
        let result = InputReader::read_from(Cursor::new(large_content));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_at_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE);
        let result = InputReader::read_from(Cursor::new(content)).unwrap();
        assert_eq!(result.len(), MAX_INPUT_SIZE);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let result = InputReader::read_from(Cursor::new(vec![0xff, 0xfe, 0xfd]));
        assert!(result.unwrap_err().to_string().contains("UTF-8"));
    }
}
