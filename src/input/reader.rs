use anyhow::{Context, Result, bail};
use std::io::{self, IsTerminal, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Returns `true` when stdin is piped or redirected rather than a terminal.
    pub fn stdin_is_piped() -> bool {
        !io::stdin().is_terminal()
    }

    /// Reads all of stdin, trimming the trailing newline that shells append.
    #[allow(clippy::significant_drop_tightening)]
    pub fn read_stdin() -> Result<String> {
        let stdin = io::stdin().lock();
        Self::read_from(stdin)
    }

    fn read_from(mut source: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = source
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        let text = String::from_utf8(buffer).context("Input is not valid UTF-8")?;
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}
