// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Progress output and "press enter" pauses

use crate::constants::console::PAUSE_PROMPT;
use crate::error::Result;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Console the demos write progress to and read pauses from
pub struct Console<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console bound to the process stdin and stdout
    pub fn stdio(interactive: bool) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), interactive)
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// Wait for the user to press Enter. End of input also continues.
    pub async fn pause(&mut self) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }

        self.output.write_all(PAUSE_PROMPT.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        self.input.read_line(&mut line).await?;

        self.line("").await
    }

    /// Print one line of text
    pub async fn line(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Print one name per line
    pub async fn names<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.line(name.as_ref()).await?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
