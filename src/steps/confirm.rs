// file: src/steps/confirm.rs
// version: 1.0.0
// guid: c8c6a91c-ffdd-45ea-9a3c-2cb3dabfe62a

//! Confirmation after a manual step

use crate::error::SetupError;
use crate::Result;
use std::io::{self, BufRead, StdinLock};
use tracing::info;

/// Blocks until the operator says the manual edit is done
pub trait Confirm {
    fn confirm(&mut self) -> Result<()>;
}

/// Prompts on stderr and reads tokens until a literal `y`
pub struct PromptConfirm<R> {
    input: R,
}

impl<R: BufRead> PromptConfirm<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl PromptConfirm<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Confirm for PromptConfirm<R> {
    fn confirm(&mut self) -> Result<()> {
        loop {
            eprintln!("Input \"y\" to continue:");

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| SetupError::confirmation(format!("could not read input: {}", e)))?;

            // EOF: nobody is left to type "y"
            if read == 0 {
                return Err(SetupError::confirmation(
                    "input closed before \"y\" was entered",
                ));
            }

            if line.split_whitespace().any(|token| token == "y") {
                return Ok(());
            }
        }
    }
}

/// Confirms immediately, for unattended runs
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self) -> Result<()> {
        info!("continuing without confirmation (--yes)");
        Ok(())
    }
}
