use super::args::*;

pub mod digest;
pub mod serve;
pub mod verify;

use anyhow::{Context, Result};
use std::io::Read;

pub async fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Verify(args) => verify::run(args),
        Command::Serve(args) => serve::run(args).await,
        Command::Digest(args) => digest::run(args),
    }
}

/// Read a file path, or stdin for "-".
pub(crate) fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
}
