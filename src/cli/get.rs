//! The `get` command

use anyhow::{Context, Result};

use super::output::Output;
use crate::storage::{DocumentFormat, Session};

/// Writes the body of RFC `number` to stdout
pub fn run(number: u32, format: DocumentFormat, session: &Session, output: &Output) -> Result<()> {
    let content = session
        .content_repository(format)?
        .find_by_number(number)
        .with_context(|| format!("Failed to get RFC {}", number))?;

    output
        .raw(&content)
        .context("Failed to write document to stdout")
}
