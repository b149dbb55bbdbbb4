//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;

use fountain_core::Fountain;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crate::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let fountain = Fountain::parse(&config.fizz, &config.buzz)?;
    tracing::debug!(%fountain, start = %config.start, stop = %config.stop, step = %config.step, "generating");

    let labels = fountain.generate(
        config.start.clone(),
        Some(config.stop.clone()),
        config.step.clone(),
    )?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_labels(&mut out, labels)?;
    Ok(())
}

/// Write labels space-separated, newline-terminated.
fn write_labels(
    out: &mut dyn Write,
    labels: impl IntoIterator<Item = Result<String, fountain_core::FountainError>>,
) -> Result<()> {
    let mut first = true;
    for label in labels {
        let label = label?;
        if !first {
            out.write_all(b" ")?;
        }
        out.write_all(label.as_bytes())?;
        first = false;
    }
    out.write_all(b"\n")?;
    Ok(())
}
