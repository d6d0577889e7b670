//! The judge loop: read a snapshot, decide, write two lines.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use royale_runtime::{RuntimeConfig, TurnRunner};
use tracing::{error, info};

use crate::protocol::JudgeReader;

/// Plays one game over `input` and `output` until the judge closes the stream.
///
/// Returns the number of turns played. Parse and decision failures abort the
/// session without writing a partial turn.
pub fn run_session<R, W>(config: RuntimeConfig, input: R, mut output: W) -> Result<u32>
where
    R: BufRead,
    W: Write,
{
    let mut reader = JudgeReader::new(input);
    let sites = reader.read_init().context("reading initialisation block")?;
    let site_count = sites.len();
    info!(sites = site_count, "arena registered");

    let mut runner = TurnRunner::builder().config(config).sites(sites).build();

    while let Some(snapshot) = reader
        .read_turn(site_count)
        .with_context(|| format!("reading turn {}", runner.turn() + 1))?
    {
        let turn = runner
            .take_turn(&snapshot)
            .inspect_err(|err| {
                error!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "decision failed"
                );
            })
            .with_context(|| format!("deciding turn {}", runner.turn()))?;

        writeln!(output, "{}", turn.action)?;
        writeln!(output, "{}", turn.production)?;
        output.flush()?;
    }

    info!(turns = runner.turn(), "judge closed the stream");
    Ok(runner.turn())
}
