//! Plain-text rendering of results and the per-stage narrowing summary

use crate::draw::combination::Combination;
use crate::io::error::{Result, file_system_error};
use crate::pipeline::sequencer::PipelineState;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one numbered line per combination, or a no-match notice
///
/// # Errors
///
/// Propagates any write failure
pub fn write_results<W: Write>(writer: &mut W, combinations: &[Combination]) -> std::io::Result<()> {
    if combinations.is_empty() {
        writeln!(writer, "No matches. Try broader filters next time.")?;
        return Ok(());
    }

    let width = combinations.len().to_string().len();
    for (index, combination) in combinations.iter().enumerate() {
        writeln!(writer, "P#{:<width$}  {combination}", index + 1)?;
    }
    Ok(())
}

/// Write how many combinations each stage kept
///
/// # Errors
///
/// Propagates any write failure
pub fn write_summary<W: Write>(writer: &mut W, state: &PipelineState) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}: generated {} combinations",
        state.game(),
        state.initial_count()
    )?;
    for record in state.steps() {
        match record.filter {
            Some(filter) => writeln!(
                writer,
                "  {:<12} {filter}: {} -> {}",
                record.stage.to_string(),
                record.before,
                record.after
            )?,
            None => writeln!(
                writer,
                "  {:<12} skipped: {}",
                record.stage.to_string(),
                record.after
            )?,
        }
    }
    writeln!(writer, "{} matches", state.remaining())
}

/// Save the summary and surviving combinations to a text file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be created or written
pub fn export_results(path: &Path, state: &PipelineState) -> Result<()> {
    let file = File::create(path).map_err(|error| file_system_error(path, "create", error))?;
    let mut writer = BufWriter::new(file);

    write_summary(&mut writer, state)
        .and_then(|()| writeln!(writer))
        .and_then(|()| write_results(&mut writer, state.combinations()))
        .and_then(|()| writer.flush())
        .map_err(|error| file_system_error(path, "write", error))?;

    info!(
        "exported {} combinations to {}",
        state.remaining(),
        path.display()
    );
    Ok(())
}
