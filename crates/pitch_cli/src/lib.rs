//! Pitch Command CLI library
//!
//! Session file loading, text reports and CSV export for the
//! `pitch-command` binary.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use pitch_core::export::ExportRow;
use pitch_core::{CommandConfig, PitchInput, PitchSession, ScoreResult, SessionSummary};

/// Charted session as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub pitcher_name: Option<String>,
    /// Pitches in throw order; locations may be positions or raw marks
    pub pitches: Vec<PitchInput>,
}

/// Config from a JSON file, or the standard tables
pub fn load_config(path: Option<&Path>) -> Result<CommandConfig> {
    let Some(path) = path else {
        return Ok(CommandConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = CommandConfig::from_json_str(&json)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    info!(path = %path.display(), "loaded scoring config");
    Ok(config)
}

pub fn load_session_file(path: &Path) -> Result<SessionFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse session file: {}", path.display()))
}

/// Replay the file's pitches into a fresh session
pub fn build_session(file: &SessionFile, config: CommandConfig) -> Result<PitchSession> {
    let mut session = PitchSession::new(config);
    for (index, pitch) in file.pitches.iter().enumerate() {
        let event = pitch
            .resolve(&session.config().geometry)
            .with_context(|| format!("Pitch {} cannot be scored", index + 1))?;
        session.record_event(event);
    }
    Ok(session)
}

/// One-line feedback for a scored pitch
pub fn format_score(result: &ScoreResult) -> String {
    format!(
        "Score: {}/10 - {} ({:.1}\") - {}",
        result.score, result.grade, result.distance_inches, result.reasoning
    )
}

/// Overall score line plus the per-pitch-type breakdown table
pub fn format_breakdown(summary: &SessionSummary) -> String {
    let overall = &summary.overall;
    let mut out = match overall.grade {
        Some(grade) => format!(
            "Command score: {}/10 ({})  Avg: {:.1}\"  Pitches: {}\n",
            overall.rounded_score, grade, overall.average_distance_inches, overall.pitch_count
        ),
        None => return "No pitches charted.\n".to_string(),
    };

    out.push('\n');
    out.push_str(&format!(
        "{:<12} {:>7} {:>9} {:>12}  {}\n",
        "Pitch Type", "Pitches", "Avg Score", "Avg Distance", "Grade"
    ));
    for group in summary.by_type.values() {
        out.push_str(&format!(
            "{:<12} {:>7} {:>9} {:>12}  {}\n",
            group.pitch_type.display_name(),
            group.count,
            format!("{:.1}/10", group.average_score),
            format!("{:.1}\"", group.average_distance_inches),
            group.grade
        ));
    }
    out
}

/// Export path when none is given: the shared database file when
/// appending, otherwise the per-pitcher file dated by the UTC calendar day
pub fn default_export_path(
    pitcher_name: Option<&str>,
    append: bool,
    now: DateTime<Utc>,
) -> PathBuf {
    if append {
        PathBuf::from(pitch_core::export::APPEND_FILE_NAME)
    } else {
        PathBuf::from(pitch_core::export_file_name(pitcher_name, now.date_naive()))
    }
}

/// Write rows as CSV with every cell quoted
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W, include_headers: bool) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(include_headers)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);
    for row in rows {
        wtr.serialize(row).context("Failed to write CSV row")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Export to a file. Appending never writes a header row.
pub fn export_csv(rows: &[ExportRow], path: &Path, append: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;

    write_csv(rows, file, !append)?;
    info!(rows = rows.len(), path = %path.display(), append, "exported pitches");
    Ok(())
}
