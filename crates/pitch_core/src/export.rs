//! # Export Rows
//!
//! Flat, display-ready rows for the command database CSV. Column order and
//! header text are consumed by downstream spreadsheets and must not change.
//!
//! Field names serialize to the header text, so any serde-based CSV writer
//! produces the header row directly from [`ExportRow`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::CommandConfig;
use crate::scoring::score_record;
use crate::session::PitchRecord;
use crate::zone::geometry::finite_or_zero;

/// Pitcher name used when none was entered
pub const UNKNOWN_PITCHER: &str = "Unknown Pitcher";

/// File that append-mode exports are meant to be pasted into
pub const APPEND_FILE_NAME: &str = "Overall_Command_Database.csv";

/// Header row, in column order
pub const EXPORT_HEADERS: [&str; 19] = [
    "Date",
    "Time",
    "Pitcher Name",
    "Handedness",
    "Session Pitch #",
    "Pitch Type",
    "Catcher Target Zone",
    "Ball Location Zone",
    "Distance (inches)",
    "Score (1-10)",
    "Command Grade",
    "Base Score",
    "Directional Bonus",
    "Zone 5 Penalty",
    "Scoring Reasoning",
    "Catcher X",
    "Catcher Y",
    "Ball X",
    "Ball Y",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Pitcher Name")]
    pub pitcher_name: String,
    #[serde(rename = "Handedness")]
    pub handedness: String,
    #[serde(rename = "Session Pitch #")]
    pub sequence_number: u32,
    #[serde(rename = "Pitch Type")]
    pub pitch_type: String,
    #[serde(rename = "Catcher Target Zone")]
    pub catcher_zone: u8,
    #[serde(rename = "Ball Location Zone")]
    pub ball_zone: u8,
    #[serde(rename = "Distance (inches)")]
    pub distance_inches: String,
    #[serde(rename = "Score (1-10)")]
    pub score: u8,
    #[serde(rename = "Command Grade")]
    pub grade: String,
    #[serde(rename = "Base Score")]
    pub base_score: u8,
    #[serde(rename = "Directional Bonus")]
    pub directional_bonus: String,
    #[serde(rename = "Zone 5 Penalty")]
    pub zone5_penalty: String,
    #[serde(rename = "Scoring Reasoning")]
    pub reasoning: String,
    #[serde(rename = "Catcher X")]
    pub catcher_x: String,
    #[serde(rename = "Catcher Y")]
    pub catcher_y: String,
    #[serde(rename = "Ball X")]
    pub ball_x: String,
    #[serde(rename = "Ball Y")]
    pub ball_y: String,
}

impl ExportRow {
    /// Cell values in column order
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.time.clone(),
            self.pitcher_name.clone(),
            self.handedness.clone(),
            self.sequence_number.to_string(),
            self.pitch_type.clone(),
            self.catcher_zone.to_string(),
            self.ball_zone.to_string(),
            self.distance_inches.clone(),
            self.score.to_string(),
            self.grade.clone(),
            self.base_score.to_string(),
            self.directional_bonus.clone(),
            self.zone5_penalty.clone(),
            self.reasoning.clone(),
            self.catcher_x.clone(),
            self.catcher_y.clone(),
            self.ball_x.clone(),
            self.ball_y.clone(),
        ]
    }
}

/// One decimal place; non-finite values print as `0.0`
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", finite_or_zero(value))
}

/// Shortest form: `0.25`, `-1`, `2`
pub fn plain_number(value: f64) -> String {
    finite_or_zero(value).to_string()
}

/// Trimmed pitcher name or [`UNKNOWN_PITCHER`]
pub fn pitcher_display_name(name: Option<&str>) -> &str {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => UNKNOWN_PITCHER,
    }
}

/// `<name>_command_data_<YYYY-MM-DD>.csv` with every non-alphanumeric
/// character of the name replaced by `_`
pub fn export_file_name(pitcher_name: Option<&str>, date: NaiveDate) -> String {
    let clean: String = pitcher_display_name(pitcher_name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}_command_data_{}.csv", clean, date.format("%Y-%m-%d"))
}

/// Build one row. Date and time are the export moment, shared by all rows.
pub fn export_row(
    record: &PitchRecord,
    config: &CommandConfig,
    pitcher_name: &str,
    exported_at: NaiveDateTime,
) -> ExportRow {
    let score = score_record(record, config);
    ExportRow {
        date: exported_at.format("%-m/%-d/%Y").to_string(),
        time: exported_at.format("%-I:%M:%S %p").to_string(),
        pitcher_name: pitcher_name.to_string(),
        handedness: record.descriptor.handedness.code().to_string(),
        sequence_number: record.sequence_number,
        pitch_type: record.descriptor.pitch_type.display_name().to_string(),
        catcher_zone: record.catcher_target.zone.number(),
        ball_zone: record.ball_location.zone.number(),
        distance_inches: one_decimal(score.distance_inches),
        score: score.score,
        grade: score.grade.label().to_string(),
        base_score: score.base_score,
        directional_bonus: plain_number(score.directional_adjustment),
        zone5_penalty: plain_number(score.zone5_penalty),
        reasoning: score.reasoning,
        catcher_x: one_decimal(record.catcher_target.x),
        catcher_y: one_decimal(record.catcher_target.y),
        ball_x: one_decimal(record.ball_location.x),
        ball_y: one_decimal(record.ball_location.y),
    }
}

/// Rows for a whole history, in session order
pub fn export_rows(
    history: &[PitchRecord],
    config: &CommandConfig,
    pitcher_name: Option<&str>,
    exported_at: NaiveDateTime,
) -> Vec<ExportRow> {
    let name = pitcher_display_name(pitcher_name);
    history
        .iter()
        .map(|record| export_row(record, config, name, exported_at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{Handedness, PitchDescriptor, PitchType};
    use crate::zone::{Zone, ZonePosition};
    use chrono::{TimeZone, Utc};

    fn exported_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(18, 5, 9)
            .unwrap()
    }

    fn sinker_record() -> PitchRecord {
        PitchRecord {
            sequence_number: 3,
            descriptor: PitchDescriptor::new(PitchType::Sinker, Handedness::Right),
            catcher_target: ZonePosition::centered(Zone::CENTER),
            ball_location: ZonePosition::new(Zone::new(8).unwrap(), 50.0, 50.0),
            timestamp: Utc.with_ymd_and_hms(2024, 4, 1, 18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_order() {
        insta::assert_debug_snapshot!(EXPORT_HEADERS, @r###"
        [
            "Date",
            "Time",
            "Pitcher Name",
            "Handedness",
            "Session Pitch #",
            "Pitch Type",
            "Catcher Target Zone",
            "Ball Location Zone",
            "Distance (inches)",
            "Score (1-10)",
            "Command Grade",
            "Base Score",
            "Directional Bonus",
            "Zone 5 Penalty",
            "Scoring Reasoning",
            "Catcher X",
            "Catcher Y",
            "Ball X",
            "Ball Y",
        ]
        "###);
    }

    #[test]
    fn test_serialized_field_names_match_headers() {
        let row = export_row(&sinker_record(), &CommandConfig::default(), "A", exported_at());
        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), EXPORT_HEADERS.len());
        for header in EXPORT_HEADERS {
            assert!(object.contains_key(header), "missing {header}");
        }
    }

    #[test]
    fn test_sinker_row() {
        let row = export_row(
            &sinker_record(),
            &CommandConfig::default(),
            "Jordan Ray",
            exported_at(),
        );
        assert_eq!(
            row.to_record(),
            vec![
                "4/1/2024",
                "6:05:09 PM",
                "Jordan Ray",
                "RHP",
                "3",
                "Sinker",
                "5",
                "8",
                "5.7",
                "6",
                "Very Good",
                "6",
                "0.25",
                "0",
                "Good directional miss",
                "50.0",
                "50.0",
                "50.0",
                "50.0",
            ]
        );
    }

    #[test]
    fn test_zone5_row_shows_penalty() {
        let mut record = sinker_record();
        record.descriptor = PitchDescriptor::new(PitchType::FourSeam, Handedness::Left);
        record.ball_location = ZonePosition::new(Zone::CENTER, 52.26, 47.74);
        let row = export_row(&record, &CommandConfig::default(), "A", exported_at());
        assert_eq!(row.zone5_penalty, "2");
        assert_eq!(row.directional_bonus, "0");
        assert_eq!(row.ball_x, "52.3");
        assert_eq!(row.ball_y, "47.7");
        assert!(row.reasoning.starts_with("Zone 5 penalty"));
    }

    #[test]
    fn test_pitcher_name_defaults() {
        assert_eq!(pitcher_display_name(None), UNKNOWN_PITCHER);
        assert_eq!(pitcher_display_name(Some("   ")), UNKNOWN_PITCHER);
        assert_eq!(pitcher_display_name(Some("  Sam ")), "Sam");

        let rows = export_rows(&[sinker_record()], &CommandConfig::default(), None, exported_at());
        assert_eq!(rows[0].pitcher_name, "Unknown Pitcher");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(
            export_file_name(Some("Jordan O'Ray Jr."), date),
            "jordan_o_ray_jr__command_data_2024-04-01.csv"
        );
        assert_eq!(
            export_file_name(None, date),
            "unknown_pitcher_command_data_2024-04-01.csv"
        );
    }

    #[test]
    fn test_one_decimal_degenerate() {
        assert_eq!(one_decimal(f64::NAN), "0.0");
        assert_eq!(one_decimal(f64::INFINITY), "0.0");
        assert_eq!(one_decimal(-20.0), "-20.0");
    }
}
