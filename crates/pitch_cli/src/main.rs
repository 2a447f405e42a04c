//! Pitch Command CLI
//!
//! Score single pitches, print session breakdowns and export the command
//! database CSV.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pitch-command")]
#[command(about = "Grade pitch command against the catcher's target", long_about = None)]
struct Cli {
    /// Scoring config JSON (standard tables when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Score one pitch
    Score {
        /// Pitch type code (FS, SI, CT, SL, SW, CB, CH, SP, KN)
        #[arg(long, default_value = "FS")]
        pitch: String,

        /// Pitcher handedness (RHP or LHP)
        #[arg(long, default_value = "RHP")]
        hand: String,

        /// Catcher target zone (1-9)
        #[arg(long)]
        target: i64,

        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        target_x: f64,

        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        target_y: f64,

        /// Ball location zone (1-9; anything else needs --ball-surface-x/y)
        #[arg(long, allow_negative_numbers = true)]
        ball: i64,

        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        ball_x: f64,

        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        ball_y: f64,

        /// Ball click on the capture surface, used to repair an unknown zone
        #[arg(long, requires = "ball_surface_y", allow_negative_numbers = true)]
        ball_surface_x: Option<f64>,

        #[arg(long, requires = "ball_surface_x", allow_negative_numbers = true)]
        ball_surface_y: Option<f64>,

        /// Print the full result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the overall score and per-pitch-type breakdown of a session
    Summary {
        /// Session JSON file
        #[arg(long)]
        session: PathBuf,

        /// Print the summary as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Export a session to CSV
    Export {
        /// Session JSON file
        #[arg(long)]
        session: PathBuf,

        /// Output CSV path (defaults to the dated per-pitcher file name)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Append rows without a header
        #[arg(long, default_value = "false")]
        append: bool,

        /// Pitcher name (overrides the session file)
        #[arg(long)]
        pitcher: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = pitch_cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Score {
            pitch,
            hand,
            target,
            target_x,
            target_y,
            ball,
            ball_x,
            ball_y,
            ball_surface_x,
            ball_surface_y,
            json,
        } => {
            let descriptor = pitch_core::PitchDescriptor::new(
                pitch.parse().context("Invalid --pitch")?,
                hand.parse().context("Invalid --hand")?,
            );
            let target = pitch_core::ZonePosition::try_new(target, target_x, target_y)
                .context("Invalid --target")?;
            let mut input = pitch_core::PitchInput {
                descriptor,
                catcher_target: Some(target),
                ..Default::default()
            };
            match (ball_surface_x, ball_surface_y) {
                (Some(surface_x), Some(surface_y)) => {
                    input.ball_mark = Some(pitch_core::RawMark {
                        zone: ball,
                        x: ball_x,
                        y: ball_y,
                        surface_x,
                        surface_y,
                    });
                }
                _ => {
                    input.ball_location = Some(
                        pitch_core::ZonePosition::try_new(ball, ball_x, ball_y)
                            .context("Invalid --ball")?,
                    );
                }
            }
            let event = input.resolve(&config.geometry)?;

            let result = pitch_core::score_pitch(
                &event.descriptor,
                &event.catcher_target,
                &event.ball_location,
                &config,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", pitch_cli::format_score(&result));
            }
        }

        Commands::Summary { session, json } => {
            let file = pitch_cli::load_session_file(&session)?;
            let summary = pitch_cli::build_session(&file, config)?.summarize();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", pitch_cli::format_breakdown(&summary));
            }
        }

        Commands::Export {
            session,
            out,
            append,
            pitcher,
        } => {
            let file = pitch_cli::load_session_file(&session)?;
            if file.pitches.is_empty() {
                anyhow::bail!("No pitches to export in {}", session.display());
            }

            let name = pitcher.or(file.pitcher_name.clone());
            let out = out.unwrap_or_else(|| {
                pitch_cli::default_export_path(name.as_deref(), append, chrono::Utc::now())
            });

            // row cells carry local wall-clock time
            let now = chrono::Local::now().naive_local();
            let rows = pitch_cli::build_session(&file, config)?.export_rows(name.as_deref(), now);
            pitch_cli::export_csv(&rows, &out, append)?;
            println!("Exported {} pitches to {}", rows.len(), out.display());
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pitch-command CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
