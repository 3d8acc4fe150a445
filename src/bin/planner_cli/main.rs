// ABOUTME: Planner CLI - command-line front end for the pace service and calculator
// ABOUTME: Calls each endpoint, drives a calculator session, and exposes the input masks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors
//!
//! Usage:
//! ```bash
//! # Pace for a 20:00 5K, per kilometer
//! planner-cli race-pace --time 20:00 --distance 5K --unit km
//!
//! # Solve a marathon from a pace, without a running server
//! planner-cli --offline calc --pace 500
//!
//! # Percentage-of-pace workout table
//! planner-cli pace-workouts --pace 6:00 --method speed
//!
//! # Saved workouts (needs the server)
//! planner-cli workout create --name "Tempo" --pace 7:30 --distance 6
//! planner-cli workout list
//!
//! # Lay out a workout, paces shown per kilometer
//! planner-cli plan --name "Track" -s warm-up/15:00/9:00 -s intervals/800m/5:40/x6 --unit min/km
//!
//! # Input masks
//! planner-cli mask time 123456
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use marathon_planner::client::{LocalPaceApi, PlannerApiClient};
use marathon_planner::logging::LoggingConfig;
use planner_core::constants::defaults;
use planner_core::models::{PaceUnit, PercentageMethod};
use tracing::debug;

use commands::calc::CalcArgs;
use commands::pace::DistanceArgs;
use helpers::Backend;

#[derive(Parser)]
#[command(
    name = "planner-cli",
    about = "Marathon Training Planner CLI",
    long_about = "Race pace, finish time, VDOT, and workout calculations from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pace service base URL
    #[arg(long, global = true, env = "PLANNER_API_URL", default_value = defaults::API_BASE_URL)]
    api_url: String,

    /// Calculate locally instead of calling the service
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Pace needed to finish a distance in a time
    RacePace {
        /// Finish time (`H:MM:SS` or `M:SS`)
        #[arg(long, default_value = defaults::FINISH_TIME)]
        time: String,

        #[command(flatten)]
        distance: DistanceArgs,

        /// Unit of the pace
        #[arg(long, default_value = "mi")]
        unit: PaceUnit,
    },

    /// Finish time for a distance at a pace
    RaceTime {
        /// Pace (`M:SS`)
        #[arg(long, default_value = defaults::RACE_PACE)]
        pace: String,

        #[command(flatten)]
        distance: DistanceArgs,

        /// Unit the pace is per
        #[arg(long, default_value = "mi")]
        unit: PaceUnit,
    },

    /// One pace adjusted by a percentage
    PacePercentage {
        /// Base pace
        #[arg(long, default_value = defaults::TRAINING_PACE)]
        pace: String,

        /// `pace` or `speed`
        #[arg(long, default_value = "pace")]
        method: PercentageMethod,

        /// Whole-number percentage (95 = 95%)
        #[arg(long, default_value_t = defaults::PERCENTAGE)]
        percentage: u32,
    },

    /// Percentage-of-pace workout table
    PaceWorkouts {
        /// Goal race pace
        #[arg(long, default_value = defaults::TRAINING_PACE)]
        pace: String,

        /// `pace` or `speed`
        #[arg(long, default_value = "pace")]
        method: PercentageMethod,
    },

    /// Convert a pace to the other unit
    ConvertPace {
        /// Pace to convert
        #[arg(long, default_value = defaults::TRAINING_PACE)]
        pace: String,

        /// Unit to convert into
        #[arg(long, default_value = "mi")]
        to: PaceUnit,
    },

    /// VDOT from a race result
    Vdot {
        /// Race time
        #[arg(long, default_value = defaults::FINISH_TIME)]
        time: String,

        #[command(flatten)]
        distance: DistanceArgs,
    },

    /// Training paces for a VDOT
    VdotPaces {
        /// VDOT score
        #[arg(long)]
        vdot: f64,

        /// Unit of the paces
        #[arg(long, default_value = "mi")]
        unit: PaceUnit,
    },

    /// Pfitzinger long-run progression
    LongRun {
        /// Long run length in `unit`
        #[arg(long, default_value_t = defaults::LONG_RUN_DISTANCE)]
        distance: u32,

        /// Goal marathon pace
        #[arg(long, default_value = defaults::RACE_PACE)]
        marathon_pace: String,

        /// Unit of distance and pace
        #[arg(long, default_value = "mi")]
        unit: PaceUnit,
    },

    /// Heart rate training zones
    HrZones {
        /// Maximum heart rate
        #[arg(long, default_value_t = defaults::MAX_HEART_RATE)]
        max_heart_rate: u32,
    },

    /// Run a calculator session: fill in time or pace and solve for the other
    Calc(CalcArgs),

    /// Saved workout management (needs the service)
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Apply an input mask to raw keystrokes
    Mask {
        #[command(subcommand)]
        action: MaskCommand,
    },

    /// Lay out a workout from segments and show its target paces
    Plan {
        /// Workout name
        #[arg(long, default_value = "Workout")]
        name: String,

        /// Segment as `TYPE/LENGTH/PACE[/xREPS]`, e.g. `intervals/800m/5:40/x6`
        #[arg(long = "segment", short = 's', required = true)]
        segments: Vec<String>,

        /// `min/mi`, `min/km`, or `mph`
        #[arg(long, default_value = "min/mi")]
        unit: String,
    },

    /// Show a per-mile pace per kilometer or as mph
    DisplayPace {
        /// Pace per mile (`M:SS`)
        pace: String,

        /// `min/mi`, `min/km`, or `mph`
        #[arg(long, default_value = "min/mi")]
        unit: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Save a workout
    Create {
        /// Workout name
        #[arg(long)]
        name: String,

        /// Pace (`M:SS`)
        #[arg(long)]
        pace: Option<String>,

        /// Distance
        #[arg(long)]
        distance: Option<f64>,

        /// Duration (`H:MM:SS`)
        #[arg(long)]
        time: Option<String>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List saved workouts
    List,

    /// Show one workout
    Get {
        /// Workout id
        id: i64,
    },

    /// Delete a workout
    Delete {
        /// Workout id
        id: i64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MaskCommand {
    /// Format digits as a clock (`1:23`, `12:34:56`)
    Time {
        /// Raw input
        raw: String,
    },

    /// Strip everything but digits
    Percentage {
        /// Raw input
        raw: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let backend = if cli.offline {
        Backend::Local(LocalPaceApi)
    } else {
        Backend::Remote(PlannerApiClient::new(cli.api_url))
    };
    debug!(backend = %backend, "Planner CLI");

    match cli.command {
        Command::RacePace {
            time,
            distance,
            unit,
        } => commands::pace::race_pace(&backend, time, &distance, unit).await?,
        Command::RaceTime {
            pace,
            distance,
            unit,
        } => commands::pace::race_time(&backend, pace, &distance, unit).await?,
        Command::PacePercentage {
            pace,
            method,
            percentage,
        } => commands::pace::pace_percentage(&backend, pace, method, percentage).await?,
        Command::PaceWorkouts { pace, method } => {
            commands::pace::pace_workouts(&backend, pace, method).await?;
        }
        Command::ConvertPace { pace, to } => commands::pace::convert(&backend, pace, to).await?,
        Command::Vdot { time, distance } => {
            commands::pace::vdot(&backend, time, &distance).await?;
        }
        Command::VdotPaces { vdot, unit } => {
            commands::training::vdot_paces(&backend, vdot, unit).await?;
        }
        Command::LongRun {
            distance,
            marathon_pace,
            unit,
        } => commands::training::long_run(&backend, distance, marathon_pace, unit).await?,
        Command::HrZones { max_heart_rate } => {
            commands::training::heart_rate_zones(&backend, max_heart_rate).await?;
        }
        Command::Calc(args) => match backend {
            Backend::Local(api) => commands::calc::run(api, &args).await?,
            Backend::Remote(api) => commands::calc::run(api, &args).await?,
        },
        Command::Workout { action } => {
            let client = backend.remote()?;
            match action {
                WorkoutCommand::Create {
                    name,
                    pace,
                    distance,
                    time,
                    notes,
                } => commands::workouts::create(client, name, pace, distance, time, notes).await?,
                WorkoutCommand::List => commands::workouts::list(client).await?,
                WorkoutCommand::Get { id } => commands::workouts::get(client, id).await?,
                WorkoutCommand::Delete { id } => commands::workouts::delete(client, id).await?,
            }
        }
        Command::Mask { action } => match action {
            MaskCommand::Time { raw } => commands::tools::mask_time(&raw),
            MaskCommand::Percentage { raw } => commands::tools::mask_percentage(&raw),
        },
        Command::Plan {
            name,
            segments,
            unit,
        } => commands::plan::run(&name, &segments, &unit)?,
        Command::DisplayPace { pace, unit } => commands::tools::display_pace(&pace, &unit)?,
    }

    Ok(())
}
