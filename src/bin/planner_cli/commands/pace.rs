// ABOUTME: Pace endpoint commands for planner-cli
// ABOUTME: Race pace, finish time, percentage adjustments, the workout table, conversion, and VDOT
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::helpers::display;
use crate::helpers::Backend;
use anyhow::Result;
use clap::Args;
use planner_core::errors::AppResult;
use planner_core::models::{
    ConvertPaceQuery, DistanceUnit, PacePercentageQuery, PaceUnit, PaceWorkoutsQuery,
    PercentageMethod, RaceDistance, RacePaceQuery, RaceTimeQuery, VdotQuery,
};
use planner_intelligence::algorithms;

/// Race distance selection shared by several commands
#[derive(Args)]
pub struct DistanceArgs {
    /// Race distance (800M, 1600M, 5K, 10K, Half Marathon, Marathon)
    #[arg(long, default_value = "5K")]
    distance: RaceDistance,

    /// Custom distance in meters, overriding --distance
    #[arg(long)]
    meters: Option<f64>,
}

impl DistanceArgs {
    /// The selected distance in meters
    pub fn meters(&self) -> AppResult<f64> {
        match self.meters {
            Some(meters) => Ok(RaceDistance::other(meters, DistanceUnit::Meter)?.meters()),
            None => Ok(self.distance.meters()),
        }
    }
}

/// Pace needed to cover the distance in `time`
pub async fn race_pace(
    backend: &Backend,
    time: String,
    distance: &DistanceArgs,
    unit: PaceUnit,
) -> Result<()> {
    let query = RacePaceQuery {
        finish_time: time,
        unit,
        distance: distance.meters()?,
    };
    let response = backend.api().race_pace(&query).await?;
    display::display_pace("Pace", &response.pace, unit);
    Ok(())
}

/// Finish time for the distance at `pace`
pub async fn race_time(
    backend: &Backend,
    pace: String,
    distance: &DistanceArgs,
    unit: PaceUnit,
) -> Result<()> {
    let query = RaceTimeQuery {
        pace,
        unit,
        distance: distance.meters()?,
    };
    let response = backend.api().race_time(&query).await?;
    println!("Time: {}", response.time);
    Ok(())
}

/// `pace` adjusted by `percentage`
pub async fn pace_percentage(
    backend: &Backend,
    pace: String,
    method: PercentageMethod,
    percentage: u32,
) -> Result<()> {
    let adjusted = match backend {
        Backend::Local(_) => algorithms::pace_percentage(&pace, method, percentage)?,
        Backend::Remote(client) => {
            let query = PacePercentageQuery {
                pace,
                method,
                percentage,
            };
            client.pace_percentage(&query).await?.pace
        }
    };
    println!("{percentage}% by {method}: {adjusted}");
    Ok(())
}

/// Percentage-of-pace table for `pace`
pub async fn pace_workouts(backend: &Backend, pace: String, method: PercentageMethod) -> Result<()> {
    let query = PaceWorkoutsQuery { pace, method };
    let response = backend.api().pace_workouts(&query).await?;
    display::display_workout_table(&response.workout_paces);
    Ok(())
}

/// `pace` expressed per `target_unit`
pub async fn convert(backend: &Backend, pace: String, target_unit: PaceUnit) -> Result<()> {
    let query = ConvertPaceQuery { pace, target_unit };
    let response = backend.api().convert_pace(&query).await?;
    display::display_pace("Pace", &response.pace, target_unit);
    Ok(())
}

/// VDOT for `time` over the distance
pub async fn vdot(backend: &Backend, time: String, distance: &DistanceArgs) -> Result<()> {
    let query = VdotQuery {
        distance: distance.meters()?,
        time,
    };
    let response = backend.api().vdot(&query).await?;
    println!("VDOT: {}", response.vdot);
    Ok(())
}
