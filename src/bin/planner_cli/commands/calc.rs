// ABOUTME: Calculator session command for planner-cli
// ABOUTME: Feeds raw time or pace keystrokes through a Calculator and prints what it solved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::helpers::display;
use anyhow::{anyhow, Result};
use clap::Args;
use marathon_planner::client::PaceApi;
use marathon_planner::planner::Calculator;
use planner_core::models::{DistanceUnit, RaceDistance};

/// Calculator inputs; when both time and pace are given, pace counts as typed last
#[derive(Args)]
pub struct CalcArgs {
    /// Race distance (800M, 1600M, 5K, 10K, Half Marathon, Marathon)
    #[arg(long, default_value = "Marathon")]
    distance: RaceDistance,

    /// Custom distance in meters, overriding --distance
    #[arg(long)]
    meters: Option<f64>,

    /// Finish time keystrokes (e.g. `31500` for 3:15:00)
    #[arg(long)]
    time: Option<String>,

    /// Pace keystrokes (e.g. `745` for 7:45)
    #[arg(long)]
    pace: Option<String>,

    /// Work in miles instead of kilometers
    #[arg(long)]
    miles: bool,

    /// Toggle the unit after solving, converting the pace
    #[arg(long)]
    switch_unit: bool,
}

/// Run one calculator session against `api`
pub async fn run<A: PaceApi>(api: A, args: &CalcArgs) -> Result<()> {
    let mut calc = Calculator::new(api);

    let distance = match args.meters {
        Some(meters) => RaceDistance::other(meters, DistanceUnit::Meter)?,
        None => args.distance,
    };
    calc.select_distance(distance);

    if args.miles {
        calc.switch_unit().await;
    }
    if let Some(time) = &args.time {
        calc.input_time(time);
    }
    if let Some(pace) = &args.pace {
        calc.input_pace(pace);
    }

    calc.calculate().await;
    if args.switch_unit {
        calc.switch_unit().await;
    }

    display::display_calculator(&calc);
    calc.error().map_or(Ok(()), |message| Err(anyhow!(message.to_owned())))
}
