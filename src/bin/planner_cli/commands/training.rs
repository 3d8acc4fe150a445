// ABOUTME: Training tool commands for planner-cli
// ABOUTME: VDOT training paces, Pfitzinger long runs, and heart rate zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::helpers::display;
use crate::helpers::Backend;
use anyhow::Result;
use planner_core::models::{HeartRateQuery, LongRunQuery, PaceUnit, VdotPacesQuery};
use planner_intelligence::algorithms;

/// Daniels training paces for `vdot`
pub async fn vdot_paces(backend: &Backend, vdot: f64, unit: PaceUnit) -> Result<()> {
    let paces = match backend {
        Backend::Local(_) => algorithms::training_paces(vdot, unit)?,
        Backend::Remote(client) => {
            client
                .vdot_paces(&VdotPacesQuery { vdot, unit })
                .await?
                .training_paces
        }
    };
    display::display_training_paces(vdot, &paces, unit);
    Ok(())
}

/// Progressive long run of `distance` units at marathon pace `marathon_pace`
pub async fn long_run(
    backend: &Backend,
    distance: u32,
    marathon_pace: String,
    unit: PaceUnit,
) -> Result<()> {
    let splits = match backend {
        Backend::Local(_) => algorithms::long_run_splits(distance, &marathon_pace, unit)?,
        Backend::Remote(client) => {
            let query = LongRunQuery {
                distance,
                marathon_pace,
                unit,
            };
            client.long_run(&query).await?
        }
    };
    display::display_long_run(&splits);
    Ok(())
}

/// Heart rate zones for `max_heart_rate`
pub async fn heart_rate_zones(backend: &Backend, max_heart_rate: u32) -> Result<()> {
    let zones = match backend {
        Backend::Local(_) => algorithms::heart_rate_zones(max_heart_rate)?,
        Backend::Remote(client) => {
            client
                .heart_rate_zones(&HeartRateQuery { max_heart_rate })
                .await?
        }
    };
    display::display_zones(max_heart_rate, &zones);
    Ok(())
}
