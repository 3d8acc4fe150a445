// ABOUTME: Local formatting commands for planner-cli
// ABOUTME: Time and percentage input masks, and per-mile pace display conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use anyhow::{anyhow, Result};
use marathon_planner::planner::{self, PaceDisplayUnit};
use planner_core::formatters::{mask_time_input, sanitize_percentage};

/// Print `raw` through the time mask
pub fn mask_time(raw: &str) {
    println!("{}", mask_time_input(raw));
}

/// Print `raw` with everything but digits removed
pub fn mask_percentage(raw: &str) {
    println!("{}", sanitize_percentage(raw));
}

/// Print a per-mile pace in the requested display unit
pub fn display_pace(pace: &str, unit: &str) -> Result<()> {
    if !planner::is_valid_pace(pace) {
        return Err(anyhow!("Invalid pace '{pace}': expected M:SS or MM:SS"));
    }
    let unit: PaceDisplayUnit = unit.parse()?;
    println!("{}", planner::display_pace(pace, unit));
    Ok(())
}
