// ABOUTME: Output formatting helpers for planner-cli
// ABOUTME: Renders paces, workout tables, training zones, and calculator state as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use marathon_planner::client::PaceApi;
use marathon_planner::planner::{Calculator, WorkoutBuilder};
use planner_core::models::{
    HeartRateZones, LongRunSplit, PaceUnit, TrainingPaces, Workout, WorkoutPace,
};

/// Display a single pace
pub fn display_pace(label: &str, pace: &str, unit: PaceUnit) {
    println!("{label}: {pace} /{unit}");
}

/// Display the percentage-of-pace table
pub fn display_workout_table(rows: &[WorkoutPace]) {
    println!("{:>6}  {:<28}  {:>6}", "%", "Designation", "Pace");
    println!("{}", "-".repeat(44));
    for row in rows {
        println!(
            "{:>5}%  {:<28}  {:>6}",
            row.percentage, row.designation, row.pace
        );
    }
}

/// Display Daniels training paces
pub fn display_training_paces(vdot: f64, paces: &TrainingPaces, unit: PaceUnit) {
    println!("Training paces for VDOT {vdot} (per {unit})");
    println!("{}", "=".repeat(40));
    for (name, pace) in paces.entries() {
        println!("   {name:<14} {pace:>8}");
    }
}

/// Display a long-run progression
pub fn display_long_run(splits: &[LongRunSplit]) {
    for split in splits {
        println!("   {} {:>3}: {}", split.unit, split.split, split.target_pace());
    }
}

/// Display heart rate zones
pub fn display_zones(max_heart_rate: u32, zones: &HeartRateZones) {
    println!("Heart rate zones for max HR {max_heart_rate}");
    for (zone, (low, high)) in zones {
        println!("   Zone {zone}: {low}-{high} bpm");
    }
}

/// Display one saved workout
pub fn display_workout(workout: &Workout) {
    println!("#{} {}", workout.id, workout.name);
    if let Some(pace) = &workout.pace {
        println!("   Pace: {pace}");
    }
    if let Some(distance) = workout.distance {
        println!("   Distance: {distance}");
    }
    if let Some(time) = &workout.time {
        println!("   Time: {time}");
    }
    if let Some(notes) = &workout.notes {
        println!("   Notes: {notes}");
    }
}

/// Display a finished calculator session
pub fn display_calculator<A: PaceApi>(calc: &Calculator<A>) {
    let distance = calc
        .distance()
        .map_or_else(|| "(none)".to_owned(), |d| d.to_string());
    println!("Race:  {distance}");
    println!("Time:  {}", calc.time());
    println!("Pace:  {} /{}", calc.pace(), calc.unit());
    if let Some(vdot) = calc.vdot() {
        println!("VDOT: {vdot}");
    }
    if !calc.workout_paces().is_empty() {
        println!();
        display_workout_table(calc.workout_paces());
    }
}

/// Display a workout plan with paces in the builder's display unit
pub fn display_plan(builder: &WorkoutBuilder) {
    println!("{}", builder.name());
    for (index, segment) in builder.segments().iter().enumerate() {
        let length = match (segment.duration, segment.distance) {
            (Some(duration), _) => format!(
                "{}:{:02}",
                duration.minutes.unwrap_or_default(),
                duration.seconds.unwrap_or_default()
            ),
            (None, Some(distance)) => format!("{}{}", distance.value, distance.unit),
            (None, None) => String::new(),
        };
        let repetitions = segment
            .interval
            .as_ref()
            .and_then(|interval| interval.repetitions)
            .map_or_else(String::new, |n| format!("{n} x "));
        println!(
            "  {}. {:<10} {repetitions}{length} @ {}",
            index + 1,
            segment.segment_type.label(),
            builder.display_pace(&segment.pace.value)
        );
    }
}
