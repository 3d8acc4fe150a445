// ABOUTME: Calculation algorithms behind every pace service endpoint
// ABOUTME: Clock handling, pace math, percentage tables, VDOT, long runs, and heart rate zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Calculation algorithms
//!
//! Every function here is pure and synchronous. Durations are `f64` seconds
//! held at microsecond resolution, and clock strings go in and out through
//! [`clock::parse_clock`] and [`clock::format_clock`].
//!
//! # Example
//!
//! ```rust
//! use planner_core::models::PaceUnit;
//! use planner_intelligence::algorithms::{race_pace, vdot_from_race};
//!
//! let pace = race_pace("20:00", PaceUnit::Kilometer, 5000.0)?;
//! assert_eq!(pace, "4:00");
//! let vdot = vdot_from_race(5000.0, "20:00")?;
//! assert!((vdot - 49.8).abs() < 1e-9);
//! # Ok::<(), planner_core::errors::AppError>(())
//! ```

pub mod clock;
pub mod heart_rate;
pub mod long_run;
pub mod pace;
pub mod percentage;
pub mod vdot;

pub use clock::{format_clock, parse_clock};
pub use heart_rate::heart_rate_zones;
pub use long_run::long_run_splits;
pub use pace::{convert_pace, race_pace, race_time};
pub use percentage::{pace_percentage, workout_paces, WORKOUT_DESIGNATIONS};
pub use vdot::{calculate_vdot, training_paces, vdot_from_race, TrainingIntensity};
