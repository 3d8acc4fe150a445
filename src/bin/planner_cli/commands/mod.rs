// ABOUTME: Command modules for planner-cli
// ABOUTME: Pace endpoints, training tools, calculator sessions, saved workouts, and input masks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

pub mod calc;
pub mod pace;
pub mod plan;
pub mod tools;
pub mod training;
pub mod workouts;
