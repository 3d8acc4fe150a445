// ABOUTME: Race pace and training calculation engine for the Marathon Training Planner
// ABOUTME: Split from the service crate so the math compiles and tests without the web stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

#![deny(unsafe_code)]

//! # Planner Intelligence
//!
//! Pure calculation functions used by the pace service: parsing and
//! formatting clock strings, converting between paces and finish times,
//! percentage-of-pace workout tables, VDOT scores and training paces,
//! progressive long-run splits, and heart rate zones.

/// Calculation algorithms for every pace service endpoint
pub mod algorithms;
