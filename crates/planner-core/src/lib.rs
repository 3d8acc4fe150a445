// ABOUTME: Core types and constants for the Marathon Training Planner
// ABOUTME: Foundation crate with error handling, input masks, wire models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types and constants for the Marathon
//! Training Planner. Both the calculation engine and the service/client crate
//! depend on it, so it is kept small and free of runtime dependencies.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, race distances, and service defaults
//! - **formatters**: Keystroke masks for time and percentage inputs
//! - **models**: Units, race distances, and the HTTP wire format

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Input masks applied to raw keystrokes before they reach the calculator
pub mod formatters;

/// Units, race distances, and request/response models shared by server and client
pub mod models;
