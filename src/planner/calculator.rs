// ABOUTME: Race calculator session fetching pace, finish time, workout table, and VDOT
// ABOUTME: Mirrors the calculator form: masked inputs, unit toggle, and one error message slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Race calculator
//!
//! The calculator remembers which of time or pace was typed last and solves
//! for the other one. Requests run one at a time; every fetch clears the
//! error slot before it starts, and any failure replaces it with a short
//! user-facing message. The underlying [`AppError`] goes to the log only.

use crate::client::PaceApi;
use planner_core::constants::messages;
use planner_core::errors::AppError;
use planner_core::formatters::mask_time_input;
use planner_core::models::{
    ConvertPaceQuery, PaceUnit, PaceWorkoutsQuery, PercentageMethod, RaceDistance, RacePaceQuery,
    RaceTimeQuery, VdotQuery, WorkoutPace,
};
use tracing::{debug, warn};

/// Which input field the user edited most recently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastUpdated {
    /// The finish time field
    Time,
    /// The pace field
    Pace,
}

/// A race calculation session
#[derive(Debug)]
pub struct Calculator<A> {
    api: A,
    distance: Option<RaceDistance>,
    time: String,
    pace: String,
    use_miles: bool,
    last_updated: Option<LastUpdated>,
    error: Option<String>,
    workout_paces: Vec<WorkoutPace>,
    vdot: Option<f64>,
}

impl<A: PaceApi> Calculator<A> {
    /// Fresh session: marathon distance, kilometers, nothing entered
    pub fn new(api: A) -> Self {
        Self {
            api,
            distance: Some(RaceDistance::default()),
            time: String::new(),
            pace: String::new(),
            use_miles: false,
            last_updated: None,
            error: None,
            workout_paces: Vec::new(),
            vdot: None,
        }
    }

    /// Selected race distance; `None` after [`reset`](Self::reset)
    pub const fn distance(&self) -> Option<RaceDistance> {
        self.distance
    }

    /// Finish time field
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Pace field
    pub fn pace(&self) -> &str {
        &self.pace
    }

    /// Whether paces are per mile
    pub const fn use_miles(&self) -> bool {
        self.use_miles
    }

    /// Unit paces are expressed per
    pub const fn unit(&self) -> PaceUnit {
        if self.use_miles {
            PaceUnit::Mile
        } else {
            PaceUnit::Kilometer
        }
    }

    /// Field edited most recently
    pub const fn last_updated(&self) -> Option<LastUpdated> {
        self.last_updated
    }

    /// Message from the most recent failed fetch
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Percentage-of-pace rows for the current pace
    pub fn workout_paces(&self) -> &[WorkoutPace] {
        &self.workout_paces
    }

    /// VDOT for the current time and distance
    pub const fn vdot(&self) -> Option<f64> {
        self.vdot
    }

    /// Type into the time field
    pub fn input_time(&mut self, raw: &str) {
        self.time = mask_time_input(raw);
        self.last_updated = Some(LastUpdated::Time);
    }

    /// Type into the pace field
    pub fn input_pace(&mut self, raw: &str) {
        self.pace = mask_time_input(raw);
        self.last_updated = Some(LastUpdated::Pace);
    }

    /// Choose the race distance
    pub fn select_distance(&mut self, distance: RaceDistance) {
        self.distance = Some(distance);
    }

    /// Solve for whichever field was not typed last
    ///
    /// With no edit recorded, fills an empty pace first, then an empty time.
    /// Does nothing when both are filled and neither was edited.
    pub async fn calculate(&mut self) {
        match self.last_updated {
            Some(LastUpdated::Time) => self.fetch_pace().await,
            Some(LastUpdated::Pace) => self.fetch_time().await,
            None if self.pace.is_empty() => self.fetch_pace().await,
            None if self.time.is_empty() => self.fetch_time().await,
            None => {}
        }
    }

    /// Pace from the time field, then the workout table and VDOT
    pub async fn fetch_pace(&mut self) {
        self.error = None;
        let Some(distance) = self.distance else {
            self.fail(messages::FETCH_PACE_FAILED, &missing_distance());
            return;
        };

        let query = RacePaceQuery {
            finish_time: self.time.clone(),
            unit: self.unit(),
            distance: distance.meters(),
        };
        match self.api.race_pace(&query).await {
            Ok(response) => {
                debug!(pace = %response.pace, "Fetched race pace");
                self.pace = response.pace;
                let pace = self.pace.clone();
                let time = self.time.clone();
                self.fetch_workout_paces(&pace).await;
                self.fetch_vdot(&time).await;
            }
            Err(e) => self.fail(messages::FETCH_PACE_FAILED, &e),
        }
    }

    /// Finish time from the pace field, then the workout table and VDOT
    pub async fn fetch_time(&mut self) {
        self.error = None;
        let Some(distance) = self.distance else {
            self.fail(messages::FETCH_TIME_FAILED, &missing_distance());
            return;
        };

        let query = RaceTimeQuery {
            pace: self.pace.clone(),
            unit: self.unit(),
            distance: distance.meters(),
        };
        match self.api.race_time(&query).await {
            Ok(response) => {
                debug!(time = %response.time, "Fetched race time");
                self.time = response.time;
                let pace = self.pace.clone();
                let time = self.time.clone();
                self.fetch_workout_paces(&pace).await;
                self.fetch_vdot(&time).await;
            }
            Err(e) => self.fail(messages::FETCH_TIME_FAILED, &e),
        }
    }

    /// Replace the workout table with the rows for `pace`
    pub async fn fetch_workout_paces(&mut self, pace: &str) {
        self.error = None;
        let query = PaceWorkoutsQuery {
            pace: pace.to_owned(),
            method: PercentageMethod::Pace,
        };
        match self.api.pace_workouts(&query).await {
            Ok(response) => self.workout_paces = response.workout_paces,
            Err(e) => self.fail(messages::FETCH_PACE_FAILED, &e),
        }
    }

    /// Replace the VDOT with the score for `time` over the selected distance
    pub async fn fetch_vdot(&mut self, time: &str) {
        self.error = None;
        let Some(distance) = self.distance else {
            self.fail(messages::FETCH_PACE_FAILED, &missing_distance());
            return;
        };

        let query = VdotQuery {
            distance: distance.meters(),
            time: time.to_owned(),
        };
        match self.api.vdot(&query).await {
            Ok(response) => self.vdot = Some(response.vdot),
            Err(e) => self.fail(messages::FETCH_PACE_FAILED, &e),
        }
    }

    /// Toggle miles/kilometers, converting a pace that is already filled in
    pub async fn switch_unit(&mut self) {
        self.use_miles = !self.use_miles;
        if self.pace.is_empty() {
            return;
        }

        let query = ConvertPaceQuery {
            pace: self.pace.clone(),
            target_unit: self.unit(),
        };
        match self.api.convert_pace(&query).await {
            Ok(response) => {
                self.pace = response.pace;
                let pace = self.pace.clone();
                self.fetch_workout_paces(&pace).await;
            }
            Err(e) => self.fail(messages::SWITCH_UNITS_FAILED, &e),
        }
    }

    /// Clear every field, the race distance included
    ///
    /// The unit toggle is a separate control and keeps its position.
    pub fn reset(&mut self) {
        self.error = None;
        self.time.clear();
        self.distance = None;
        self.pace.clear();
        self.last_updated = None;
        self.workout_paces.clear();
        self.vdot = None;
    }

    fn fail(&mut self, message: &str, error: &AppError) {
        warn!(error = %error, "{message}");
        self.error = Some(message.to_owned());
    }
}

fn missing_distance() -> AppError {
    AppError::missing_field("race distance")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LocalPaceApi;
    use async_trait::async_trait;
    use planner_core::errors::AppResult;
    use planner_core::models::{PaceResponse, TimeResponse, VdotResponse, WorkoutPacesResponse};

    /// Answers like the service but fails the calls listed in `fail`
    struct FlakyApi {
        fail_race_pace: bool,
        fail_vdot: bool,
        fail_convert: bool,
    }

    #[async_trait]
    impl PaceApi for FlakyApi {
        async fn race_pace(&self, query: &RacePaceQuery) -> AppResult<PaceResponse> {
            if self.fail_race_pace {
                return Err(AppError::external_unavailable("pace service", "down"));
            }
            LocalPaceApi.race_pace(query).await
        }

        async fn race_time(&self, query: &RaceTimeQuery) -> AppResult<TimeResponse> {
            LocalPaceApi.race_time(query).await
        }

        async fn pace_workouts(&self, query: &PaceWorkoutsQuery) -> AppResult<WorkoutPacesResponse> {
            LocalPaceApi.pace_workouts(query).await
        }

        async fn convert_pace(&self, query: &ConvertPaceQuery) -> AppResult<PaceResponse> {
            if self.fail_convert {
                return Err(AppError::external_unavailable("pace service", "down"));
            }
            LocalPaceApi.convert_pace(query).await
        }

        async fn vdot(&self, query: &VdotQuery) -> AppResult<VdotResponse> {
            if self.fail_vdot {
                return Err(AppError::external_unavailable("pace service", "down"));
            }
            LocalPaceApi.vdot(query).await
        }
    }

    fn flaky(fail_race_pace: bool, fail_vdot: bool, fail_convert: bool) -> Calculator<FlakyApi> {
        Calculator::new(FlakyApi {
            fail_race_pace,
            fail_vdot,
            fail_convert,
        })
    }

    #[tokio::test]
    async fn test_time_entry_solves_for_pace() {
        let mut calc = Calculator::new(LocalPaceApi);
        calc.select_distance(RaceDistance::FiveK);
        calc.input_time("2000");
        assert_eq!(calc.time(), "20:00");

        calc.calculate().await;
        assert_eq!(calc.pace(), "4:00");
        assert_eq!(calc.workout_paces().len(), 8);
        assert_eq!(calc.vdot(), Some(49.8));
        assert!(calc.error().is_none());
    }

    #[tokio::test]
    async fn test_pace_entry_solves_for_time() {
        let mut calc = Calculator::new(LocalPaceApi);
        calc.input_pace("500");
        assert_eq!(calc.pace(), "5:00");

        calc.calculate().await;
        assert_eq!(calc.time(), "3:30:58");
        assert!(calc.vdot().is_some());
        assert_eq!(calc.workout_paces()[4].designation, "Race Pace");
    }

    #[tokio::test]
    async fn test_calculate_without_edits() {
        let mut calc = Calculator::new(LocalPaceApi);
        calc.select_distance(RaceDistance::FiveK);
        calc.input_time("2000");
        calc.calculate().await;

        // Both fields filled, no fresh edit: nothing to solve
        calc.last_updated = None;
        calc.vdot = None;
        calc.calculate().await;
        assert!(calc.vdot().is_none());
    }

    #[tokio::test]
    async fn test_calculate_without_edits_fills_empty_pace() {
        let mut calc = Calculator::new(LocalPaceApi);
        calc.select_distance(RaceDistance::FiveK);
        calc.input_time("2000");
        calc.last_updated = None;

        calc.calculate().await;
        assert_eq!(calc.pace(), "4:00");
        assert_eq!(calc.time(), "20:00");
        assert_eq!(calc.vdot(), Some(49.8));
    }

    #[tokio::test]
    async fn test_calculate_without_edits_fills_empty_time() {
        let mut calc = Calculator::new(LocalPaceApi);
        calc.input_pace("500");
        calc.last_updated = None;

        calc.calculate().await;
        assert_eq!(calc.time(), "3:30:58");
        assert_eq!(calc.pace(), "5:00");
    }

    #[tokio::test]
    async fn test_successful_fetch_clears_previous_error() {
        let mut calc = flaky(true, false, false);
        calc.select_distance(RaceDistance::FiveK);
        calc.input_time("2000");
        calc.calculate().await;
        assert_eq!(calc.error(), Some(messages::FETCH_PACE_FAILED));

        calc.api.fail_race_pace = false;
        calc.calculate().await;
        assert!(calc.error().is_none());
        assert_eq!(calc.pace(), "4:00");
    }

    #[tokio::test]
    async fn test_failed_pace_sets_message() {
        let mut calc = flaky(true, false, false);
        calc.input_time("2000");
        calc.calculate().await;
        assert_eq!(calc.error(), Some(messages::FETCH_PACE_FAILED));
        assert!(calc.pace().is_empty());
    }

    #[tokio::test]
    async fn test_failed_vdot_after_time_uses_pace_message() {
        let mut calc = flaky(false, true, false);
        calc.input_pace("500");
        calc.calculate().await;
        assert_eq!(calc.time(), "3:30:58");
        assert_eq!(calc.error(), Some(messages::FETCH_PACE_FAILED));
    }

    #[tokio::test]
    async fn test_switch_unit_converts_pace() {
        let mut calc = Calculator::new(LocalPaceApi);
        calc.select_distance(RaceDistance::FiveK);
        calc.input_time("2000");
        calc.calculate().await;
        assert_eq!(calc.pace(), "4:00");

        calc.switch_unit().await;
        assert!(calc.use_miles());
        assert_eq!(calc.pace(), "6:26");
        assert_eq!(calc.workout_paces()[4].pace, "6:26");
    }

    #[tokio::test]
    async fn test_switch_unit_failure() {
        let mut calc = flaky(false, false, true);
        calc.input_pace("500");
        calc.switch_unit().await;
        assert!(calc.use_miles());
        assert_eq!(calc.error(), Some(messages::SWITCH_UNITS_FAILED));
        assert_eq!(calc.pace(), "5:00");
    }

    #[tokio::test]
    async fn test_switch_unit_without_pace_only_toggles() {
        let mut calc = flaky(false, false, true);
        calc.switch_unit().await;
        assert_eq!(calc.unit(), PaceUnit::Mile);
        assert!(calc.error().is_none());
    }

    #[tokio::test]
    async fn test_reset_clears_distance() {
        let mut calc = Calculator::new(LocalPaceApi);
        calc.input_time("2000");
        calc.calculate().await;
        calc.reset();

        assert!(calc.distance().is_none());
        assert!(calc.time().is_empty());
        assert!(calc.pace().is_empty());
        assert!(calc.workout_paces().is_empty());
        assert!(calc.vdot().is_none());
        assert!(calc.last_updated().is_none());

        calc.input_time("2000");
        calc.calculate().await;
        assert_eq!(calc.error(), Some(messages::FETCH_PACE_FAILED));
    }
}
