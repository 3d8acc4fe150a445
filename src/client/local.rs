// ABOUTME: In-process PaceApi backed directly by the calculation crate
// ABOUTME: Produces the same responses as the HTTP service without a network hop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::PaceApi;
use async_trait::async_trait;
use planner_core::errors::AppResult;
use planner_core::models::{
    ConvertPaceQuery, PaceResponse, PaceWorkoutsQuery, RacePaceQuery, RaceTimeQuery,
    TimeResponse, VdotQuery, VdotResponse, WorkoutPacesResponse,
};
use planner_intelligence::algorithms::{
    convert_pace, race_pace, race_time, vdot_from_race, workout_paces,
};
use tracing::debug;

/// Answers pace calls locally
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPaceApi;

#[async_trait]
impl PaceApi for LocalPaceApi {
    async fn race_pace(&self, query: &RacePaceQuery) -> AppResult<PaceResponse> {
        debug!(finish_time = %query.finish_time, unit = %query.unit, "Local race pace");
        let pace = race_pace(&query.finish_time, query.unit, query.distance)?;
        Ok(PaceResponse { pace })
    }

    async fn race_time(&self, query: &RaceTimeQuery) -> AppResult<TimeResponse> {
        debug!(pace = %query.pace, unit = %query.unit, "Local race time");
        let time = race_time(&query.pace, query.unit, query.distance)?;
        Ok(TimeResponse { time })
    }

    async fn pace_workouts(&self, query: &PaceWorkoutsQuery) -> AppResult<WorkoutPacesResponse> {
        let workout_paces = workout_paces(&query.pace, query.method)?;
        Ok(WorkoutPacesResponse { workout_paces })
    }

    async fn convert_pace(&self, query: &ConvertPaceQuery) -> AppResult<PaceResponse> {
        let pace = convert_pace(&query.pace, query.target_unit)?;
        Ok(PaceResponse { pace })
    }

    async fn vdot(&self, query: &VdotQuery) -> AppResult<VdotResponse> {
        let vdot = vdot_from_race(query.distance, &query.time)?;
        Ok(VdotResponse { vdot })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::models::{PaceUnit, PercentageMethod};

    #[tokio::test]
    async fn test_local_race_pace() {
        let query = RacePaceQuery {
            finish_time: "20:00".to_owned(),
            unit: PaceUnit::Kilometer,
            distance: 5000.0,
        };
        let response = LocalPaceApi.race_pace(&query).await.unwrap();
        assert_eq!(response.pace, "4:00");
    }

    #[tokio::test]
    async fn test_local_workout_table() {
        let query = PaceWorkoutsQuery {
            pace: "6:00".to_owned(),
            method: PercentageMethod::Pace,
        };
        let response = LocalPaceApi.pace_workouts(&query).await.unwrap();
        assert_eq!(response.workout_paces.len(), 8);
    }

    #[tokio::test]
    async fn test_local_errors_propagate() {
        let query = VdotQuery {
            distance: 5000.0,
            time: "not a time".to_owned(),
        };
        let err = LocalPaceApi.vdot(&query).await.unwrap_err();
        assert_eq!(err.http_status(), 400);
    }
}
