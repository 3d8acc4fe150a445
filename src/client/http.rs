// ABOUTME: reqwest client for the pace service HTTP API
// ABOUTME: Shares one pooled connection client and maps error bodies back into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::PaceApi;
use async_trait::async_trait;
use planner_core::constants::{defaults, endpoints};
use planner_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use planner_core::models::{
    ConvertPaceQuery, HeartRateQuery, HeartRateZones, LongRunQuery, LongRunSplit,
    PacePercentageQuery, PaceResponse, PaceWorkoutsQuery, RacePaceQuery, RaceTimeQuery,
    ServiceBanner, TimeResponse, TrainingPacesResponse, VdotPacesQuery, VdotQuery, VdotResponse,
    Workout, WorkoutCreate, WorkoutPacesResponse,
};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};

/// Overall request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// TCP connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable naming the service base URL
pub const API_URL_ENV: &str = "PLANNER_API_URL";

/// Empty query string for endpoints without parameters
const NO_QUERY: &[(&str, &str)] = &[];

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Pooled client shared by every `PlannerApiClient`
fn shared_client() -> Client {
    SHARED_CLIENT
        .get_or_init(|| {
            build_or_default(
                Client::builder()
                    .timeout(REQUEST_TIMEOUT)
                    .connect_timeout(CONNECT_TIMEOUT),
            )
        })
        .clone()
}

/// Build `builder`, falling back to a default client without timeouts
fn build_or_default(builder: ClientBuilder) -> Client {
    builder.build().unwrap_or_else(|e| {
        warn!(error = %e, "HTTP client build failed, using defaults without timeouts");
        Client::new()
    })
}

/// HTTP client for the pace service
#[derive(Debug, Clone)]
pub struct PlannerApiClient {
    base_url: String,
    client: Client,
}

impl PlannerApiClient {
    /// Client for the service at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, shared_client())
    }

    /// Client using a caller-supplied `reqwest::Client`
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, client }
    }

    /// Client for `PLANNER_API_URL`, falling back to the local default
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var(API_URL_ENV).unwrap_or_else(|_| defaults::API_BASE_URL.to_owned()))
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status, &body))
    }

    async fn get<Q, R>(&self, path: &str, query: &Q) -> AppResult<R>
    where
        Q: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "GET");
        let response = Self::send(self.client.get(self.url(path)).query(query)).await?;
        Ok(response.json().await?)
    }

    /// `GET /`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or answers with an error
    pub async fn banner(&self) -> AppResult<ServiceBanner> {
        self.get(endpoints::ROOT, NO_QUERY).await
    }

    /// `GET /pace_percentage`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or rejects the query
    pub async fn pace_percentage(&self, query: &PacePercentageQuery) -> AppResult<PaceResponse> {
        self.get(endpoints::PACE_PERCENTAGE, query).await
    }

    /// `GET /vdot_paces`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or rejects the query
    pub async fn vdot_paces(&self, query: &VdotPacesQuery) -> AppResult<TrainingPacesResponse> {
        self.get(endpoints::VDOT_PACES, query).await
    }

    /// `GET /pfitz_long_run_pace`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or rejects the query
    pub async fn long_run(&self, query: &LongRunQuery) -> AppResult<Vec<LongRunSplit>> {
        self.get(endpoints::LONG_RUN_PACE, query).await
    }

    /// `GET /heart_rate_zones`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or rejects the query
    pub async fn heart_rate_zones(&self, query: &HeartRateQuery) -> AppResult<HeartRateZones> {
        self.get(endpoints::HEART_RATE_ZONES, query).await
    }

    /// `POST /create_workout`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or rejects the workout
    pub async fn create_workout(&self, workout: &WorkoutCreate) -> AppResult<Workout> {
        let request = self.client.post(self.url(endpoints::CREATE_WORKOUT)).json(workout);
        Ok(Self::send(request).await?.json().await?)
    }

    /// `GET /get_workouts`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable
    pub async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        self.get(endpoints::GET_WORKOUTS, NO_QUERY).await
    }

    /// `GET /workouts/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn get_workout(&self, id: i64) -> AppResult<Workout> {
        self.get(&format!("{}/{id}", endpoints::WORKOUTS), NO_QUERY).await
    }

    /// `DELETE /workouts/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn delete_workout(&self, id: i64) -> AppResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("{}/{id}", endpoints::WORKOUTS)));
        Self::send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl PaceApi for PlannerApiClient {
    async fn race_pace(&self, query: &RacePaceQuery) -> AppResult<PaceResponse> {
        self.get(endpoints::RACE_PACE, query).await
    }

    async fn race_time(&self, query: &RaceTimeQuery) -> AppResult<TimeResponse> {
        self.get(endpoints::RACE_TIME, query).await
    }

    async fn pace_workouts(&self, query: &PaceWorkoutsQuery) -> AppResult<WorkoutPacesResponse> {
        self.get(endpoints::PACE_WORKOUTS, query).await
    }

    async fn convert_pace(&self, query: &ConvertPaceQuery) -> AppResult<PaceResponse> {
        self.get(endpoints::CONVERT_PACE, query).await
    }

    async fn vdot(&self, query: &VdotQuery) -> AppResult<VdotResponse> {
        self.get(endpoints::VDOT, query).await
    }
}

/// Rebuild the service's error from its JSON body, or describe the raw reply
fn error_from_body(status: StatusCode, body: &str) -> AppError {
    serde_json::from_str::<ErrorResponse>(body).map_or_else(
        |_| {
            AppError::new(
                ErrorCode::ExternalServiceError,
                format!("pace service returned {status}: {body}"),
            )
        },
        |parsed| AppError::new(parsed.error.code, parsed.error.message),
    )
}
