// ABOUTME: In-memory workout builder assembling warm-up, interval, and cool-down segments
// ABOUTME: Validates segment drafts and renders target paces per mile, per kilometer, or as mph
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Workout builder
//!
//! Segments are edited through a [`SegmentDraft`]: [`WorkoutBuilder::begin_new_segment`]
//! or [`WorkoutBuilder::select_segment`] hands one out, the caller fills it
//! in, and [`WorkoutBuilder::apply`] validates it and stores the result. A
//! segment is measured by time or by distance, never both; setting one clears
//! the other.

use planner_core::constants::units::{KM_PER_MILE_PRECISE, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use planner_core::errors::AppError;
use planner_core::models::{DistanceUnit, PaceUnit};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// `M:SS` or `MM:SS` with seconds below 60
static PACE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-5][0-9])$").ok());

/// Reasons a builder operation is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutBuilderError {
    /// Time-measured segment without both minutes and seconds
    #[error("Both minutes and seconds are required")]
    MissingDuration,
    /// Distance-measured segment without a distance
    #[error("Distance is required")]
    MissingDistance,
    /// Blank target pace
    #[error("Pace is required")]
    MissingPace,
    /// No segment type chosen
    #[error("Segment type is required")]
    MissingType,
    /// A rest recovery is always measured by time
    #[error("A rest recovery cannot be measured by distance")]
    RestRecoveryDistance,
    /// No segment has this id
    #[error("No segment with id {0}")]
    UnknownSegment(u64),
    /// The draft does not belong to the segment currently open
    #[error("Segment {0} is not open for editing")]
    NotEditing(u64),
}

/// Kind of workout segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    /// Easy running before the main set
    WarmUp,
    /// Steady training block
    Training,
    /// Repeated work intervals with recoveries
    Intervals,
    /// Recovery running
    Recovery,
    /// Easy running after the main set
    CoolDown,
}

impl SegmentType {
    /// Every segment type in menu order
    pub const ALL: [Self; 5] = [
        Self::WarmUp,
        Self::Intervals,
        Self::Training,
        Self::Recovery,
        Self::CoolDown,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WarmUp => "Warm Up",
            Self::Training => "Training",
            Self::Intervals => "Intervals",
            Self::Recovery => "Recovery",
            Self::CoolDown => "Cool Down",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SegmentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "warmup" => Ok(Self::WarmUp),
            "training" => Ok(Self::Training),
            "intervals" | "interval" => Ok(Self::Intervals),
            "recovery" => Ok(Self::Recovery),
            "cooldown" => Ok(Self::CoolDown),
            _ => Err(AppError::invalid_format(format!(
                "Unknown segment type: '{s}'. Valid options: Warm Up, Intervals, Training, Recovery, Cool Down"
            ))),
        }
    }
}

/// How a segment's length is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measurement {
    /// Minutes and seconds
    #[default]
    Time,
    /// A distance
    Distance,
}

/// What happens between work intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryType {
    /// Standing or walking rest, measured by time
    #[default]
    Rest,
    /// Jogging recovery, by time or distance
    Run,
}

/// Segment duration; either part may still be blank while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentDuration {
    /// Whole minutes
    pub minutes: Option<u32>,
    /// Seconds
    pub seconds: Option<u32>,
}

impl SegmentDuration {
    fn is_complete(self) -> bool {
        self.minutes.is_some() && self.seconds.is_some()
    }
}

/// Segment distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistance {
    /// Distance value
    pub value: f64,
    /// Unit of `value`
    pub unit: DistanceUnit,
}

/// Target pace as typed, with its unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPace {
    /// Pace string, normally `M:SS`
    pub value: String,
    /// Unit the pace is per
    pub unit: PaceUnit,
}

/// The recovery between work intervals
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecoveryInterval {
    /// Time or distance
    pub measurement: Measurement,
    /// Recovery duration
    pub duration: Option<SegmentDuration>,
    /// Recovery distance
    pub distance: Option<SegmentDistance>,
    /// Recovery pace
    pub pace: Option<TargetPace>,
}

/// Extra settings carried by an `Intervals` segment
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalConfig {
    /// Number of work intervals
    pub repetitions: Option<u32>,
    /// Rest or run recovery
    pub recovery_type: RecoveryType,
    /// Recovery between repetitions
    pub recovery: RecoveryInterval,
}

/// A stored workout segment
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSegment {
    /// Builder-assigned id
    pub id: u64,
    /// Segment type
    pub segment_type: SegmentType,
    /// Time or distance
    pub measurement: Measurement,
    /// Duration when measured by time
    pub duration: Option<SegmentDuration>,
    /// Distance when measured by distance
    pub distance: Option<SegmentDistance>,
    /// Target pace
    pub pace: TargetPace,
    /// Free-form notes
    pub notes: Option<String>,
    /// Interval settings for `Intervals` segments
    pub interval: Option<IntervalConfig>,
}

/// Editable copy of a segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDraft {
    id: u64,
    segment_type: Option<SegmentType>,
    measurement: Measurement,
    duration: Option<SegmentDuration>,
    distance: Option<SegmentDistance>,
    pace: Option<TargetPace>,
    notes: String,
    repetitions: Option<u32>,
    recovery_type: RecoveryType,
    recovery: RecoveryInterval,
}

impl SegmentDraft {
    fn new(id: u64) -> Self {
        Self {
            id,
            segment_type: None,
            measurement: Measurement::Time,
            duration: None,
            distance: None,
            pace: None,
            notes: String::new(),
            repetitions: None,
            recovery_type: RecoveryType::Rest,
            recovery: RecoveryInterval::default(),
        }
    }

    fn from_segment(segment: &WorkoutSegment) -> Self {
        let (repetitions, recovery_type, recovery) = segment.interval.as_ref().map_or_else(
            || (None, RecoveryType::Rest, RecoveryInterval::default()),
            |interval| {
                (
                    interval.repetitions,
                    interval.recovery_type,
                    interval.recovery.clone(),
                )
            },
        );
        Self {
            id: segment.id,
            segment_type: Some(segment.segment_type),
            measurement: segment.measurement,
            duration: segment.duration,
            distance: segment.distance,
            pace: Some(segment.pace.clone()),
            notes: segment.notes.clone().unwrap_or_default(),
            repetitions,
            recovery_type,
            recovery,
        }
    }

    /// Id of the segment this draft edits
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Chosen segment type
    #[must_use]
    pub const fn segment_type(&self) -> Option<SegmentType> {
        self.segment_type
    }

    /// Current measurement mode
    #[must_use]
    pub const fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Duration, when measured by time
    #[must_use]
    pub const fn duration(&self) -> Option<SegmentDuration> {
        self.duration
    }

    /// Distance, when measured by distance
    #[must_use]
    pub const fn distance(&self) -> Option<SegmentDistance> {
        self.distance
    }

    /// Recovery settings
    #[must_use]
    pub const fn recovery(&self) -> &RecoveryInterval {
        &self.recovery
    }

    /// Rest or run recovery
    #[must_use]
    pub const fn recovery_type(&self) -> RecoveryType {
        self.recovery_type
    }

    /// Choose the segment type
    pub fn set_type(&mut self, segment_type: SegmentType) {
        self.segment_type = Some(segment_type);
    }

    /// Switch measurement mode, clearing the other mode's value
    pub fn set_measurement(&mut self, measurement: Measurement) {
        self.measurement = measurement;
        match measurement {
            Measurement::Time => self.distance = None,
            Measurement::Distance => self.duration = None,
        }
    }

    /// Measure by time
    pub fn set_duration(&mut self, minutes: Option<u32>, seconds: Option<u32>) {
        self.set_measurement(Measurement::Time);
        self.duration = Some(SegmentDuration { minutes, seconds });
    }

    /// Measure by distance
    pub fn set_distance(&mut self, value: f64, unit: DistanceUnit) {
        self.set_measurement(Measurement::Distance);
        self.distance = Some(SegmentDistance { value, unit });
    }

    /// Set the target pace
    pub fn set_pace(&mut self, value: impl Into<String>, unit: PaceUnit) {
        self.pace = Some(TargetPace {
            value: value.into(),
            unit,
        });
    }

    /// Set the notes
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Set the interval repetition count
    pub fn set_repetitions(&mut self, repetitions: u32) {
        self.repetitions = Some(repetitions);
    }

    /// Choose rest or run recovery; rest forces a timed recovery
    pub fn set_recovery_type(&mut self, recovery_type: RecoveryType) {
        self.recovery_type = recovery_type;
        if recovery_type == RecoveryType::Rest {
            self.recovery.measurement = Measurement::Time;
            self.recovery.distance = None;
        }
    }

    /// Time the recovery
    pub fn set_recovery_duration(&mut self, minutes: Option<u32>, seconds: Option<u32>) {
        self.recovery.measurement = Measurement::Time;
        self.recovery.distance = None;
        self.recovery.duration = Some(SegmentDuration { minutes, seconds });
    }

    /// Measure the recovery by distance
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutBuilderError::RestRecoveryDistance`] for a rest recovery
    pub fn set_recovery_distance(
        &mut self,
        value: f64,
        unit: DistanceUnit,
    ) -> Result<(), WorkoutBuilderError> {
        if self.recovery_type == RecoveryType::Rest {
            return Err(WorkoutBuilderError::RestRecoveryDistance);
        }
        self.recovery.measurement = Measurement::Distance;
        self.recovery.duration = None;
        self.recovery.distance = Some(SegmentDistance { value, unit });
        Ok(())
    }

    /// Set the recovery pace
    pub fn set_recovery_pace(&mut self, value: impl Into<String>, unit: PaceUnit) {
        self.recovery.pace = Some(TargetPace {
            value: value.into(),
            unit,
        });
    }

    /// Check the draft is complete enough to store
    ///
    /// # Errors
    ///
    /// Returns the first missing piece: duration or distance for the chosen
    /// measurement, then pace, then type
    pub fn validate(&self) -> Result<(), WorkoutBuilderError> {
        match self.measurement {
            Measurement::Time => {
                if !self.duration.is_some_and(SegmentDuration::is_complete) {
                    return Err(WorkoutBuilderError::MissingDuration);
                }
            }
            Measurement::Distance => {
                if self.distance.is_none() {
                    return Err(WorkoutBuilderError::MissingDistance);
                }
            }
        }
        if self.pace.as_ref().is_none_or(|p| p.value.trim().is_empty()) {
            return Err(WorkoutBuilderError::MissingPace);
        }
        if self.segment_type.is_none() {
            return Err(WorkoutBuilderError::MissingType);
        }
        Ok(())
    }

    fn to_segment(&self) -> Result<WorkoutSegment, WorkoutBuilderError> {
        self.validate()?;
        let segment_type = self.segment_type.ok_or(WorkoutBuilderError::MissingType)?;
        let pace = self.pace.clone().ok_or(WorkoutBuilderError::MissingPace)?;
        let interval = (segment_type == SegmentType::Intervals).then(|| IntervalConfig {
            repetitions: self.repetitions,
            recovery_type: self.recovery_type,
            recovery: self.recovery.clone(),
        });

        Ok(WorkoutSegment {
            id: self.id,
            segment_type,
            measurement: self.measurement,
            duration: self.duration,
            distance: self.distance,
            pace,
            notes: (!self.notes.is_empty()).then(|| self.notes.clone()),
            interval,
        })
    }
}

/// How target paces are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaceDisplayUnit {
    /// Minutes per mile, as entered
    #[default]
    MinPerMile,
    /// Minutes per kilometer
    MinPerKm,
    /// Miles per hour
    Mph,
}

impl FromStr for PaceDisplayUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "min/mi" | "mi" | "minpermile" => Ok(Self::MinPerMile),
            "min/km" | "km" | "minperkm" => Ok(Self::MinPerKm),
            "mph" => Ok(Self::Mph),
            other => Err(AppError::invalid_format(format!(
                "Unknown pace display unit: '{other}'. Valid options: min/mi, min/km, mph"
            ))),
        }
    }
}

/// Whether `pace` is `M:SS` or `MM:SS`
#[must_use]
pub fn is_valid_pace(pace: &str) -> bool {
    PACE_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(pace))
}

fn split_pace(pace: &str) -> Option<(u32, u32)> {
    let (minutes, seconds) = pace.split_once(':')?;
    Some((minutes.trim().parse().ok()?, seconds.trim().parse().ok()?))
}

fn min_per_km(pace: &str) -> Option<String> {
    let (minutes, seconds) = split_pace(pace)?;
    let total =
        f64::from(minutes).mul_add(SECONDS_PER_MINUTE, f64::from(seconds)) / KM_PER_MILE_PRECISE;
    let whole_minutes = (total / SECONDS_PER_MINUTE).floor() as u32;
    let rem_seconds = (total % SECONDS_PER_MINUTE).round() as u32;
    Some(format!("{whole_minutes}:{rem_seconds:02}"))
}

fn miles_per_hour(pace: &str) -> Option<String> {
    let (minutes, seconds) = split_pace(pace)?;
    let hours = (f64::from(minutes) + f64::from(seconds) / SECONDS_PER_MINUTE) / MINUTES_PER_HOUR;
    (hours > 0.0).then(|| format!("{:.1}", 1.0 / hours))
}

/// Render a per-mile pace in `unit`
///
/// Paces that cannot be split into minutes and seconds are shown unconverted.
#[must_use]
pub fn display_pace(pace: &str, unit: PaceDisplayUnit) -> String {
    if pace.is_empty() {
        return String::new();
    }
    match unit {
        PaceDisplayUnit::MinPerMile => format!("{pace} /mi"),
        PaceDisplayUnit::MinPerKm => {
            min_per_km(pace).map_or_else(|| pace.to_owned(), |p| format!("{p} /km"))
        }
        PaceDisplayUnit::Mph => {
            miles_per_hour(pace).map_or_else(|| pace.to_owned(), |p| format!("{p} mph"))
        }
    }
}

/// A workout under construction
#[derive(Debug, Default)]
pub struct WorkoutBuilder {
    name: String,
    segments: Vec<WorkoutSegment>,
    pace_display: PaceDisplayUnit,
    editing: Option<u64>,
    modifying: bool,
    next_id: u64,
}

impl WorkoutBuilder {
    /// Empty workout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Workout name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the workout
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Segments in order
    #[must_use]
    pub fn segments(&self) -> &[WorkoutSegment] {
        &self.segments
    }

    /// Unit paces are displayed in
    #[must_use]
    pub const fn pace_display(&self) -> PaceDisplayUnit {
        self.pace_display
    }

    /// Change the pace display unit
    pub fn set_pace_display(&mut self, unit: PaceDisplayUnit) {
        self.pace_display = unit;
    }

    /// Id of the segment open for editing
    #[must_use]
    pub const fn editing(&self) -> Option<u64> {
        self.editing
    }

    /// Whether the open draft edits an existing segment
    #[must_use]
    pub const fn is_modifying(&self) -> bool {
        self.modifying
    }

    /// Open a blank draft for a new segment
    pub fn begin_new_segment(&mut self) -> SegmentDraft {
        self.next_id += 1;
        self.editing = Some(self.next_id);
        self.modifying = false;
        SegmentDraft::new(self.next_id)
    }

    /// Open a draft editing segment `id`
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutBuilderError::UnknownSegment`] if no segment has `id`
    pub fn select_segment(&mut self, id: u64) -> Result<SegmentDraft, WorkoutBuilderError> {
        let segment = self
            .segments
            .iter()
            .find(|s| s.id == id)
            .ok_or(WorkoutBuilderError::UnknownSegment(id))?;
        let draft = SegmentDraft::from_segment(segment);
        self.editing = Some(id);
        self.modifying = true;
        Ok(draft)
    }

    /// Validate `draft` and store it, appending or replacing
    ///
    /// The draft stays open when validation fails, so the caller can fix it
    /// and apply again.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or [`WorkoutBuilderError::NotEditing`] if
    /// `draft` is not the open draft
    pub fn apply(&mut self, draft: &SegmentDraft) -> Result<u64, WorkoutBuilderError> {
        let id = draft.id;
        if self.editing != Some(id) {
            return Err(WorkoutBuilderError::NotEditing(id));
        }
        let segment = draft.to_segment()?;

        if self.modifying {
            let slot = self
                .segments
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(WorkoutBuilderError::UnknownSegment(id))?;
            *slot = segment;
            debug!(segment_id = id, "Updated segment");
        } else {
            self.segments.push(segment);
            debug!(segment_id = id, "Added segment");
        }

        self.close_draft();
        Ok(id)
    }

    /// Remove segment `id`, closing any open draft
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutBuilderError::UnknownSegment`] if no segment has `id`
    pub fn remove_segment(&mut self, id: u64) -> Result<WorkoutSegment, WorkoutBuilderError> {
        let index = self
            .segments
            .iter()
            .position(|s| s.id == id)
            .ok_or(WorkoutBuilderError::UnknownSegment(id))?;
        self.close_draft();
        Ok(self.segments.remove(index))
    }

    /// Discard the open draft
    pub fn close_draft(&mut self) {
        self.editing = None;
        self.modifying = false;
    }

    /// Render a per-mile pace in the builder's display unit
    #[must_use]
    pub fn display_pace(&self, pace: &str) -> String {
        display_pace(pace, self.pace_display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft(builder: &mut WorkoutBuilder) -> SegmentDraft {
        let mut draft = builder.begin_new_segment();
        draft.set_type(SegmentType::WarmUp);
        draft.set_duration(Some(10), Some(0));
        draft.set_pace("9:00", PaceUnit::Mile);
        draft
    }

    #[test]
    fn test_pace_pattern() {
        assert!(is_valid_pace("7:30"));
        assert!(is_valid_pace("10:05"));
        assert!(!is_valid_pace("7:60"));
        assert!(!is_valid_pace("123:00"));
        assert!(!is_valid_pace("7:3"));
        assert!(!is_valid_pace("7:30 "));
    }

    #[test]
    fn test_display_pace_units() {
        assert_eq!(display_pace("8:00", PaceDisplayUnit::MinPerMile), "8:00 /mi");
        assert_eq!(display_pace("8:00", PaceDisplayUnit::MinPerKm), "4:58 /km");
        assert_eq!(display_pace("6:00", PaceDisplayUnit::MinPerKm), "3:44 /km");
        assert_eq!(display_pace("8:00", PaceDisplayUnit::Mph), "7.5 mph");
        assert_eq!(display_pace("7:30", PaceDisplayUnit::Mph), "8.0 mph");
        assert_eq!(display_pace("", PaceDisplayUnit::Mph), "");
        assert_eq!(display_pace("fast", PaceDisplayUnit::MinPerKm), "fast");
    }

    #[test]
    fn test_display_pace_oversized_minutes() {
        assert_eq!(
            display_pace("99999999:00", PaceDisplayUnit::MinPerKm),
            "62137273:03 /km"
        );

        let mut builder = WorkoutBuilder::new();
        builder.set_pace_display(PaceDisplayUnit::MinPerKm);
        let mut draft = complete_draft(&mut builder);
        draft.set_pace("99999999:00", PaceUnit::Mile);
        builder.apply(&draft).unwrap();
        let pace = builder.segments()[0].pace.value.clone();
        assert_eq!(builder.display_pace(&pace), "62137273:03 /km");
    }

    #[test]
    fn test_add_segment() {
        let mut builder = WorkoutBuilder::new();
        let draft = complete_draft(&mut builder);
        assert_eq!(builder.editing(), Some(draft.id()));
        assert!(!builder.is_modifying());

        let id = builder.apply(&draft).unwrap();
        assert_eq!(builder.segments().len(), 1);
        assert_eq!(builder.segments()[0].id, id);
        assert!(builder.segments()[0].interval.is_none());
        assert!(builder.editing().is_none());
    }

    #[test]
    fn test_validation_order() {
        let mut builder = WorkoutBuilder::new();
        let mut draft = builder.begin_new_segment();
        assert_eq!(draft.validate(), Err(WorkoutBuilderError::MissingDuration));

        draft.set_duration(Some(5), None);
        assert_eq!(draft.validate(), Err(WorkoutBuilderError::MissingDuration));

        draft.set_distance(2.0, DistanceUnit::Mile);
        assert_eq!(draft.validate(), Err(WorkoutBuilderError::MissingPace));

        draft.set_pace("  ", PaceUnit::Mile);
        assert_eq!(draft.validate(), Err(WorkoutBuilderError::MissingPace));

        draft.set_pace("8:00", PaceUnit::Mile);
        assert_eq!(draft.validate(), Err(WorkoutBuilderError::MissingType));

        draft.set_type(SegmentType::Training);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_draft_stays_open() {
        let mut builder = WorkoutBuilder::new();
        let draft = builder.begin_new_segment();
        let id = draft.id();
        assert_eq!(builder.apply(&draft), Err(WorkoutBuilderError::MissingDuration));
        assert_eq!(builder.editing(), Some(id));
        assert!(builder.segments().is_empty());
    }

    #[test]
    fn test_switching_measurement_clears_other_value() {
        let mut builder = WorkoutBuilder::new();
        let mut draft = builder.begin_new_segment();
        draft.set_duration(Some(10), Some(0));
        draft.set_measurement(Measurement::Distance);
        assert!(draft.duration().is_none());

        draft.set_distance(400.0, DistanceUnit::Meter);
        draft.set_measurement(Measurement::Time);
        assert!(draft.distance().is_none());
        assert_eq!(draft.measurement(), Measurement::Time);
    }

    #[test]
    fn test_rest_recovery_forces_time() {
        let mut builder = WorkoutBuilder::new();
        let mut draft = builder.begin_new_segment();
        draft.set_recovery_type(RecoveryType::Run);
        draft.set_recovery_distance(400.0, DistanceUnit::Meter).unwrap();
        assert_eq!(draft.recovery().measurement, Measurement::Distance);

        draft.set_recovery_type(RecoveryType::Rest);
        assert_eq!(draft.recovery().measurement, Measurement::Time);
        assert!(draft.recovery().distance.is_none());
        assert_eq!(
            draft.set_recovery_distance(200.0, DistanceUnit::Meter),
            Err(WorkoutBuilderError::RestRecoveryDistance)
        );
    }

    #[test]
    fn test_intervals_keep_recovery() {
        let mut builder = WorkoutBuilder::new();
        let mut draft = builder.begin_new_segment();
        draft.set_type(SegmentType::Intervals);
        draft.set_distance(800.0, DistanceUnit::Meter);
        draft.set_pace("6:10", PaceUnit::Mile);
        draft.set_repetitions(6);
        draft.set_recovery_type(RecoveryType::Run);
        draft.set_recovery_distance(400.0, DistanceUnit::Meter).unwrap();
        draft.set_recovery_pace("9:30", PaceUnit::Mile);
        builder.apply(&draft).unwrap();

        let interval = builder.segments()[0].interval.as_ref().unwrap();
        assert_eq!(interval.repetitions, Some(6));
        assert_eq!(interval.recovery_type, RecoveryType::Run);
        assert_eq!(interval.recovery.pace.as_ref().unwrap().value, "9:30");
    }

    #[test]
    fn test_modify_replaces_in_place() {
        let mut builder = WorkoutBuilder::new();
        let first = complete_draft(&mut builder);
        let first_id = builder.apply(&first).unwrap();
        let second = complete_draft(&mut builder);
        builder.apply(&second).unwrap();

        let mut draft = builder.select_segment(first_id).unwrap();
        assert!(builder.is_modifying());
        draft.set_type(SegmentType::CoolDown);
        draft.set_notes("easy");
        builder.apply(&draft).unwrap();

        assert_eq!(builder.segments().len(), 2);
        assert_eq!(builder.segments()[0].segment_type, SegmentType::CoolDown);
        assert_eq!(builder.segments()[0].notes.as_deref(), Some("easy"));
        assert!(!builder.is_modifying());
    }

    #[test]
    fn test_stale_draft_rejected() {
        let mut builder = WorkoutBuilder::new();
        let stale = complete_draft(&mut builder);
        builder.close_draft();
        let stale_id = stale.id();
        assert_eq!(builder.apply(&stale), Err(WorkoutBuilderError::NotEditing(stale_id)));
    }

    #[test]
    fn test_remove_segment() {
        let mut builder = WorkoutBuilder::new();
        let draft = complete_draft(&mut builder);
        let id = builder.apply(&draft).unwrap();
        let _open = builder.select_segment(id).unwrap();

        let removed = builder.remove_segment(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(builder.segments().is_empty());
        assert!(builder.editing().is_none());
        assert_eq!(builder.remove_segment(id), Err(WorkoutBuilderError::UnknownSegment(id)));
    }

    #[test]
    fn test_segment_type_parsing() {
        assert_eq!("warm-up".parse::<SegmentType>().unwrap(), SegmentType::WarmUp);
        assert_eq!("Cool Down".parse::<SegmentType>().unwrap(), SegmentType::CoolDown);
        assert!("sprint".parse::<SegmentType>().is_err());
    }
}
