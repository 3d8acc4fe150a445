// ABOUTME: Workout plan command for planner-cli
// ABOUTME: Builds a segment list from compact specs and prints it with paces in the chosen unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::helpers::display;
use anyhow::{anyhow, Context, Result};
use marathon_planner::planner::{PaceDisplayUnit, SegmentDraft, SegmentType, WorkoutBuilder};
use planner_core::models::{DistanceUnit, PaceUnit};

/// Build and print a workout from `TYPE/LENGTH/PACE[/xREPS]` segment specs
///
/// LENGTH is `MM:SS` for a timed segment or a distance such as `2mi`,
/// `800m`, or `5km`. PACE is per mile.
pub fn run(name: &str, segments: &[String], unit: &str) -> Result<()> {
    let mut builder = WorkoutBuilder::new();
    builder.set_name(name);
    builder.set_pace_display(unit.parse::<PaceDisplayUnit>()?);

    for raw in segments {
        let mut draft = builder.begin_new_segment();
        fill_draft(&mut draft, raw).with_context(|| format!("Invalid segment '{raw}'"))?;
        builder
            .apply(&draft)
            .with_context(|| format!("Invalid segment '{raw}'"))?;
    }

    display::display_plan(&builder);
    Ok(())
}

fn fill_draft(draft: &mut SegmentDraft, raw: &str) -> Result<()> {
    let mut fields = raw.split('/').map(str::trim);
    let (Some(kind), Some(length), Some(pace)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(anyhow!("expected TYPE/LENGTH/PACE[/xREPS]"));
    };

    draft.set_type(kind.parse::<SegmentType>()?);
    set_length(draft, length)?;
    draft.set_pace(pace, PaceUnit::Mile);

    if let Some(reps) = fields.next() {
        let count = reps
            .trim_start_matches('x')
            .parse::<u32>()
            .context("repetitions must be a whole number")?;
        draft.set_repetitions(count);
    }
    if fields.next().is_some() {
        return Err(anyhow!("expected at most four fields"));
    }
    Ok(())
}

fn set_length(draft: &mut SegmentDraft, length: &str) -> Result<()> {
    if let Some((minutes, seconds)) = length.split_once(':') {
        draft.set_duration(Some(minutes.parse()?), Some(seconds.parse()?));
        return Ok(());
    }

    let unit_start = length
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| anyhow!("distance needs a unit (mi, km, m)"))?;
    let (value, unit) = length.split_at(unit_start);
    draft.set_distance(value.parse()?, unit.parse::<DistanceUnit>()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marathon_planner::planner::Measurement;

    #[test]
    fn test_timed_segment_spec() {
        let mut builder = WorkoutBuilder::new();
        let mut draft = builder.begin_new_segment();
        fill_draft(&mut draft, "warm-up/10:00/8:30").unwrap();
        builder.apply(&draft).unwrap();

        let segment = &builder.segments()[0];
        assert_eq!(segment.segment_type, SegmentType::WarmUp);
        assert_eq!(segment.measurement, Measurement::Time);
        assert_eq!(segment.pace.value, "8:30");
    }

    #[test]
    fn test_interval_distance_spec() {
        let mut builder = WorkoutBuilder::new();
        let mut draft = builder.begin_new_segment();
        fill_draft(&mut draft, "intervals/800m/5:40/x6").unwrap();
        builder.apply(&draft).unwrap();

        let segment = &builder.segments()[0];
        assert_eq!(segment.distance.map(|d| d.unit), Some(DistanceUnit::Meter));
        assert_eq!(
            segment.interval.as_ref().and_then(|i| i.repetitions),
            Some(6)
        );
    }

    #[test]
    fn test_malformed_specs() {
        let mut builder = WorkoutBuilder::new();
        for raw in ["tempo", "training/2/7:00", "training/2mi/7:00/x2/extra", "sprint/1mi/5:00"] {
            let mut draft = builder.begin_new_segment();
            assert!(fill_draft(&mut draft, raw).is_err(), "{raw}");
        }
    }
}
