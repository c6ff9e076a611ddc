//! Outcome breakdowns and payload filtering behind the dashboard charts.
//!
//! The pie chart shows either the outcome split for one site or the
//! success totals per site; the scatter chart shows launches whose
//! payload mass falls in the slider's range.

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::types::launch::LaunchRecord;
use crate::types::outcome::Outcome;
use crate::types::selection::SiteSelection;

/// An inclusive payload mass interval in kilograms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PayloadRange {
    min_kg: OrderedFloat<f64>,
    max_kg: OrderedFloat<f64>,
}

/// A labelled tick on the payload slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderMark {
    pub value: i64,
    pub label: String,
}

impl PayloadRange {
    /// Creates a range; the bounds are swapped if given in reverse.
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        let (min_kg, max_kg) = if min_kg <= max_kg {
            (min_kg, max_kg)
        } else {
            (max_kg, min_kg)
        };
        PayloadRange {
            min_kg: OrderedFloat(min_kg),
            max_kg: OrderedFloat(max_kg),
        }
    }

    /// The smallest range covering every record, or [`None`] for an
    /// empty slice.
    pub fn spanning(records: &[LaunchRecord]) -> Option<Self> {
        let min = records
            .iter()
            .map(|r| OrderedFloat(r.payload_mass_kg))
            .min()?;
        let max = records
            .iter()
            .map(|r| OrderedFloat(r.payload_mass_kg))
            .max()?;
        Some(PayloadRange {
            min_kg: min,
            max_kg: max,
        })
    }

    pub fn min_kg(&self) -> f64 {
        self.min_kg.into_inner()
    }

    pub fn max_kg(&self) -> f64 {
        self.max_kg.into_inner()
    }

    /// Both ends are included.
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.min_kg() && mass_kg <= self.max_kg()
    }

    /// Slider ticks from `floor(min)` up to `max` (inclusive) every
    /// `step` kilograms. A zero step yields no marks.
    pub fn slider_marks(&self, step: u32) -> Vec<SliderMark> {
        if step == 0 {
            return Vec::new();
        }
        let start = self.min_kg().floor() as i64;
        let end = self.max_kg().floor() as i64;
        (start..=end)
            .step_by(step as usize)
            .map(|value| SliderMark {
                value,
                label: format!("{} kg", value),
            })
            .collect()
    }
}

/// Success and failure counts for a selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.success + self.failure
    }

    /// Count for the given outcome.
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }

    /// `(label, count)` pairs, failures first, as fed to a pie chart.
    pub fn slices(&self) -> [(&'static str, usize); 2] {
        [
            (Outcome::Failure.label(), self.failure),
            (Outcome::Success.label(), self.success),
        ]
    }
}

/// Number of successful launches for one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSuccesses {
    pub site: String,
    pub successes: usize,
}

/// Counts outcomes of the selected records.
///
/// # Returns
/// [`None`] if the selection matches no launch at all, which the
/// dashboard shows as "No Data".
pub fn outcome_counts(records: &[LaunchRecord], selection: &SiteSelection) -> Option<OutcomeCounts> {
    let counts = records
        .iter()
        .filter(|record| selection.matches(&record.site))
        .fold(OutcomeCounts::default(), |mut counts, record| {
            match record.outcome {
                Outcome::Success => counts.success += 1,
                Outcome::Failure => counts.failure += 1,
            }
            counts
        });

    if counts.total() == 0 {
        debug!("No launches found for site {}", selection);
        None
    } else {
        Some(counts)
    }
}

/// Success totals per site, in order of first appearance.
///
/// Sites that never succeeded are listed with zero.
pub fn successes_by_site(records: &[LaunchRecord]) -> Vec<SiteSuccesses> {
    let mut totals: Vec<SiteSuccesses> = Vec::new();
    for record in records {
        let index = match totals.iter().position(|t| t.site == record.site) {
            Some(index) => index,
            None => {
                totals.push(SiteSuccesses {
                    site: record.site.clone(),
                    successes: 0,
                });
                totals.len() - 1
            }
        };
        if record.outcome.is_success() {
            totals[index].successes += 1;
        }
    }
    totals
}

/// Records matching the selection whose payload mass lies in `range`.
///
/// Dataset order is preserved.
pub fn filter_launches<'a>(
    records: &'a [LaunchRecord],
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg) && selection.matches(&record.site))
        .collect()
}
