//! Answers to the dashboard's five questions about launch success.
//!
//! Records are grouped by site, payload mass or booster category and
//! the group with the highest (or lowest) success total or rate wins.
//! Groups are visited in key order and ties go to the first group seen.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::Serialize;

use super::analytics::PayloadRange;
use crate::types::launch::LaunchRecord;

/// Running `(successes, launches)` tally of a group.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    successes: usize,
    launches: usize,
}

impl Tally {
    fn add(&mut self, record: &LaunchRecord) {
        self.launches += 1;
        if record.outcome.is_success() {
            self.successes += 1;
        }
    }

    fn rate(&self) -> f64 {
        self.successes as f64 / self.launches as f64
    }
}

/// Insights for the launches in a payload range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchInsights {
    /// Site with the highest number of successful launches.
    pub most_successful_site: Option<String>,

    /// Site with the highest launch success rate.
    pub best_success_rate_site: Option<String>,

    /// Payload mass (kg) with the highest success rate.
    pub best_payload_mass_kg: Option<f64>,

    /// Payload mass (kg) with the lowest success rate.
    pub worst_payload_mass_kg: Option<f64>,

    /// Booster version category with the highest success rate.
    pub best_booster_category: Option<String>,
}

impl LaunchInsights {
    /// Computes the insights over records whose payload mass lies in
    /// `range`. All answers are [`None`] when nothing falls in range.
    pub fn from_records(records: &[LaunchRecord], range: PayloadRange) -> Self {
        let mut by_site: BTreeMap<&str, Tally> = BTreeMap::new();
        let mut by_mass: BTreeMap<OrderedFloat<f64>, Tally> = BTreeMap::new();
        let mut by_booster: BTreeMap<&str, Tally> = BTreeMap::new();

        for record in records
            .iter()
            .filter(|record| range.contains(record.payload_mass_kg))
        {
            by_site.entry(&record.site).or_default().add(record);
            by_mass
                .entry(OrderedFloat(record.payload_mass_kg))
                .or_default()
                .add(record);
            if let Some(category) = &record.booster_version_category {
                by_booster.entry(category).or_default().add(record);
            }
        }
        debug!(
            "Grouped {} sites, {} payload masses, {} booster categories",
            by_site.len(),
            by_mass.len(),
            by_booster.len()
        );

        LaunchInsights {
            most_successful_site: arg_max(&by_site, |t| t.successes as f64)
                .map(|site| site.to_string()),
            best_success_rate_site: arg_max(&by_site, Tally::rate).map(|site| site.to_string()),
            best_payload_mass_kg: arg_max(&by_mass, Tally::rate).map(|mass| mass.into_inner()),
            worst_payload_mass_kg: arg_max(&by_mass, |t| -t.rate()).map(|mass| mass.into_inner()),
            best_booster_category: arg_max(&by_booster, Tally::rate)
                .map(|category| category.to_string()),
        }
    }

    /// The answers as display sentences, in question order.
    ///
    /// Masses keep their decimal point (`2490.0 kg`) since the column
    /// is a float in every dataset layout.
    pub fn answers(&self) -> [String; 5] {
        [
            match &self.most_successful_site {
                Some(site) => format!("{} has the highest number of successful launches.", site),
                None => "No launches in the selected payload range.".to_string(),
            },
            match &self.best_success_rate_site {
                Some(site) => format!("{} has the highest launch success rate.", site),
                None => "No launches in the selected payload range.".to_string(),
            },
            match self.best_payload_mass_kg {
                Some(mass) => format!(
                    "The payload range with the highest success rate is: {:?} kg.",
                    mass
                ),
                None => "No launches in the selected payload range.".to_string(),
            },
            match self.worst_payload_mass_kg {
                Some(mass) => format!(
                    "The payload range with the lowest success rate is: {:?} kg.",
                    mass
                ),
                None => "No launches in the selected payload range.".to_string(),
            },
            match &self.best_booster_category {
                Some(category) => format!(
                    "The F9 rocket version with the highest success rate is: {}.",
                    category
                ),
                None => "No booster versions in the selected payload range.".to_string(),
            },
        ]
    }
}

/// Key of the first group with the strictly greatest score.
fn arg_max<K: Copy>(groups: &BTreeMap<K, Tally>, score: impl Fn(&Tally) -> f64) -> Option<K> {
    let mut best: Option<(K, f64)> = None;
    for (key, tally) in groups {
        let value = score(tally);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((*key, value)),
        }
    }
    best.map(|(key, _)| key)
}
