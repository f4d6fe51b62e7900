use std::fs::File;
use std::path::Path;

use itertools::Itertools;
use log::info;
use serde::Deserialize;

use crate::LaunchboardError;

/// A single launch attempt, one CSV row. Columns not listed here are
/// ignored by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Binary outcome: 1 = success, 0 = failure.
    #[serde(rename = "class")]
    pub class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

/// The launch record table, loaded once at startup and never mutated.
///
/// Payload bounds are computed during construction so the UI can seed the
/// range sliders without rescanning the table.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchDataset {
    pub fn from_csv(path: &Path) -> Result<Self, LaunchboardError> {
        let file = File::open(path).map_err(|e| LaunchboardError::DatasetIOError { source: e })?;
        let mut reader = csv::Reader::from_reader(file);
        let records = reader
            .deserialize()
            .collect::<Result<Vec<LaunchRecord>, csv::Error>>()
            .map_err(|e| LaunchboardError::DatasetParseError { source: e })?;

        let dataset = Self::from_records(records).map_err(|e| match e {
            LaunchboardError::EmptyDataset { .. } => LaunchboardError::EmptyDataset {
                path: format!("{:?}", path),
            },
            other => other,
        })?;
        info!(
            "Loaded {:?}, found {} launch records across {} sites",
            path,
            dataset.len(),
            dataset.sites().len()
        );
        Ok(dataset)
    }

    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LaunchboardError> {
        if records.is_empty() {
            return Err(LaunchboardError::EmptyDataset {
                path: "<in-memory>".to_string(),
            });
        }
        let (min_payload, max_payload) = records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), record| {
                (
                    min.min(record.payload_mass_kg),
                    max.max(record.payload_mass_kg),
                )
            },
        );
        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Global (min, max) of the payload mass column, used as the default
    /// bounds for the payload range control.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.min_payload, self.max_payload)
    }

    /// Distinct launch sites in first-seen order.
    pub fn sites(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.launch_site.as_str())
            .unique()
            .collect_vec()
    }

    /// Per-site sum of the `class` column (total successful launches),
    /// in first-seen site order.
    pub fn site_success_totals(&self) -> Vec<(String, u32)> {
        let mut totals: Vec<(String, u32)> = Vec::new();
        for record in &self.records {
            match totals
                .iter_mut()
                .find(|(site, _)| site == &record.launch_site)
            {
                Some((_, total)) => *total += u32::from(record.class),
                None => totals.push((record.launch_site.clone(), u32::from(record.class))),
            }
        }
        totals
    }

    /// Mean of the `class` column over the rows for `site`, as a fraction
    /// in [0, 1]. A site with no rows yields NaN, mirroring a mean over an
    /// empty subset.
    pub fn success_rate(&self, site: &str) -> f64 {
        let mut successes = 0usize;
        let mut total = 0usize;
        for record in self.records_for_site(site) {
            successes += usize::from(record.class);
            total += 1;
        }
        successes as f64 / total as f64
    }

    pub fn records_for_site<'a>(
        &'a self,
        site: &'a str,
    ) -> impl Iterator<Item = &'a LaunchRecord> {
        self.records
            .iter()
            .filter(move |record| record.launch_site == site)
    }
}
