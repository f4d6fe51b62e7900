//! Chart description builders.
//!
//! These are pure functions of `(dataset, inputs)`: the UI layer calls
//! them whenever a control value changes and swaps the returned
//! description into the rendered view. They hold no state of their own.

use crate::dataset::LaunchDataset;

/// Dropdown value representing the full table.
pub const ALL_SITES_VALUE: &str = "ALL";

/// The four launch sites offered by the site dropdown.
pub const LAUNCH_SITES: [&str; 4] = [
    "CCAFS LC-40",
    "CCAFS SLC-40",
    "KSC LC-39A",
    "VAFB SLC-4E",
];

/// The current site dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl Default for SiteSelection {
    fn default() -> Self {
        Self::All
    }
}

impl SiteSelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }

    /// The stable dropdown value (`"ALL"` or a site name), used for
    /// config persistence.
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_SITES_VALUE,
            Self::Site(site) => site,
        }
    }

    /// Human-readable dropdown label.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Sites",
            Self::Site(site) => site,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn slice_total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }
}

/// One legend entry of the scatter chart: all points sharing a booster
/// version category. Points are `[payload_mass_kg, class]` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster_category: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterChart {
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

/// Build the success pie chart for the current dropdown selection.
///
/// For `All`, one slice per distinct launch site with the site's summed
/// successes. For a single site, two slices splitting the site's success
/// percentage; a site with no rows yields NaN slices (an undefined mean,
/// passed through rather than masked).
pub fn success_pie(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => PieChart {
            title: "Total Success Launches by Sites".to_string(),
            slices: dataset
                .site_success_totals()
                .into_iter()
                .map(|(site, total)| PieSlice {
                    label: site,
                    value: f64::from(total),
                })
                .collect(),
        },
        SiteSelection::Site(site) => {
            let success_pct = dataset.success_rate(site) * 100.;
            PieChart {
                title: format!("Total Success Launches for Site {}", site),
                slices: vec![
                    PieSlice {
                        label: "Success".to_string(),
                        value: success_pct,
                    },
                    PieSlice {
                        label: "Failure".to_string(),
                        value: 100. - success_pct,
                    },
                ],
            }
        }
    }
}

/// Build the payload/outcome scatter chart for the current selection.
///
/// Points are grouped into one series per booster version category, in
/// first-seen order, so the renderer can color and label them.
// TODO: filter points to the selected payload range; today the range only
// participates in change detection.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    _payload_range: (f64, f64),
) -> ScatterChart {
    let mut chart = ScatterChart::default();
    for record in dataset.records() {
        if let SiteSelection::Site(site) = selection
            && &record.launch_site != site
        {
            continue;
        }
        let point = [record.payload_mass_kg, f64::from(record.class)];
        match chart
            .series
            .iter_mut()
            .find(|series| series.booster_category == record.booster_version_category)
        {
            Some(series) => series.points.push(point),
            None => chart.series.push(ScatterSeries {
                booster_category: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;
    use itertools::Itertools;
    use proptest::prelude::*;

    fn record(site: &str, class: u8, payload_mass_kg: f64, category: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            class,
            payload_mass_kg,
            booster_version_category: category.to_string(),
        }
    }

    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0, 500.0, "v1.0"),
            record("CCAFS LC-40", 1, 3170.0, "v1.0"),
            record("CCAFS LC-40", 1, 4700.0, "FT"),
            record("VAFB SLC-4E", 1, 500.0, "v1.1"),
            record("KSC LC-39A", 1, 5300.0, "FT"),
            record("KSC LC-39A", 0, 9600.0, "B4"),
            record("CCAFS SLC-40", 1, 2205.0, "B5"),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_sites_pie_one_slice_per_site() {
        let dataset = sample_dataset();
        let pie = success_pie(&dataset, &SiteSelection::All);
        assert_eq!(pie.title, "Total Success Launches by Sites");
        assert_eq!(pie.slices.len(), dataset.sites().len());
    }

    #[test]
    fn test_all_sites_pie_sums_to_total_successes() {
        let dataset = sample_dataset();
        let pie = success_pie(&dataset, &SiteSelection::All);
        let total_successes: u32 = dataset
            .records()
            .iter()
            .map(|r| u32::from(r.class))
            .sum();
        assert_eq!(pie.slice_total(), f64::from(total_successes));
    }

    #[test]
    fn test_single_site_pie_slices_sum_to_100() {
        let dataset = sample_dataset();
        let pie = success_pie(&dataset, &SiteSelection::Site("CCAFS LC-40".to_string()));
        assert_eq!(pie.title, "Total Success Launches for Site CCAFS LC-40");
        assert_eq!(pie.slices.len(), 2);
        assert!((pie.slice_total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_worked_example_from_four_rows() {
        let dataset = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 1, 1000.0, "FT"),
            record("KSC LC-39A", 0, 2000.0, "FT"),
            record("CCAFS LC-40", 1, 3000.0, "v1.0"),
            record("CCAFS LC-40", 1, 4000.0, "v1.0"),
        ])
        .unwrap();

        let site_pie = success_pie(&dataset, &SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(site_pie.slices[0].value, 50.0);
        assert_eq!(site_pie.slices[1].value, 50.0);

        let all_pie = success_pie(&dataset, &SiteSelection::All);
        assert_eq!(all_pie.slices.len(), 2);
        assert_eq!(all_pie.slice_total(), 3.0);
    }

    #[test]
    fn test_unknown_site_pie_is_undefined_not_panicking() {
        let dataset = sample_dataset();
        let pie = success_pie(&dataset, &SiteSelection::Site("Starbase".to_string()));
        assert!(pie.slices.iter().all(|slice| slice.value.is_nan()));
    }

    #[test]
    fn test_scatter_point_counts() {
        let dataset = sample_dataset();
        let range = dataset.payload_bounds();

        let all = payload_scatter(&dataset, &SiteSelection::All, range);
        assert_eq!(all.point_count(), dataset.len());

        let site = payload_scatter(
            &dataset,
            &SiteSelection::Site("CCAFS LC-40".to_string()),
            range,
        );
        assert_eq!(site.point_count(), dataset.records_for_site("CCAFS LC-40").count());
    }

    #[test]
    fn test_scatter_series_partition_points_by_category() {
        let dataset = sample_dataset();
        let chart = payload_scatter(&dataset, &SiteSelection::All, dataset.payload_bounds());
        let categories = chart
            .series
            .iter()
            .map(|series| series.booster_category.as_str())
            .collect_vec();
        assert_eq!(categories, vec!["v1.0", "FT", "v1.1", "B4", "B5"]);
        for series in &chart.series {
            assert!(!series.points.is_empty());
        }
    }

    #[test]
    fn test_scatter_y_is_binary_outcome() {
        let dataset = sample_dataset();
        let chart = payload_scatter(&dataset, &SiteSelection::All, dataset.payload_bounds());
        for series in &chart.series {
            for point in &series.points {
                assert!(point[1] == 0.0 || point[1] == 1.0);
            }
        }
    }

    #[test]
    fn test_payload_range_does_not_filter_scatter() {
        let dataset = sample_dataset();
        let selection = SiteSelection::Site("KSC LC-39A".to_string());
        let wide = payload_scatter(&dataset, &selection, (0.0, 10000.0));
        let narrow = payload_scatter(&dataset, &selection, (6000.0, 7000.0));
        assert_eq!(wide, narrow);
    }

    #[test]
    fn test_selection_round_trips_through_value() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(SiteSelection::All.label(), "All Sites");
        for site in LAUNCH_SITES {
            let selection = SiteSelection::from_value(site);
            assert_eq!(selection, SiteSelection::Site(site.to_string()));
            assert_eq!(selection.value(), site);
            assert_eq!(selection.label(), site);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_site_pie_slices_sum_to_100(
            outcomes in prop::collection::vec(0u8..=1, 1..50),
            site_idx in 0usize..4,
        ) {
            let site = LAUNCH_SITES[site_idx];
            let records = outcomes
                .iter()
                .map(|&class| record(site, class, 1000.0, "FT"))
                .collect();
            let dataset = LaunchDataset::from_records(records).unwrap();
            let pie = success_pie(&dataset, &SiteSelection::Site(site.to_string()));
            prop_assert!((pie.slice_total() - 100.0).abs() < 1e-9);
        }

        #[test]
        fn prop_scatter_points_within_payload_bounds(
            payloads in prop::collection::vec(0.0f64..10000.0, 1..50),
        ) {
            let records = payloads
                .iter()
                .enumerate()
                .map(|(i, &payload)| {
                    record(LAUNCH_SITES[i % 4], (i % 2) as u8, payload, "FT")
                })
                .collect();
            let dataset = LaunchDataset::from_records(records).unwrap();
            let (min_payload, max_payload) = dataset.payload_bounds();
            for selection in [
                SiteSelection::All,
                SiteSelection::Site(LAUNCH_SITES[0].to_string()),
            ] {
                let chart = payload_scatter(&dataset, &selection, (min_payload, max_payload));
                for series in &chart.series {
                    for point in &series.points {
                        prop_assert!(point[0] >= min_payload && point[0] <= max_payload);
                    }
                }
            }
        }
    }
}
