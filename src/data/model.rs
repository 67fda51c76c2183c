use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome. Stored in the source data as `class` (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Map a raw class value to an outcome. Anything but 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name, e.g. `CCAFS LC-40`.
    pub site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Booster version category, e.g. `FT` or `B5`.
    pub booster_category: String,
}

impl LaunchRecord {
    /// The triple plotted by the scatter chart: (payload, class, booster category).
    pub fn scatter_point(&self) -> (f64, u8, &str) {
        (
            self.payload_mass_kg,
            self.outcome.class(),
            &self.booster_category,
        )
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed category indices.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct sites, most launches first (ties alphabetical).
    pub sites: Vec<String>,
    /// Sorted set of distinct booster categories.
    pub booster_categories: BTreeSet<String>,
}

impl LaunchDataset {
    /// Build category indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut site_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut booster_categories = BTreeSet::new();

        for rec in &records {
            *site_counts.entry(rec.site.as_str()).or_default() += 1;
            booster_categories.insert(rec.booster_category.clone());
        }

        let mut ranked: Vec<(&str, usize)> = site_counts.into_iter().collect();
        // BTreeMap iteration is alphabetical, and sort_by is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let sites = ranked.into_iter().map(|(s, _)| s.to_string()).collect();

        LaunchDataset {
            records,
            sites,
            booster_categories,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Smallest and largest payload observed, or `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.records.iter().map(|r| r.payload_mass_kg).fold(None, |acc, p| {
            Some(match acc {
                None => (p, p),
                Some((lo, hi)) => (lo.min(p), hi.max(p)),
            })
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: booster.to_string(),
        }
    }

    /// The three-launch dataset used across the data-layer tests.
    pub(crate) fn small_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "FT"),
            record("A", 1500.0, 0, "v1.1"),
            record("B", 800.0, 1, "FT"),
        ])
    }

    #[test]
    fn outcome_class_mapping() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
    }

    #[test]
    fn sites_ordered_by_launch_count() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC", 1.0, 1, "FT"),
            record("VAFB", 2.0, 1, "FT"),
            record("CCAFS", 3.0, 0, "v1.0"),
            record("CCAFS", 4.0, 1, "v1.0"),
        ]);
        assert_eq!(ds.sites, vec!["CCAFS", "KSC", "VAFB"]);
        assert!(ds.has_site("KSC"));
        assert!(!ds.has_site("Z"));
    }

    #[test]
    fn booster_categories_are_distinct() {
        let ds = small_dataset();
        let cats: Vec<&str> = ds.booster_categories.iter().map(String::as_str).collect();
        assert_eq!(cats, vec!["FT", "v1.1"]);
    }

    #[test]
    fn payload_bounds() {
        assert_eq!(small_dataset().payload_bounds(), Some((500.0, 1500.0)));
        assert_eq!(LaunchDataset::from_records(Vec::new()).payload_bounds(), None);
    }

    #[test]
    fn scatter_point_exposes_plotted_fields() {
        let rec = record("A", 500.0, 1, "FT");
        assert_eq!(rec.scatter_point(), (500.0, 1, "FT"));
    }
}
