use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Site selector
// ---------------------------------------------------------------------------

/// Value of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    /// Whether a record passes the site constraint.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(name) => record.site == *name,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => write!(f, "All Sites"),
            SiteSelector::Site(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Closed payload interval `[low, high]` in kilograms.
///
/// An inverted interval (`low > high`) is valid to construct and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// `[0, +inf)`.
    #[cfg(test)]
    pub fn unbounded() -> Self {
        PayloadRange {
            low: 0.0,
            high: f64::INFINITY,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    /// Move the low handle to `low`, pushing `high` up so the range stays ordered.
    pub fn dragged_low(self, low: f64) -> Self {
        PayloadRange {
            low,
            high: self.high.max(low),
        }
    }

    /// Move the high handle to `high`, pushing `low` down so the range stays ordered.
    pub fn dragged_high(self, high: f64) -> Self {
        PayloadRange {
            low: self.low.min(high),
            high,
        }
    }

    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }
}

// ---------------------------------------------------------------------------
// Payload-correlation filter
// ---------------------------------------------------------------------------

/// Return indices (in dataset order) of launches whose payload lies in `range`,
/// restricted to the selected site.
///
/// Unknown sites and inverted ranges yield an empty result rather than an error.
pub fn payload_filter(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> Vec<usize> {
    if range.is_inverted() {
        log::debug!("inverted payload range {range:?}, nothing to show");
        return Vec::new();
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg) && selector.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{record, small_dataset};

    fn payloads(ds: &LaunchDataset, idx: &[usize]) -> Vec<f64> {
        idx.iter().map(|&i| ds.records[i].payload_mass_kg).collect()
    }

    fn site(name: &str) -> SiteSelector {
        SiteSelector::Site(name.to_string())
    }

    #[test]
    fn all_sites_within_range() {
        let ds = small_dataset();
        let idx = payload_filter(&ds, &SiteSelector::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(payloads(&ds, &idx), vec![500.0, 800.0]);
    }

    #[test]
    fn single_site_within_range() {
        let ds = small_dataset();
        let idx = payload_filter(&ds, &site("A"), PayloadRange::new(0.0, 10_000.0));
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn unknown_site_is_empty() {
        let ds = small_dataset();
        assert!(payload_filter(&ds, &site("Z"), PayloadRange::new(0.0, 10_000.0)).is_empty());
    }

    #[test]
    fn inverted_range_is_empty() {
        let ds = small_dataset();
        let range = PayloadRange::new(1000.0, 0.0);
        assert!(range.is_inverted());
        assert!(payload_filter(&ds, &SiteSelector::All, range).is_empty());
    }

    #[test]
    fn dragging_a_handle_past_the_other_keeps_order() {
        let range = PayloadRange::new(500.0, 1500.0);

        let r = range.dragged_low(2000.0);
        assert_eq!(r, PayloadRange::new(2000.0, 2000.0));
        assert!(!r.is_inverted());

        let r = range.dragged_high(0.0);
        assert_eq!(r, PayloadRange::new(0.0, 0.0));
        assert!(!r.is_inverted());

        assert_eq!(range.dragged_low(1000.0), PayloadRange::new(1000.0, 1500.0));
        assert_eq!(range.dragged_high(9000.0), PayloadRange::new(500.0, 9000.0));
    }

    #[test]
    fn degenerate_range_matches_exact_payload() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "FT"),
            record("B", 500.0, 0, "B4"),
            record("B", 501.0, 1, "B4"),
        ]);
        let idx = payload_filter(&ds, &SiteSelector::All, PayloadRange::new(500.0, 500.0));
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn range_results_are_subsets() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 0.0, 1, "FT"),
            record("A", 2500.0, 0, "v1.1"),
            record("B", 4800.0, 1, "FT"),
            record("B", 9600.0, 1, "B5"),
            record("C", 15_600.0, 0, "B5"),
        ]);
        let selectors = [SiteSelector::All, site("A"), site("B"), site("C"), site("Z")];
        let ranges = [
            PayloadRange::new(0.0, 0.0),
            PayloadRange::new(0.0, 5000.0),
            PayloadRange::new(2500.0, 9600.0),
            PayloadRange::new(9000.0, 20_000.0),
        ];
        for sel in &selectors {
            let unbounded = payload_filter(&ds, sel, PayloadRange::unbounded());
            for &range in &ranges {
                let got = payload_filter(&ds, sel, range);
                let all = payload_filter(&ds, &SiteSelector::All, range);
                assert!(got.iter().all(|i| unbounded.contains(i)), "{sel} {range:?}");
                assert!(got.iter().all(|i| all.contains(i)), "{sel} {range:?}");
            }
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let ds = small_dataset();
        let range = PayloadRange::new(600.0, 2000.0);
        assert_eq!(
            payload_filter(&ds, &site("A"), range),
            payload_filter(&ds, &site("A"), range)
        );
    }

    #[test]
    fn selector_display() {
        assert_eq!(SiteSelector::All.to_string(), "All Sites");
        assert_eq!(site("KSC LC-39A").to_string(), "KSC LC-39A");
    }
}
