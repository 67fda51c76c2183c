use std::collections::BTreeMap;

use super::filter::SiteSelector;
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Outcome summary – input to the pie chart
// ---------------------------------------------------------------------------

/// Aggregated launch counts for the current site selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeSummary {
    /// Successful launches per site (all sites selected). Keeps dropdown site order.
    BySite(Vec<(String, usize)>),
    /// Launches per outcome at a single site. Empty for an unknown site.
    ByOutcome(BTreeMap<Outcome, usize>),
}

impl OutcomeSummary {
    /// `(label, count)` pairs in display order.
    pub fn slices(&self) -> Vec<(String, usize)> {
        match self {
            OutcomeSummary::BySite(counts) => counts.clone(),
            OutcomeSummary::ByOutcome(counts) => counts
                .iter()
                .map(|(outcome, n)| (outcome.to_string(), *n))
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        match self {
            OutcomeSummary::BySite(counts) => counts.iter().map(|(_, n)| n).sum(),
            OutcomeSummary::ByOutcome(counts) => counts.values().sum(),
        }
    }

    /// No slices at all (unknown site). A summary with zero counts is not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            OutcomeSummary::BySite(counts) => counts.is_empty(),
            OutcomeSummary::ByOutcome(counts) => counts.is_empty(),
        }
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match self {
            OutcomeSummary::BySite(counts) if outcome.is_success() => {
                counts.iter().map(|(_, n)| n).sum()
            }
            OutcomeSummary::BySite(_) => 0,
            OutcomeSummary::ByOutcome(counts) => counts.get(&outcome).copied().unwrap_or(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Site-outcome aggregator
// ---------------------------------------------------------------------------

/// Count launch outcomes for the selected site.
///
/// * `All` → successful launches per site, every site present (possibly with 0)
/// * known site → `{Success: n, Failure: m}` over that site's launches
/// * unknown site → empty `ByOutcome`
pub fn site_outcomes(dataset: &LaunchDataset, selector: &SiteSelector) -> OutcomeSummary {
    match selector {
        SiteSelector::All => {
            let counts = dataset
                .sites
                .iter()
                .map(|site| {
                    let successes = dataset
                        .records
                        .iter()
                        .filter(|r| r.site == *site && r.outcome.is_success())
                        .count();
                    (site.clone(), successes)
                })
                .collect();
            OutcomeSummary::BySite(counts)
        }
        SiteSelector::Site(name) => {
            if !dataset.has_site(name) {
                log::debug!("site {name:?} not in dataset, empty outcome summary");
                return OutcomeSummary::ByOutcome(BTreeMap::new());
            }
            let mut counts = BTreeMap::from([(Outcome::Success, 0), (Outcome::Failure, 0)]);
            for rec in dataset.records.iter().filter(|r| r.site == *name) {
                *counts.entry(rec.outcome).or_default() += 1;
            }
            OutcomeSummary::ByOutcome(counts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{record, small_dataset};

    fn site(name: &str) -> SiteSelector {
        SiteSelector::Site(name.to_string())
    }

    #[test]
    fn all_sites_counts_successes() {
        let summary = site_outcomes(&small_dataset(), &SiteSelector::All);
        assert_eq!(
            summary,
            OutcomeSummary::BySite(vec![("A".to_string(), 1), ("B".to_string(), 1)])
        );
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn single_site_counts_both_outcomes() {
        let summary = site_outcomes(&small_dataset(), &site("A"));
        assert_eq!(summary.count(Outcome::Success), 1);
        assert_eq!(summary.count(Outcome::Failure), 1);
        assert_eq!(
            summary.slices(),
            vec![("Success".to_string(), 1), ("Failure".to_string(), 1)]
        );
    }

    #[test]
    fn site_without_failures_keeps_zero_slice() {
        let summary = site_outcomes(&small_dataset(), &site("B"));
        assert_eq!(summary.count(Outcome::Failure), 0);
        assert!(!summary.is_empty());
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn unknown_site_is_empty() {
        let summary = site_outcomes(&small_dataset(), &site("Z"));
        assert!(summary.is_empty());
        assert!(summary.slices().is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn site_with_only_failures_is_listed_with_zero() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 100.0, 1, "FT"),
            record("C", 200.0, 0, "v1.0"),
            record("C", 300.0, 0, "v1.0"),
        ]);
        let summary = site_outcomes(&ds, &SiteSelector::All);
        assert_eq!(
            summary.slices(),
            vec![("C".to_string(), 0), ("A".to_string(), 1)]
        );
    }

    #[test]
    fn all_sites_total_matches_per_site_successes() {
        let ds = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("CCAFS LC-40", 525.0, 1, "v1.0"),
            record("VAFB SLC-4E", 500.0, 1, "v1.1"),
            record("KSC LC-39A", 2490.0, 1, "FT"),
            record("KSC LC-39A", 3600.0, 0, "FT"),
            record("CCAFS SLC-40", 9600.0, 1, "B5"),
        ]);
        let all = site_outcomes(&ds, &SiteSelector::All).count(Outcome::Success);
        let per_site: usize = ds
            .sites
            .iter()
            .map(|s| site_outcomes(&ds, &site(s)).count(Outcome::Success))
            .sum();
        assert_eq!(all, per_site);
        assert_eq!(all, 4);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let ds = small_dataset();
        assert_eq!(
            site_outcomes(&ds, &SiteSelector::All),
            site_outcomes(&ds, &SiteSelector::All)
        );
        assert_eq!(site_outcomes(&ds, &site("A")), site_outcomes(&ds, &site("A")));
    }
}
