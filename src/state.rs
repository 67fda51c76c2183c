use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::SliderBounds;
use crate::data::aggregate::{OutcomeSummary, site_outcomes};
use crate::data::filter::{PayloadRange, SiteSelector, payload_filter};
use crate::data::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Dashboard events
// ---------------------------------------------------------------------------

/// A widget change, produced by the panels and applied to [`AppState`].
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SiteSelected(SiteSelector),
    PayloadRangeChanged(PayloadRange),
    ToggleRecordTable,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, shared and never mutated.
    pub dataset: Arc<LaunchDataset>,

    /// File the dataset came from, shown in the top bar.
    pub source_name: String,

    pub slider: SliderBounds,

    /// Current dropdown value.
    pub site: SiteSelector,

    /// Current slider value.
    pub payload_range: PayloadRange,

    /// Pie chart input for `site` (cached).
    pub summary: OutcomeSummary,

    /// Indices of launches shown in the scatter chart (cached).
    pub visible_indices: Vec<usize>,

    /// Booster category colours for the scatter chart.
    pub color_map: ColorMap,

    pub show_table: bool,
}

impl AppState {
    /// Initial state: all sites, payload range spanning the observed payloads.
    pub fn new(dataset: Arc<LaunchDataset>, source_name: String, slider: SliderBounds) -> Self {
        let (lo, hi) = dataset.payload_bounds().unwrap_or((slider.min, slider.max));
        if lo < slider.min || hi > slider.max {
            log::warn!(
                "payloads span [{lo}, {hi}] kg, outside slider bounds [{}, {}]",
                slider.min,
                slider.max
            );
        }

        let site = SiteSelector::All;
        let payload_range = PayloadRange::new(lo, hi);
        let summary = site_outcomes(&dataset, &site);
        let visible_indices = payload_filter(&dataset, &site, payload_range);
        let color_map = ColorMap::new(&dataset.booster_categories);

        Self {
            dataset,
            source_name,
            slider,
            site,
            payload_range,
            summary,
            visible_indices,
            color_map,
            show_table: false,
        }
    }

    /// Slider value spanning every observed payload.
    pub fn default_payload_range(&self) -> PayloadRange {
        let (lo, hi) = self
            .dataset
            .payload_bounds()
            .unwrap_or((self.slider.min, self.slider.max));
        PayloadRange::new(lo, hi)
    }

    /// Dropdown options: "All Sites" followed by each site.
    pub fn site_options(&self) -> Vec<SiteSelector> {
        std::iter::once(SiteSelector::All)
            .chain(self.dataset.sites.iter().cloned().map(SiteSelector::Site))
            .collect()
    }

    /// Dropdown options whose label contains `query`, ignoring case.
    /// "All Sites" is always offered.
    pub fn site_options_matching(&self, query: &str) -> Vec<SiteSelector> {
        let query = query.trim().to_lowercase();
        self.site_options()
            .into_iter()
            .filter(|opt| {
                *opt == SiteSelector::All
                    || query.is_empty()
                    || opt.to_string().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Apply one widget change and recompute what depends on it.
    pub fn apply(&mut self, event: DashboardEvent) {
        log::debug!("applying {event:?}");
        match event {
            DashboardEvent::SiteSelected(site) => {
                self.site = site;
                self.summary = site_outcomes(&self.dataset, &self.site);
                self.refilter();
            }
            DashboardEvent::PayloadRangeChanged(range) => {
                self.payload_range = range;
                self.refilter();
            }
            DashboardEvent::ToggleRecordTable => {
                self.show_table = !self.show_table;
            }
        }
    }

    /// Recompute `visible_indices` after a site or range change.
    fn refilter(&mut self) {
        self.visible_indices = payload_filter(&self.dataset, &self.site, self.payload_range);
        log::debug!(
            "{} of {} launches in scatter selection",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    /// Launches currently shown in the scatter chart.
    pub fn visible_records(&self) -> impl Iterator<Item = &LaunchRecord> {
        self.visible_indices
            .iter()
            .map(move |&i| &self.dataset.records[i])
    }

    pub fn pie_title(&self) -> String {
        match &self.site {
            SiteSelector::All => "Total Success Launches by Site".to_string(),
            SiteSelector::Site(name) => format!("Launch Outcomes for {name}"),
        }
    }

    pub fn scatter_title(&self) -> String {
        match &self.site {
            SiteSelector::All => "Correlation between Payload and Success".to_string(),
            SiteSelector::Site(name) => {
                format!("Correlation between Payload and Success for {name}")
            }
        }
    }
}
