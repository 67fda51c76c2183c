/// Data layer: core types, loading, aggregation and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site / booster index
///   └───────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌───────────┐         ┌──────────┐
///   │ aggregate  │  pie    │  filter   │  site + payload range → indices
///   └───────────┘         └──────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
