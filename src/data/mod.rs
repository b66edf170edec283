/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  remote CSV (fixed URL)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → continent enrichment → memoized Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, distinct values per dimension
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply the four selection sets → row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  KPIs, grouped tables, histogram
///   └───────────┘
/// ```
pub mod aggregate;
pub mod continent;
pub mod filter;
pub mod loader;
pub mod model;
