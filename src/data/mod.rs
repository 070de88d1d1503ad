/// Data layer: row types and the load → filter → project → recode → write stages.
///
/// Architecture:
/// ```text
///  iris.data (headerless CSV, URL or local copy)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → IrisTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  class-A pass ++ class-B pass
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  project → ProjectedTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  encode   │  LabelMapping → EncodedTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  CSV with header, no index
///   └──────────┘
/// ```

pub mod encode;
pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
