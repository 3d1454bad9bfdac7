/// Data layer: core types, generation, statistics, cleaning and export.
///
/// Architecture:
/// ```text
///   rng ──▶ ┌──────────┐
///           │ generate  │  synthetic customers, ids 1..=n
///           └──────────┘
///                │
///                ▼
///   ┌──────────────────┐   clean / reset   ┌──────────┐
///   │ CustomerDataset   │ ◀───────────────▶ │  filter   │
///   │ original, current │                   └──────────┘
///   └──────────────────┘
///                │ every change
///                ▼
///   ┌──────────┐      ┌──────────┐
///   │  stats    │ ───▶ │ insights  │
///   └──────────┘      └──────────┘
///                │
///                ▼
///   ┌──────────┐
///   │  export   │  .csv / .json / .parquet
///   └──────────┘
/// ```

pub mod dataset;
pub mod export;
pub mod filter;
pub mod generate;
pub mod insights;
pub mod model;
pub mod stats;

pub use dataset::CustomerDataset;
pub use generate::DatasetError;
pub use model::{Customer, DataStats, Gender};
