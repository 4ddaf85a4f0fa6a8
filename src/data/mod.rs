/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WeightTable (tolerant or strict)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ WeightTable  │  rectangular rows × weight columns
///   └─────────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │  MeanTrace   │  column_means() → one labeled line series
///   └─────────────┘
/// ```

pub mod loader;
pub mod model;
