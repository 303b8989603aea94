//! Data layer: core types, loading, filtering, and writing.
//!
//! Architecture:
//! ```text
//!   input .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Table
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  keep rows where column == value
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  writer   │  serialise Table → output .csv
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
