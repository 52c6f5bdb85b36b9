//! Data layer: header decoding, loading, and selection resolution.
//!
//! Architecture:
//! ```text
//!  CLASS .dat file
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read file → numeric matrix + header line
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ header / names  │  marker spans → ColumnDescriptor (short + display)
//!   └────────────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ SpectrumFile  │  column-major data + ordered descriptors
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  select   │  requested short names → per-file column indices → curves
//!   └──────────┘
//! ```

pub mod header;
pub mod loader;
pub mod model;
pub mod names;
pub mod select;
