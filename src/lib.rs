//! classplot – comparison plots for CLASS output spectra.
//!
//! Loads one or more CLASS output files (whitespace-delimited matrices with
//! a comment-marked header line naming the columns), resolves a field
//! selection across them, and superimposes the curves in a window or a PNG,
//! with a standalone replay script written alongside.

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod error;
pub mod figure;
pub mod script;
pub mod state;
pub mod ui;

pub use cli::{Cli, ScaleMode};
pub use data::model::{ColumnDescriptor, Curve, SpectrumFile};
pub use error::PlotError;
