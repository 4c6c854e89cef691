//! Spec layer: the chart descriptor schema and its in-memory structures.
//!
//! This module is intentionally separate from extraction and rendering.
//! It owns:
//! - ChartSpec (the descriptor as the assistant writes it)
//! - DataPoint (one element of `data`, field order preserved)
//! - ChartKind (renderer-facing classification of `chartType`)

pub mod chart;
pub mod kind;
pub mod point;

pub use chart::{ChartSpec, Marker};
pub use kind::ChartKind;
pub use point::DataPoint;
