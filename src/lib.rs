//! Chart descriptor extraction for assistant answers.
//!
//! Assistant answers may embed a chart request inline (fenced blocks, bare
//! JSON fragments, single-quoted keys, surrounding prose). This crate pulls
//! out at most one [`ChartSpec`] per answer and normalizes its data points
//! into `{x, y}` records that any renderer can plot.
//!
//! Layers:
//! - `spec`: chart descriptor types (strict marker, other fields kept verbatim)
//! - `extract`: ordered fallback strategies over raw text
//! - `model`: data point normalization
//! - `message`: answer text + chart pairing for display
//! - `render`: self-contained HTML preview

pub mod extract;
pub mod message;
pub mod model;
pub mod render;
pub mod spec;

pub type Result<T> = anyhow::Result<T>;

pub use extract::{Extraction, Extractor, Rejection, Strategy, extract};
pub use message::Message;
pub use model::{Record, normalize, normalize_value};
pub use spec::{ChartKind, ChartSpec, DataPoint};
