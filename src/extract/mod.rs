//! Chart extraction from free-form assistant text.
//!
//! Strategies run in a fixed order and the first success wins:
//! 1) fenced code blocks whose content is a `"type": "chart"` object
//! 2) a balanced-brace scan from the first canonical chart marker
//! 3) a loose scan for the smallest `{...}` around a `type: chart` field
//!
//! Every attempt is a `Result<ChartSpec, Rejection>`; rejections are logged
//! at debug level and never surface to callers.

pub mod candidate;
pub mod fence;
pub mod scan;

pub use candidate::Rejection;

use crate::spec::ChartSpec;
use candidate::{parse_candidate, read_chart};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Fenced code blocks, in document order.
    Fenced,
    /// Brace-balanced object starting at a canonical marker.
    Balanced,
    /// Smallest `{...}` around a `type: chart` field.
    Loose,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Fenced, Strategy::Balanced, Strategy::Loose];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Fenced => "fenced",
            Strategy::Balanced => "balanced",
            Strategy::Loose => "loose",
        }
    }

    pub fn run(self, text: &str) -> Result<ChartSpec, Rejection> {
        match self {
            Strategy::Fenced => from_fenced_blocks(text),
            Strategy::Balanced => from_balanced_scan(text),
            Strategy::Loose => from_loose_scan(text),
        }
    }
}

/// A descriptor plus the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub spec: ChartSpec,
    pub strategy: Strategy,
}

/// Ordered strategy list. Stateless, so one instance can serve any number of
/// messages concurrently.
#[derive(Debug, Clone)]
pub struct Extractor {
    strategies: Vec<Strategy>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict (and reorder) the strategies. Repeats are dropped.
    pub fn with_strategies(strategies: impl IntoIterator<Item = Strategy>) -> Self {
        let mut out: Vec<Strategy> = Vec::new();
        for s in strategies {
            if !out.contains(&s) {
                out.push(s);
            }
        }
        Self { strategies: out }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn extract(&self, text: &str) -> Option<ChartSpec> {
        self.extract_with_origin(text).map(|e| e.spec)
    }

    pub fn extract_with_origin(&self, text: &str) -> Option<Extraction> {
        for &strategy in &self.strategies {
            match strategy.run(text) {
                Ok(spec) => {
                    debug!(strategy = strategy.name(), "chart extracted");
                    return Some(Extraction { spec, strategy });
                }
                Err(rejection) => {
                    debug!(strategy = strategy.name(), %rejection, "strategy produced no chart");
                }
            }
        }
        None
    }
}

/// Extract a chart with the default strategy order.
pub fn extract(text: &str) -> Option<ChartSpec> {
    Extractor::default().extract(text)
}

fn from_fenced_blocks(text: &str) -> Result<ChartSpec, Rejection> {
    let mut last = Rejection::NoCandidate;
    for (idx, block) in fence::fenced_blocks(text).enumerate() {
        match parse_candidate(block).and_then(|value| read_chart(value, true)) {
            Ok(spec) => return Ok(spec),
            Err(rejection) => {
                debug!(block = idx, %rejection, "fenced block rejected");
                last = rejection;
            }
        }
    }
    Err(last)
}

fn from_balanced_scan(text: &str) -> Result<ChartSpec, Rejection> {
    let start = scan::find_marker(text).ok_or(Rejection::NoCandidate)?;
    let end = scan::balanced_object_end(text, start).ok_or(Rejection::NoCandidate)?;
    // The marker already guarantees `"type": "chart"`.
    parse_candidate(&text[start..end]).and_then(|value| read_chart(value, false))
}

fn from_loose_scan(text: &str) -> Result<ChartSpec, Rejection> {
    let mut last = Rejection::NoCandidate;
    for (start, end) in scan::loose_chart_spans(text) {
        match parse_candidate(&text[start..end]).and_then(|value| read_chart(value, false)) {
            Ok(spec) => return Ok(spec),
            Err(rejection) => {
                debug!(start, %rejection, "loose span rejected");
                last = rejection;
            }
        }
    }
    Err(last)
}
