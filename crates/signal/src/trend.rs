use serde::{Deserialize, Serialize};

/// Expected near-term price direction for an instrument.
///
/// `Mid` is the neutral default: it is what a predictor reports when it has
/// no data for the requested window, and what strategies assume before the
/// first prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Trend {
    /// No directional view
    #[default]
    Mid,
    /// Price expected to fall
    Short,
    /// Price expected to rise
    Long,
}

impl Trend {
    /// Is this a directional (non-neutral) view?
    pub fn is_directional(&self) -> bool {
        !matches!(self, Trend::Mid)
    }
}
