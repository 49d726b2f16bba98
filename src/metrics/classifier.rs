//! Strongest / weakest element selection
//!
//! Walks the distribution in canonical order (Wood, Fire, Earth, Metal, Water)
//! and keeps the first element seen on a tie, for both the maximum and the
//! minimum. A perfectly uniform distribution therefore yields Wood for both.

use crate::metrics::ohang::OhangDistribution;
use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Strongest and weakest element of a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub strongest: Element,
    pub weakest: Element,
}

/// Classify a distribution
pub fn classify(distribution: &OhangDistribution) -> Classification {
    let entries = distribution.entries();
    let (mut strongest, mut max) = entries[0];
    let (mut weakest, mut min) = entries[0];

    for &(element, value) in &entries[1..] {
        if value > max {
            strongest = element;
            max = value;
        }
        if value < min {
            weakest = element;
            min = value;
        }
    }

    Classification { strongest, weakest }
}
