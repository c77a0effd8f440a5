//! Job: everything the host hands over for one generation request.

use super::{DrillConfig, Hole};
use crate::config::Settings;
use crate::pattern::{renumber, PatternSpec};
use serde::{Deserialize, Serialize};

/// A drilling job as stored in a job file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    /// Host defaults.
    pub settings: Settings,
    /// Drilling configuration shared by every hole.
    pub config: DrillConfig,
    /// Individually placed holes.
    pub holes: Vec<Hole>,
    /// Parametric layouts expanded after the explicit holes.
    pub patterns: Vec<PatternSpec>,
}

impl Job {
    /// Create a job from explicit holes.
    pub fn new(settings: Settings, config: DrillConfig, holes: Vec<Hole>) -> Self {
        Self {
            settings,
            config,
            holes,
            patterns: Vec::new(),
        }
    }

    /// Total number of holes after pattern expansion.
    pub fn hole_count(&self) -> usize {
        self.patterns
            .iter()
            .map(PatternSpec::hole_count)
            .fold(self.holes.len(), usize::saturating_add)
    }

    /// Problems found in the job's patterns.
    pub fn pattern_problems(&self) -> Vec<String> {
        self.patterns
            .iter()
            .enumerate()
            .flat_map(|(idx, pattern)| {
                pattern
                    .validate()
                    .into_iter()
                    .map(move |problem| format!("Pattern {}: {}", idx + 1, problem))
            })
            .collect()
    }

    /// Explicit holes followed by expanded patterns, with missing sizes filled
    /// from the drill configuration and sequence numbers reassigned.
    ///
    /// Patterns are expanded as given; check [`Job::pattern_problems`] first.
    pub fn resolve_holes(&self) -> Vec<Hole> {
        let mut holes: Vec<Hole> = self
            .holes
            .iter()
            .copied()
            .chain(self.patterns.iter().flat_map(PatternSpec::expand))
            .map(|hole| hole.with_defaults(self.config.diameter, self.config.depth))
            .collect();

        renumber(&mut holes);
        holes
    }
}
