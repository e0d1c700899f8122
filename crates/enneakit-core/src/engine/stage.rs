//! Quiz stage enum and its one-directional transition table.
//!
//! Transitions only move forward; committed answers are irreversible, so a
//! "back" transition is unrepresentable by construction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intro,
    /// Ranking-scenario screening (merged engine only).
    Scenario,
    /// Adaptive Likert type determination.
    Typing,
    /// Targeted A/B disambiguation between confused pairs.
    ForcedChoice,
    Wing,
    Instinct,
    /// Health-level Likert block (merged engine only).
    Health,
    Results,
}

impl Stage {
    /// Legal next stages. The optional stages (scenario, forced-choice,
    /// health) can be skipped but never revisited.
    pub fn successors(self) -> &'static [Stage] {
        match self {
            Stage::Intro => &[Stage::Scenario, Stage::Typing],
            Stage::Scenario => &[Stage::Typing],
            Stage::Typing => &[Stage::ForcedChoice, Stage::Wing],
            Stage::ForcedChoice => &[Stage::Wing],
            Stage::Wing => &[Stage::Instinct],
            Stage::Instinct => &[Stage::Health, Stage::Results],
            Stage::Health => &[Stage::Results],
            Stage::Results => &[],
        }
    }

    pub fn can_transition(self, next: Stage) -> bool {
        self.successors().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Results
    }

    /// Short user-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Intro => "Getting started",
            Stage::Scenario => "Quick screening",
            Stage::Typing => "Finding your type",
            Stage::ForcedChoice => "Separating close candidates",
            Stage::Wing => "Determining your wing",
            Stage::Instinct => "Ranking your instincts",
            Stage::Health => "Assessing your current level",
            Stage::Results => "Results",
        }
    }
}
