use std::collections::BTreeMap;
use std::error::Error;

use clap::Subcommand;

use enneakit_core::questions::{self, Question};

#[derive(Subcommand)]
pub enum PoolsAction {
    /// Check the question pools for authoring defects
    Validate,
    /// Print question counts per pool
    Stats,
}

pub fn run(action: PoolsAction) -> Result<(), Box<dyn Error>> {
    match action {
        PoolsAction::Validate => {
            let defects = questions::validate_pools();
            if defects.is_empty() {
                println!("All pools OK ({} questions).", questions::all_questions().len());
                Ok(())
            } else {
                for defect in &defects {
                    println!("{}", serde_json::to_string(defect)?);
                }
                Err(format!("{} pool defect(s)", defects.len()).into())
            }
        }
        PoolsAction::Stats => {
            let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
            for q in questions::all_questions() {
                let kind = match q {
                    Question::Screening { .. } => "screening",
                    Question::Core { .. } => "core",
                    Question::Differentiator { .. } => "differentiator",
                    Question::Wing { .. } => "wing",
                    Question::ForcedChoice { .. } => "forced_choice",
                    Question::Instinct { .. } => "instinct",
                    Question::AttentionCheck { .. } => "attention_check",
                    Question::IntegrationLevel { .. } => "integration_level",
                    Question::Scenario { .. } => "scenario",
                    Question::InstinctParagraph { .. } => "instinct_paragraph",
                    Question::Health { .. } => "health",
                };
                *counts.entry(kind).or_default() += 1;
            }
            for (kind, count) in counts {
                println!("{kind:<20} {count}");
            }
            Ok(())
        }
    }
}
