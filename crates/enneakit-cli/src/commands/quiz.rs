use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use enneakit_core::questions::{Answer, ChoiceSide, Question};
use enneakit_core::{AdaptiveEngine, MergedEngine, QuizEngine, QuizState};

#[derive(Subcommand)]
pub enum QuizAction {
    /// Start a new quiz session and write its state file
    Start {
        /// Which engine sequences the quiz
        #[arg(long, value_enum, default_value_t = EngineKind::Adaptive)]
        engine: EngineKind,
        /// Where to store session state
        #[arg(long, default_value = "quiz.json")]
        state: PathBuf,
    },
    /// Answer the current question (Likert 1-5, "a"/"b", or "2,0,1")
    Answer {
        value: String,
        #[arg(long, default_value = "quiz.json")]
        state: PathBuf,
    },
    /// Show progress and the live type ranking
    Status {
        #[arg(long, default_value = "quiz.json")]
        state: PathBuf,
    },
    /// Print the final results as JSON
    Results {
        #[arg(long, default_value = "quiz.json")]
        state: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Adaptive,
    Merged,
}

/// On-disk session: the engine that drives it plus its full state.
#[derive(Serialize, Deserialize)]
struct SavedQuiz {
    engine: EngineKind,
    state: QuizState,
}

fn engine_for(kind: EngineKind) -> Box<dyn QuizEngine> {
    match kind {
        EngineKind::Adaptive => Box::new(AdaptiveEngine::new()),
        EngineKind::Merged => Box::new(MergedEngine::new()),
    }
}

fn load(path: &Path) -> Result<SavedQuiz, Box<dyn Error>> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&json)?)
}

fn save(path: &Path, quiz: &SavedQuiz) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(quiz)?)?;
    Ok(())
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn Error>> {
    match action {
        QuizAction::Start { engine, state } => {
            let driver = engine_for(engine);
            let quiz = SavedQuiz {
                engine,
                state: driver.start(driver.initial_state()),
            };
            save(&state, &quiz)?;
            println!("Session {} started.", quiz.state.session_id);
            print_question(&quiz.state)?;
            Ok(())
        }
        QuizAction::Answer { value, state } => {
            let mut quiz = load(&state)?;
            let question = quiz
                .state
                .current_question
                .clone()
                .ok_or("no question pending; run `quiz results`")?;
            let answer = parse_answer(&question, &value)?;
            let driver = engine_for(quiz.engine);
            quiz.state = driver.process_answer(quiz.state, answer)?;
            save(&state, &quiz)?;
            if quiz.state.is_finished() {
                println!("Quiz complete. Run `quiz results` for the report.");
            } else {
                print_question(&quiz.state)?;
            }
            Ok(())
        }
        QuizAction::Status { state } => {
            let quiz = load(&state)?;
            let driver = engine_for(quiz.engine);
            let progress = driver.progress(&quiz.state);
            println!("{}", serde_json::to_string_pretty(&progress)?);
            println!("Ranking:");
            for row in driver.rankings(&quiz.state) {
                println!(
                    "  {} {:<20} {:5.1}%",
                    row.type_id.number(),
                    row.type_id.name(),
                    row.probability * 100.0
                );
            }
            Ok(())
        }
        QuizAction::Results { state } => {
            let quiz = load(&state)?;
            let results = quiz
                .state
                .results
                .as_ref()
                .ok_or("quiz not finished yet; run `quiz status`")?;
            println!("{}", results.to_json()?);
            Ok(())
        }
    }
}

/// Parse a raw answer string against the shape the question expects.
fn parse_answer(question: &Question, raw: &str) -> Result<Answer, Box<dyn Error>> {
    match question {
        Question::ForcedChoice { .. } => match raw.to_ascii_lowercase().as_str() {
            "a" => Ok(Answer::Choice(ChoiceSide::A)),
            "b" => Ok(Answer::Choice(ChoiceSide::B)),
            other => Err(format!("expected \"a\" or \"b\", got {other:?}").into()),
        },
        Question::Scenario { .. } | Question::InstinctParagraph { .. } => {
            let order = raw
                .split(',')
                .map(|s| s.trim().parse::<usize>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| format!("expected a comma-separated ranking, got {raw:?}"))?;
            Ok(Answer::Ranking(order))
        }
        _ => {
            let value = raw
                .parse::<u8>()
                .map_err(|_| format!("expected a 1-5 rating, got {raw:?}"))?;
            Ok(Answer::Likert(value))
        }
    }
}

fn print_question(state: &QuizState) -> Result<(), Box<dyn Error>> {
    let question = state
        .current_question
        .as_ref()
        .ok_or("no question pending")?;
    match question {
        Question::ForcedChoice {
            option_a, option_b, ..
        } => {
            println!("Which fits you better?");
            println!("  a) {}", option_a.text);
            println!("  b) {}", option_b.text);
        }
        Question::Scenario { prompt, options, .. } => {
            println!("{prompt}");
            println!("Rank these best-first (e.g. 2,0,1):");
            for (i, option) in options.iter().enumerate() {
                println!("  {i}) {}", option.text);
            }
        }
        Question::InstinctParagraph { options, .. } => {
            println!("Rank these by how strongly they resonate, best-first:");
            for (i, option) in options.iter().enumerate() {
                println!("  {i}) {}", option.text);
            }
        }
        Question::Screening { text, .. }
        | Question::Core { text, .. }
        | Question::Differentiator { text, .. }
        | Question::Wing { text, .. }
        | Question::Instinct { text, .. }
        | Question::AttentionCheck { text, .. }
        | Question::IntegrationLevel { text, .. }
        | Question::Health { text, .. } => {
            println!("{text}");
            println!("  (1 = strongly disagree .. 5 = strongly agree)");
        }
    }
    Ok(())
}
