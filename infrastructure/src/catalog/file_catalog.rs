//! TOML quiz catalog
//!
//! A catalog file lists quizzes with their questions and options in order.
//! Ids are not authored: quizzes, questions and options are each numbered
//! from 1 in file order, across the whole catalog, the way an
//! auto-increment store would number freshly seeded rows.
//!
//! # Format
//!
//! ```toml
//! [[quizzes]]
//! title = "Math Quiz"
//! description = "Simple math questions (5 minutes)"
//!
//! [[quizzes.questions]]
//! text = "What is 5 + 3?"
//! options = [
//!     { text = "7" },
//!     { text = "8", correct = true },
//! ]
//! ```
//!
//! Every quiz is validated after numbering. Error-level issues abort the
//! load; warnings (zero or several correct options) are logged and the quiz
//! is served as authored.

use quiz_domain::{DomainError, OptionId, Question, QuestionId, Quiz, QuizId, QuizOption};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The built-in sample catalog
pub const DEFAULT_CATALOG: &str = include_str!("../../catalog/default_catalog.toml");

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Could not read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("Quiz ID {0} appears more than once")]
    DuplicateQuiz(QuizId),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    quizzes: Vec<CatalogQuiz>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogQuiz {
    title: String,
    description: Option<String>,
    #[serde(default)]
    questions: Vec<CatalogQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogQuestion {
    text: String,
    #[serde(default)]
    options: Vec<CatalogOption>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogOption {
    text: String,
    #[serde(default)]
    correct: bool,
}

/// Hands out the next id of each kind.
#[derive(Default)]
struct IdSequence {
    quiz: u32,
    question: u32,
    option: u32,
}

impl IdSequence {
    fn next_quiz(&mut self) -> QuizId {
        self.quiz += 1;
        QuizId::new(self.quiz)
    }

    fn next_question(&mut self) -> QuestionId {
        self.question += 1;
        QuestionId::new(self.question)
    }

    fn next_option(&mut self) -> OptionId {
        self.option += 1;
        OptionId::new(self.option)
    }
}

/// Parse catalog TOML, number it, and validate every quiz.
pub fn parse_catalog(source: &str) -> Result<Vec<Quiz>, CatalogLoadError> {
    let file: CatalogFile = toml::from_str(source)?;
    let mut ids = IdSequence::default();

    let quizzes: Vec<Quiz> = file
        .quizzes
        .into_iter()
        .map(|entry| build_quiz(entry, &mut ids))
        .collect();

    for quiz in &quizzes {
        for issue in quiz.ensure_valid()? {
            warn!("Catalog: {}", issue);
        }
        debug!(
            quiz_id = %quiz.id,
            questions = quiz.question_count(),
            "Loaded quiz '{}'",
            quiz.title
        );
    }

    Ok(quizzes)
}

/// Read and parse a catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Vec<Quiz>, CatalogLoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let quizzes = parse_catalog(&source)?;
    info!("Loaded {} quizzes from {}", quizzes.len(), path.display());
    Ok(quizzes)
}

/// Load `path` if given, otherwise the built-in sample catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Quiz>, CatalogLoadError> {
    match path {
        Some(path) => load_catalog_file(path),
        None => {
            let quizzes = parse_catalog(DEFAULT_CATALOG)?;
            info!("Loaded {} quizzes from the built-in catalog", quizzes.len());
            Ok(quizzes)
        }
    }
}

fn build_quiz(entry: CatalogQuiz, ids: &mut IdSequence) -> Quiz {
    let quiz_id = ids.next_quiz();
    let mut quiz = Quiz::new(quiz_id, entry.title);
    quiz.description = entry.description;

    for question_entry in entry.questions {
        let question_id = ids.next_question();
        let mut question = Question::new(question_id, quiz_id, question_entry.text);
        for option_entry in question_entry.options {
            let mut option = QuizOption::new(ids.next_option(), question_id, option_entry.text);
            option.is_correct = option_entry.correct;
            question = question.with_option(option);
        }
        quiz = quiz.with_question(question);
    }

    quiz
}
