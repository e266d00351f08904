//! Quiz aggregate: a quiz owns its questions, a question owns its options.
//!
//! The serialized form is the wire format of the API (camelCase field names,
//! `description` omitted when absent).

use super::value_objects::{OptionId, QuestionId, QuizId};
use serde::{Deserialize, Serialize};

/// A quiz with its questions and options (Aggregate root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(id: QuizId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            questions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Whether any option in this quiz carries a `true` correctness flag.
    pub fn reveals_answers(&self) -> bool {
        self.questions
            .iter()
            .flat_map(|q| q.options.iter())
            .any(|o| o.is_correct)
    }
}

/// A question belonging to a quiz (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub quiz_id: QuizId,
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(id: QuestionId, quiz_id: QuizId, question_text: impl Into<String>) -> Self {
        Self {
            id,
            quiz_id,
            question_text: question_text.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: QuizOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn option(&self, id: OptionId) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// The first option flagged as correct, if any.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    pub fn correct_option_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }
}

/// An answer option of a question (Entity)
///
/// Named `QuizOption` to stay clear of [`std::option::Option`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub id: OptionId,
    pub question_id: QuestionId,
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl QuizOption {
    pub fn new(id: OptionId, question_id: QuestionId, option_text: impl Into<String>) -> Self {
        Self {
            id,
            question_id,
            option_text: option_text.into(),
            is_correct: false,
        }
    }

    pub fn correct(mut self) -> Self {
        self.is_correct = true;
        self
    }
}
