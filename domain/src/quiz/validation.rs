//! Content checks for authored quizzes.
//!
//! Structural problems (no title, duplicate ids, options pointing at the
//! wrong question) are errors: the catalog cannot be served consistently.
//! Correct-option count is an authoring contract, not a runtime rule, so a
//! question with zero or several correct options only produces a warning.
//!
//! # Examples
//!
//! ```
//! use quiz_domain::{Quiz, QuizId};
//!
//! let quiz = Quiz::new(QuizId::new(1), "Empty but valid");
//! assert!(quiz.validate().is_empty());
//! ```

use super::entities::Quiz;
use super::value_objects::{QuestionId, QuizId};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Severity level of a content issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The quiz cannot be served.
    Error,
    /// The quiz is served but may score oddly.
    Warning,
}

/// Identifies a specific content issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizIssueCode {
    EmptyTitle,
    EmptyQuestionText,
    NoOptions,
    DuplicateQuestionId,
    DuplicateOptionId,
    /// `question.quiz_id` does not match the owning quiz.
    ForeignQuestion,
    /// `option.question_id` does not match the owning question.
    ForeignOption,
    NoCorrectOption,
    MultipleCorrectOptions,
}

impl QuizIssueCode {
    pub fn severity(self) -> Severity {
        match self {
            QuizIssueCode::NoCorrectOption | QuizIssueCode::MultipleCorrectOptions => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

/// A detected issue in an authored quiz.
#[derive(Debug, Clone)]
pub struct QuizIssue {
    pub severity: Severity,
    pub code: QuizIssueCode,
    pub quiz_id: QuizId,
    pub question_id: Option<QuestionId>,
    pub message: String,
}

impl QuizIssue {
    fn new(
        code: QuizIssueCode,
        quiz_id: QuizId,
        question_id: Option<QuestionId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: code.severity(),
            code,
            quiz_id,
            question_id,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for QuizIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.question_id {
            Some(qid) => write!(f, "quiz {} question {}: {}", self.quiz_id, qid, self.message),
            None => write!(f, "quiz {}: {}", self.quiz_id, self.message),
        }
    }
}

impl Quiz {
    /// Check the quiz content and return every issue found.
    pub fn validate(&self) -> Vec<QuizIssue> {
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(QuizIssue::new(
                QuizIssueCode::EmptyTitle,
                self.id,
                None,
                "title is empty",
            ));
        }

        let mut seen_questions = HashSet::new();
        for question in &self.questions {
            let qid = Some(question.id);

            if !seen_questions.insert(question.id) {
                issues.push(QuizIssue::new(
                    QuizIssueCode::DuplicateQuestionId,
                    self.id,
                    qid,
                    "question id is used more than once",
                ));
            }
            if question.quiz_id != self.id {
                issues.push(QuizIssue::new(
                    QuizIssueCode::ForeignQuestion,
                    self.id,
                    qid,
                    format!("question claims to belong to quiz {}", question.quiz_id),
                ));
            }
            if question.question_text.trim().is_empty() {
                issues.push(QuizIssue::new(
                    QuizIssueCode::EmptyQuestionText,
                    self.id,
                    qid,
                    "question text is empty",
                ));
            }
            if question.options.is_empty() {
                issues.push(QuizIssue::new(
                    QuizIssueCode::NoOptions,
                    self.id,
                    qid,
                    "question has no options",
                ));
                continue;
            }

            let mut seen_options = HashSet::new();
            for option in &question.options {
                if !seen_options.insert(option.id) {
                    issues.push(QuizIssue::new(
                        QuizIssueCode::DuplicateOptionId,
                        self.id,
                        qid,
                        format!("option id {} is used more than once", option.id),
                    ));
                }
                if option.question_id != question.id {
                    issues.push(QuizIssue::new(
                        QuizIssueCode::ForeignOption,
                        self.id,
                        qid,
                        format!(
                            "option {} claims to belong to question {}",
                            option.id, option.question_id
                        ),
                    ));
                }
            }

            match question.correct_option_count() {
                1 => {}
                0 => issues.push(QuizIssue::new(
                    QuizIssueCode::NoCorrectOption,
                    self.id,
                    qid,
                    "no option is marked correct; the question can never score",
                )),
                n => issues.push(QuizIssue::new(
                    QuizIssueCode::MultipleCorrectOptions,
                    self.id,
                    qid,
                    format!("{} options are marked correct; only the first one scores", n),
                )),
            }
        }

        issues
    }

    /// Validate and fail on the first error-level issue.
    ///
    /// On success returns the warnings, which callers are expected to log.
    pub fn ensure_valid(&self) -> Result<Vec<QuizIssue>, DomainError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(QuizIssue::is_error);
        match errors.into_iter().next() {
            Some(issue) => Err(DomainError::InvalidQuiz {
                quiz_id: self.id,
                reason: issue.message,
            }),
            None => Ok(warnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::entities::{Question, QuizOption};
    use crate::quiz::value_objects::OptionId;

    fn question(id: u32, quiz: u32, correct: &[bool]) -> Question {
        let qid = QuestionId::new(id);
        let mut q = Question::new(qid, QuizId::new(quiz), format!("question {}", id));
        for (i, &is_correct) in correct.iter().enumerate() {
            let mut opt = QuizOption::new(OptionId::new(id * 10 + i as u32), qid, "opt");
            opt.is_correct = is_correct;
            q = q.with_option(opt);
        }
        q
    }

    fn codes(quiz: &Quiz) -> Vec<QuizIssueCode> {
        quiz.validate().into_iter().map(|i| i.code).collect()
    }

    #[test]
    fn well_formed_quiz_has_no_issues() {
        let quiz = Quiz::new(QuizId::new(1), "Fine")
            .with_question(question(1, 1, &[false, true, false]))
            .with_question(question(2, 1, &[true, false]));
        assert!(quiz.validate().is_empty());
    }

    #[test]
    fn correct_option_count_is_only_a_warning() {
        let quiz = Quiz::new(QuizId::new(1), "Odd")
            .with_question(question(1, 1, &[false, false]))
            .with_question(question(2, 1, &[true, true]));
        let issues = quiz.validate();

        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert_eq!(issues[0].code, QuizIssueCode::NoCorrectOption);
        assert_eq!(issues[1].code, QuizIssueCode::MultipleCorrectOptions);
        assert_eq!(issues[1].question_id, Some(QuestionId::new(2)));
    }

    #[test]
    fn structural_problems_are_errors() {
        let mut dup = question(1, 1, &[true]);
        dup.question_text = "  ".to_string();
        let quiz = Quiz::new(QuizId::new(1), "")
            .with_question(question(1, 1, &[true]))
            .with_question(dup)
            .with_question(question(3, 2, &[]));

        let found = codes(&quiz);
        assert!(found.contains(&QuizIssueCode::EmptyTitle));
        assert!(found.contains(&QuizIssueCode::DuplicateQuestionId));
        assert!(found.contains(&QuizIssueCode::EmptyQuestionText));
        assert!(found.contains(&QuizIssueCode::ForeignQuestion));
        assert!(found.contains(&QuizIssueCode::NoOptions));
        assert!(quiz.validate().iter().any(QuizIssue::is_error));
    }

    #[test]
    fn foreign_and_duplicate_options_are_errors() {
        let qid = QuestionId::new(1);
        let q = Question::new(qid, QuizId::new(1), "q")
            .with_option(QuizOption::new(OptionId::new(1), qid, "a").correct())
            .with_option(QuizOption::new(OptionId::new(1), qid, "b"))
            .with_option(QuizOption::new(OptionId::new(2), QuestionId::new(8), "c"));
        let quiz = Quiz::new(QuizId::new(1), "Options").with_question(q);

        let found = codes(&quiz);
        assert_eq!(
            found,
            vec![QuizIssueCode::DuplicateOptionId, QuizIssueCode::ForeignOption]
        );
    }

    #[test]
    fn ensure_valid_returns_warnings_or_first_error() {
        let odd = Quiz::new(QuizId::new(1), "Odd").with_question(question(1, 1, &[false]));
        let warnings = odd.ensure_valid().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, QuizIssueCode::NoCorrectOption);

        let broken = Quiz::new(QuizId::new(2), "Broken").with_question(question(1, 2, &[]));
        match broken.ensure_valid() {
            Err(DomainError::InvalidQuiz { quiz_id, reason }) => {
                assert_eq!(quiz_id, QuizId::new(2));
                assert_eq!(reason, "question has no options");
            }
            other => panic!("expected InvalidQuiz, got {:?}", other),
        }
    }

    #[test]
    fn issue_display_names_quiz_and_question() {
        let quiz = Quiz::new(QuizId::new(4), "Q").with_question(question(7, 4, &[false]));
        let issue = &quiz.validate()[0];
        assert!(issue.to_string().starts_with("quiz 4 question 7:"));
    }
}
