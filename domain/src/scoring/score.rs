//! Score computation.

use crate::quiz::entities::Quiz;
use crate::session::result::UserAnswer;
use serde::{Deserialize, Serialize};

/// Correct count, total and rounded percentage of one attempt (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
    /// `round(correct / total * 100)`, half away from zero; 0 when `total` is 0
    pub percentage: u32,
}

impl Score {
    pub fn new(correct: u32, total: u32) -> Self {
        Self {
            correct,
            total,
            percentage: percentage(correct, total),
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({}%)", self.correct, self.total, self.percentage)
    }
}

fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (correct, total) = (u64::from(correct), u64::from(total));
    ((200 * correct + total) / (2 * total)) as u32
}

/// Presentation band of a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsPractice,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => ScoreBand::Excellent,
            60..80 => ScoreBand::Good,
            40..60 => ScoreBand::Fair,
            _ => ScoreBand::NeedsPractice,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent!",
            ScoreBand::Good => "Good job!",
            ScoreBand::Fair => "Not bad",
            ScoreBand::NeedsPractice => "Keep practicing",
        }
    }
}

/// Score `answers` against the revealing view of `quiz`.
///
/// A question counts as correct only when an answer exists for it and names
/// the question's correct option. Unanswered questions and questions without
/// a correct option are incorrect. Answers for questions not in the quiz are
/// ignored.
pub fn calculate_score(quiz: &Quiz, answers: &[UserAnswer]) -> Score {
    let correct = quiz
        .questions
        .iter()
        .filter(|question| {
            let Some(correct) = question.correct_option() else {
                return false;
            };
            answers
                .iter()
                .find(|a| a.question_id == question.id)
                .is_some_and(|a| a.selected_option_id == correct.id)
        })
        .count();

    Score::new(correct as u32, quiz.questions.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::entities::{Question, QuizOption};
    use crate::quiz::value_objects::{OptionId, QuestionId, QuizId};

    /// Three questions; the correct option of question `n` is `n * 10 + 1`.
    fn revealed_quiz() -> Quiz {
        let quiz_id = QuizId::new(1);
        let mut quiz = Quiz::new(quiz_id, "Scored");
        for n in 1..=3 {
            let qid = QuestionId::new(n);
            quiz = quiz.with_question(
                Question::new(qid, quiz_id, format!("q{}", n))
                    .with_option(QuizOption::new(OptionId::new(n * 10 + 1), qid, "right").correct())
                    .with_option(QuizOption::new(OptionId::new(n * 10 + 2), qid, "wrong")),
            );
        }
        quiz
    }

    fn answer(question: u32, option: u32) -> UserAnswer {
        UserAnswer::new(QuestionId::new(question), OptionId::new(option))
    }

    #[test]
    fn two_of_three_is_sixty_seven_percent() {
        let answers = [answer(1, 11), answer(2, 21), answer(3, 32)];
        let score = calculate_score(&revealed_quiz(), &answers);
        assert_eq!(score, Score { correct: 2, total: 3, percentage: 67 });
    }

    #[test]
    fn unanswered_questions_are_incorrect() {
        let score = calculate_score(&revealed_quiz(), &[answer(2, 21)]);
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 3);
        assert_eq!(score.percentage, 33);
    }

    #[test]
    fn no_answers_scores_zero() {
        let score = calculate_score(&revealed_quiz(), &[]);
        assert_eq!(score, Score::new(0, 3));
        assert_eq!(score.percentage, 0);
    }

    #[test]
    fn empty_quiz_scores_zero_without_dividing() {
        let quiz = Quiz::new(QuizId::new(9), "Empty");
        assert_eq!(calculate_score(&quiz, &[answer(1, 11)]), Score::new(0, 0));
        assert_eq!(Score::new(0, 0).percentage, 0);
    }

    #[test]
    fn question_without_correct_option_is_never_correct() {
        let mut quiz = revealed_quiz();
        for option in &mut quiz.questions[0].options {
            option.is_correct = false;
        }
        let answers = [answer(1, 11), answer(2, 21), answer(3, 31)];
        assert_eq!(calculate_score(&quiz, &answers).correct, 2);
    }

    #[test]
    fn public_view_scores_nothing() {
        use crate::quiz::projection::AnswerVisibility;
        let hidden = revealed_quiz().project(AnswerVisibility::Hidden);
        let answers = [answer(1, 11), answer(2, 21), answer(3, 31)];
        assert_eq!(calculate_score(&hidden, &answers).correct, 0);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let answers = [answer(1, 11), answer(77, 771)];
        let score = calculate_score(&revealed_quiz(), &answers);
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 3);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(Score::new(1, 8).percentage, 13); // 12.5
        assert_eq!(Score::new(1, 3).percentage, 33);
        assert_eq!(Score::new(5, 6).percentage, 83);
        assert_eq!(Score::new(10, 10).percentage, 100);
    }

    #[test]
    fn bands() {
        assert_eq!(ScoreBand::from_percentage(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(40), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_percentage(39), ScoreBand::NeedsPractice);
        assert_eq!(ScoreBand::from_percentage(0), ScoreBand::NeedsPractice);
    }

    #[test]
    fn display() {
        assert_eq!(Score::new(2, 3).to_string(), "2/3 (67%)");
    }
}
