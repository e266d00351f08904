//! Answer-hiding projection.
//!
//! A quiz is exposed in two shapes that differ only in the `is_correct`
//! flags: the public view forces every flag to `false`, the revealing view
//! keeps them as authored.

use super::entities::Quiz;

/// Whether a projection keeps the correctness flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerVisibility {
    /// Every option reports `is_correct = false`
    #[default]
    Hidden,
    /// Options report their authored flag
    Revealed,
}

impl AnswerVisibility {
    pub fn reveals(self) -> bool {
        matches!(self, AnswerVisibility::Revealed)
    }
}

impl From<bool> for AnswerVisibility {
    fn from(reveal_answers: bool) -> Self {
        if reveal_answers {
            AnswerVisibility::Revealed
        } else {
            AnswerVisibility::Hidden
        }
    }
}

impl Quiz {
    /// Project a borrowed quiz.
    pub fn project(&self, visibility: AnswerVisibility) -> Quiz {
        self.clone().into_projection(visibility)
    }

    /// Project an owned quiz in place.
    pub fn into_projection(mut self, visibility: AnswerVisibility) -> Quiz {
        if !visibility.reveals() {
            for option in self.questions.iter_mut().flat_map(|q| q.options.iter_mut()) {
                option.is_correct = false;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::entities::{Question, QuizOption};
    use crate::quiz::value_objects::{OptionId, QuestionId, QuizId};

    /// Two questions with deliberately odd authoring: one with two correct
    /// options, one with none.
    fn authored_quiz() -> Quiz {
        let quiz_id = QuizId::new(1);
        let q1 = QuestionId::new(1);
        let q2 = QuestionId::new(2);
        Quiz::new(quiz_id, "Mixed")
            .with_description("desc")
            .with_question(
                Question::new(q1, quiz_id, "first")
                    .with_option(QuizOption::new(OptionId::new(1), q1, "a").correct())
                    .with_option(QuizOption::new(OptionId::new(2), q1, "b").correct())
                    .with_option(QuizOption::new(OptionId::new(3), q1, "c")),
            )
            .with_question(
                Question::new(q2, quiz_id, "second")
                    .with_option(QuizOption::new(OptionId::new(4), q2, "d"))
                    .with_option(QuizOption::new(OptionId::new(5), q2, "e")),
            )
    }

    #[test]
    fn test_hidden_projection_clears_every_flag() {
        let public = authored_quiz().project(AnswerVisibility::Hidden);
        assert!(
            public
                .questions
                .iter()
                .flat_map(|q| &q.options)
                .all(|o| !o.is_correct)
        );
    }

    #[test]
    fn test_revealed_projection_preserves_flags() {
        let original = authored_quiz();
        let revealed = original.project(AnswerVisibility::Revealed);
        assert_eq!(revealed, original);
    }

    #[test]
    fn test_projection_leaves_other_fields_untouched() {
        let original = authored_quiz();
        let public = original.project(AnswerVisibility::Hidden);

        assert_eq!(public.id, original.id);
        assert_eq!(public.title, original.title);
        assert_eq!(public.description, original.description);
        for (p, o) in public.questions.iter().zip(&original.questions) {
            assert_eq!(p.id, o.id);
            assert_eq!(p.quiz_id, o.quiz_id);
            assert_eq!(p.question_text, o.question_text);
            let p_opts: Vec<_> = p.options.iter().map(|x| (x.id, &x.option_text)).collect();
            let o_opts: Vec<_> = o.options.iter().map(|x| (x.id, &x.option_text)).collect();
            assert_eq!(p_opts, o_opts);
        }
    }

    #[test]
    fn test_projection_of_empty_quiz() {
        let empty = Quiz::new(QuizId::new(9), "Nothing yet");
        assert_eq!(empty.project(AnswerVisibility::Hidden), empty);
        assert_eq!(empty.project(AnswerVisibility::Revealed), empty);
    }

    #[test]
    fn test_visibility_from_bool() {
        assert_eq!(AnswerVisibility::from(true), AnswerVisibility::Revealed);
        assert_eq!(AnswerVisibility::from(false), AnswerVisibility::Hidden);
        assert_eq!(AnswerVisibility::default(), AnswerVisibility::Hidden);
    }
}
