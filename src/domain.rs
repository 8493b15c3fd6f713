//! Domain models for the question-and-answer board.
//!
//! Questions and answers are flat records held by independent in-memory
//! managers. The only relation between them is the question identifier an
//! answer carries, which is stored without validation.

use non_empty_string::NonEmptyString;

/// Question record and identifier.
pub mod question;
pub use question::{Question, QuestionId};

/// Answer record and identifier.
pub mod answer;
pub use answer::{Answer, AnswerId};

/// Question collection and its validation errors.
pub mod questions;
pub use questions::{AddQuestionError, QuestionManager};

/// Answer collection and its validation errors.
pub mod answers;
pub use answers::{AddAnswerError, AnswerManager};

/// Whether user input counts as blank (empty or whitespace-only).
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Converts user input into a stored field value, treating blank input as
/// absent.
///
/// The returned string is the input exactly as supplied; surrounding
/// whitespace is preserved, not trimmed.
pub(crate) fn non_blank(text: &str) -> Option<NonEmptyString> {
    if is_blank(text) {
        None
    } else {
        NonEmptyString::new(text.to_string()).ok()
    }
}
