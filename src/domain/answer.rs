use std::fmt;

use super::QuestionId;

/// Identifier of an [`Answer`].
///
/// Allocated independently of question identifiers, so an answer and a
/// question may share the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnswerId(i64);

impl AnswerId {
    /// Wraps a raw numeric identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An answer to a question.
///
/// The link to the question is a plain identifier. It is never checked
/// against the question collection, so an answer can refer to a question
/// that was deleted or never existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    id: AnswerId,
    question: QuestionId,
    text: String,
}

impl Answer {
    pub(crate) const fn new(id: AnswerId, question: QuestionId, text: String) -> Self {
        Self { id, question, text }
    }

    /// The answer's identifier.
    #[must_use]
    pub const fn id(&self) -> AnswerId {
        self.id
    }

    /// The identifier of the question this answer refers to.
    #[must_use]
    pub const fn question(&self) -> QuestionId {
        self.question
    }

    /// The answer text.
    ///
    /// May be empty or whitespace-only after an update, since replacement
    /// text is applied unconditionally.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Answer {} for Question {}] {}",
            self.id, self.question, self.text
        )
    }
}
