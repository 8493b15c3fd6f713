use std::fmt;

use non_empty_string::NonEmptyString;

/// Identifier of a [`Question`].
///
/// Managers allocate these sequentially from 1, but the wrapper accepts any
/// integer so that user-supplied references (including zero and negative
/// values) can be looked up and simply miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId(i64);

impl QuestionId {
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

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question posted to the board.
///
/// The title and description are stored exactly as entered, surrounding
/// whitespace included, and are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    title: NonEmptyString,
    description: NonEmptyString,
}

impl Question {
    pub(crate) const fn new(
        id: QuestionId,
        title: NonEmptyString,
        description: NonEmptyString,
    ) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    /// The question's identifier.
    #[must_use]
    pub const fn id(&self) -> QuestionId {
        self.id
    }

    /// The question's title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// The question's description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub(crate) fn set_title(&mut self, title: NonEmptyString) {
        self.title = title;
    }

    pub(crate) fn set_description(&mut self, description: NonEmptyString) {
        self.description = description;
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.id, self.title, self.description)
    }
}
