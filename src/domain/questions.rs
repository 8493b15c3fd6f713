use std::collections::{BTreeMap, btree_map};

use thiserror::Error;

use super::{Question, QuestionId, non_blank};

/// Validation failures when posting a question.
///
/// The display text of each variant is the exact status line reported to the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddQuestionError {
    /// The title was empty or whitespace-only.
    #[error("Please provide a valid title.")]
    BlankTitle,
    /// The description was empty or whitespace-only.
    #[error("Description cannot be empty.")]
    BlankDescription,
}

/// An ordered, in-memory collection of questions.
///
/// Identifiers are allocated from a counter that starts at 1 and never goes
/// backwards, so deleting a question retires its identifier for the life of
/// the manager.
#[derive(Debug, Clone)]
pub struct QuestionManager {
    questions: BTreeMap<QuestionId, Question>,
    next_id: i64,
}

impl Default for QuestionManager {
    fn default() -> Self {
        Self {
            questions: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl QuestionManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a question and returns its newly allocated identifier.
    ///
    /// The title is validated before the description, and no identifier is
    /// allocated unless both pass, so a rejected submission leaves the
    /// counter untouched. Accepted input is stored verbatim, surrounding
    /// whitespace included.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or the description is blank.
    pub fn add(&mut self, title: &str, description: &str) -> Result<QuestionId, AddQuestionError> {
        let title = non_blank(title).ok_or(AddQuestionError::BlankTitle)?;
        let description = non_blank(description).ok_or(AddQuestionError::BlankDescription)?;

        let id = self.allocate_id();
        self.questions
            .insert(id, Question::new(id, title, description));
        tracing::debug!("Added question {id}");
        Ok(id)
    }

    /// Looks up a question by identifier.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    /// Returns an iterator over questions in ascending identifier order.
    ///
    /// Identifiers are allocated sequentially, so this is also insertion
    /// order.
    pub fn iter(&self) -> btree_map::Values<'_, QuestionId, Question> {
        self.questions.values()
    }

    /// The number of questions currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the collection holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Applies replacement fields to an existing question.
    ///
    /// A blank title or description leaves that field unchanged, so either
    /// field can be updated on its own.
    ///
    /// Returns `false` if no question has the given identifier.
    pub fn update(&mut self, id: QuestionId, title: &str, description: &str) -> bool {
        let Some(question) = self.questions.get_mut(&id) else {
            return false;
        };

        if let Some(title) = non_blank(title) {
            question.set_title(title);
        }
        if let Some(description) = non_blank(description) {
            question.set_description(description);
        }
        tracing::debug!("Updated question {id}");
        true
    }

    /// Removes a question.
    ///
    /// Returns `true` if the question existed and was removed. Answers that
    /// refer to the question are left alone; they keep their now-dangling
    /// question identifier.
    pub fn remove(&mut self, id: QuestionId) -> bool {
        let removed = self.questions.remove(&id).is_some();
        if removed {
            tracing::debug!("Removed question {id}");
        }
        removed
    }

    fn allocate_id(&mut self) -> QuestionId {
        let id = QuestionId::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).expect("question ID overflow!");
        id
    }
}

impl<'a> IntoIterator for &'a QuestionManager {
    type Item = &'a Question;
    type IntoIter = btree_map::Values<'a, QuestionId, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
