use std::collections::{BTreeMap, btree_map};

use thiserror::Error;

use super::{Answer, AnswerId, QuestionId, is_blank};

/// Validation failure when posting an answer.
///
/// The display text is the exact status line reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddAnswerError {
    /// The answer text was empty or whitespace-only.
    #[error("Answer cannot be empty.")]
    BlankText,
}

/// An ordered, in-memory collection of answers.
///
/// Identifier allocation mirrors [`QuestionManager`]: a counter starting at
/// 1, never rewound. The two counters are independent, so a question and an
/// answer can share a number.
///
/// [`QuestionManager`]: super::QuestionManager
#[derive(Debug, Clone)]
pub struct AnswerManager {
    answers: BTreeMap<AnswerId, Answer>,
    next_id: i64,
}

impl Default for AnswerManager {
    fn default() -> Self {
        Self {
            answers: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl AnswerManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts an answer to the given question and returns its identifier.
    ///
    /// The question identifier is stored as-is. It is never checked against
    /// the question collection, so unknown, zero, and negative references
    /// are all accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is blank.
    pub fn add(&mut self, question: QuestionId, text: &str) -> Result<AnswerId, AddAnswerError> {
        if is_blank(text) {
            return Err(AddAnswerError::BlankText);
        }

        let id = self.allocate_id();
        self.answers
            .insert(id, Answer::new(id, question, text.to_string()));
        tracing::debug!("Added answer {id} for question {question}");
        Ok(id)
    }

    /// Looks up an answer by identifier.
    #[must_use]
    pub fn get(&self, id: AnswerId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    /// Returns an iterator over every answer in ascending identifier order.
    pub fn iter(&self) -> btree_map::Values<'_, AnswerId, Answer> {
        self.answers.values()
    }

    /// Returns the answers attached to one question, in ascending answer
    /// identifier order.
    ///
    /// This scans the whole collection; there is no per-question index.
    pub fn for_question(&self, question: QuestionId) -> impl Iterator<Item = &Answer> {
        self.answers
            .values()
            .filter(move |answer| answer.question() == question)
    }

    /// The number of answers currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the collection holds no answers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Replaces the text of an existing answer.
    ///
    /// Unlike question updates, the replacement is applied unconditionally:
    /// blank text overwrites the answer rather than being ignored.
    ///
    /// Returns `false` if no answer has the given identifier.
    pub fn update(&mut self, id: AnswerId, text: &str) -> bool {
        let Some(answer) = self.answers.get_mut(&id) else {
            return false;
        };
        answer.set_text(text.to_string());
        tracing::debug!("Updated answer {id}");
        true
    }

    /// Removes an answer.
    ///
    /// Returns `true` if the answer existed and was removed.
    pub fn remove(&mut self, id: AnswerId) -> bool {
        let removed = self.answers.remove(&id).is_some();
        if removed {
            tracing::debug!("Removed answer {id}");
        }
        removed
    }

    fn allocate_id(&mut self) -> AnswerId {
        let id = AnswerId::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).expect("answer ID overflow!");
        id
    }
}

impl<'a> IntoIterator for &'a AnswerManager {
    type Item = &'a Answer;
    type IntoIter = btree_map::Values<'a, AnswerId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::QuestionManager;

    #[test]
    fn add_assigns_sequential_ids_from_one() {
        let mut answers = AnswerManager::new();
        let first = answers.add(QuestionId::new(1), "a").unwrap();
        let second = answers.add(QuestionId::new(9), "b").unwrap();
        assert_eq!(first, AnswerId::new(1));
        assert_eq!(second, AnswerId::new(2));
    }

    #[test_case(""; "empty")]
    #[test_case("  "; "spaces")]
    #[test_case("\t"; "tab")]
    fn add_rejects_blank_text(text: &str) {
        let mut answers = AnswerManager::new();
        assert_eq!(
            answers.add(QuestionId::new(1), text),
            Err(AddAnswerError::BlankText)
        );
        assert!(answers.is_empty());
    }

    #[test]
    fn add_does_not_validate_the_question_reference() {
        let mut answers = AnswerManager::new();
        assert!(answers.add(QuestionId::new(999), "fine").is_ok());
        assert!(answers.add(QuestionId::new(-5), "also fine").is_ok());
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn add_accepts_the_id_of_a_deleted_question() {
        let mut questions = QuestionManager::new();
        let mut answers = AnswerManager::new();
        let question = questions.add("t", "d").unwrap();
        assert!(questions.remove(question));

        let answer = answers.add(question, "late").unwrap();
        assert_eq!(answers.get(answer).unwrap().question(), question);
        assert_eq!(answers.for_question(question).count(), 1);
    }

    #[test]
    fn answer_ids_are_independent_of_question_ids() {
        let mut questions = QuestionManager::new();
        let mut answers = AnswerManager::new();
        let question = questions.add("t", "d").unwrap();
        let answer = answers.add(question, "text").unwrap();
        assert_eq!(question.get(), 1);
        assert_eq!(answer.get(), 1);
    }

    #[test]
    fn for_question_filters_and_keeps_order() {
        let mut answers = AnswerManager::new();
        answers.add(QuestionId::new(1), "first").unwrap();
        answers.add(QuestionId::new(2), "other").unwrap();
        answers.add(QuestionId::new(1), "second").unwrap();
        let texts: Vec<_> = answers
            .for_question(QuestionId::new(1))
            .map(Answer::text)
            .collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn for_question_is_empty_for_an_unknown_question() {
        let mut answers = AnswerManager::new();
        answers.add(QuestionId::new(1), "a").unwrap();
        assert_eq!(answers.for_question(QuestionId::new(2)).count(), 0);
    }

    #[test]
    fn iter_returns_insertion_order_across_questions() {
        let mut answers = AnswerManager::new();
        answers.add(QuestionId::new(2), "b").unwrap();
        answers.add(QuestionId::new(1), "a").unwrap();
        answers.add(QuestionId::new(2), "c").unwrap();

        let ids: Vec<_> = answers.iter().map(Answer::id).collect();
        assert_eq!(ids, [AnswerId::new(1), AnswerId::new(2), AnswerId::new(3)]);

        let mut texts = Vec::new();
        for answer in &answers {
            texts.push(answer.text());
        }
        assert_eq!(texts, ["b", "a", "c"]);
    }

    #[test]
    fn update_replaces_text_even_with_blank_input() {
        let mut answers = AnswerManager::new();
        let id = answers.add(QuestionId::new(1), "first draft").unwrap();
        assert!(answers.update(id, "   "));
        assert_eq!(answers.get(id).unwrap().text(), "   ");
    }

    #[test]
    fn update_unknown_id_returns_false() {
        let mut answers = AnswerManager::new();
        assert!(!answers.update(AnswerId::new(1), "text"));
    }

    #[test]
    fn remove_reports_whether_the_answer_existed() {
        let mut answers = AnswerManager::new();
        let id = answers.add(QuestionId::new(1), "a").unwrap();
        assert!(answers.remove(id));
        assert!(!answers.remove(id));
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut answers = AnswerManager::new();
        let first = answers.add(QuestionId::new(1), "a").unwrap();
        answers.remove(first);
        let second = answers.add(QuestionId::new(1), "b").unwrap();
        assert_eq!(second, AnswerId::new(2));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn error_display_matches_the_reported_status_line() {
        assert_eq!(AddAnswerError::BlankText.to_string(), "Answer cannot be empty.");
    }
}
