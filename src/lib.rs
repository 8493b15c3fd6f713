//! In-memory Student Q&A Management
//!
//! Questions and answers are flat records in ordered collections. Nothing is
//! persisted: every collection lives and dies with the process.

pub mod domain;
pub use domain::{
    AddAnswerError, AddQuestionError, Answer, AnswerId, AnswerManager, Question, QuestionId,
    QuestionManager,
};
