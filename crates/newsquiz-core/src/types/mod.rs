//! Core types for the quiz pipeline

pub mod document;
pub mod fact;
pub(crate) mod lenient;
pub mod question;
pub mod result;

pub use document::{DocumentMetadata, SourceDocument, SourceKind};
pub use fact::Fact;
pub use question::{Question, QuestionType};
pub use result::{QuestionResult, QuizResult, QuizSubmission};
