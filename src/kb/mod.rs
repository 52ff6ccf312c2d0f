//! Knowledge base: constraints, the inference engine, and its errors.

pub mod constraint;
pub mod engine;
pub mod error;

pub use constraint::Constraint;
pub use engine::KnowledgeBase;
pub use error::KnowledgeError;
