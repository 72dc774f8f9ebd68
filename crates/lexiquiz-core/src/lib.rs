//! lexiquiz-core — Translation loading, answer matching, and the quiz engine.
//!
//! This crate defines the data model and quiz logic that the store and CLI
//! crates build on. Persistence is reached only through the traits in
//! [`traits`], so the engine can be driven against in-memory doubles.

pub mod console;
pub mod engine;
pub mod error;
pub mod matching;
pub mod mock;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod traits;

pub use error::LoadError;
pub use model::{Direction, ProgressRecord, Question, TranslationEntry};
