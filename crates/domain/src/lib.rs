//! Medicine Information Domain

/// Medicine lookup: query parsing, prompt, normalization
pub mod medicines;

/// Chat-completion port
pub mod completion;

/// Domain errors
pub mod errors;

pub use completion::{CompletionClient, CompletionRequest};
pub use errors::Error;
