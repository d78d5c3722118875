//! cliniq-dialogue
//!
//! Fallback conversation service for messages no local intent claims.

pub mod error;
pub mod http;
pub mod interpretation;

pub use http::{DialogueConfig, HttpDialogueClient};
pub use interpretation::Interpretation;

use crate::error::DialogueError;

/// A hosted service that maps free text to an action tag and a reply.
pub trait DialogueService {
    fn interpret(&self, text: &str) -> Result<Interpretation, DialogueError>;
}

/// Stand-in used when no dialogue service is configured. Every call fails
/// with [`DialogueError::Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineDialogue;

impl DialogueService for OfflineDialogue {
    fn interpret(&self, _text: &str) -> Result<Interpretation, DialogueError> {
        Err(DialogueError::Config(
            "dialogue service is not configured".to_string(),
        ))
    }
}

impl<T: DialogueService + ?Sized> DialogueService for &T {
    fn interpret(&self, text: &str) -> Result<Interpretation, DialogueError> {
        (**self).interpret(text)
    }
}

impl<T: DialogueService + ?Sized> DialogueService for Box<T> {
    fn interpret(&self, text: &str) -> Result<Interpretation, DialogueError> {
        (**self).interpret(text)
    }
}
