//! cliniq-router
//!
//! Decides what to do with one inbound message: show usage, report terms
//! co-occurring with a keyword, draw a term-frequency chart, or hand the
//! message to the dialogue service.

pub mod context;
pub mod effect;
pub mod error;
pub mod help;
pub mod reply;
pub mod router;

pub use context::RequestContext;
pub use reply::{ImageUrlPattern, OutboundReply, format_reply};
pub use router::{Router, Services};
