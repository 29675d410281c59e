//! mindsupport-chat
//!
//! The scripted support companion: crisis keyword detection, canned
//! topic replies, and the conversation transcript that ties them together.
//!
//! Crisis detection here is a keyword heuristic. It misses phrasings not
//! in its list and flags innocent text that happens to contain a keyword;
//! it must never be treated as a safety guarantee.

pub mod config;
pub mod conversation;
pub mod crisis;
pub mod error;
pub mod responder;
