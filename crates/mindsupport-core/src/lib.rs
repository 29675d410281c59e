//! mindsupport-core
//!
//! Pure domain types shared by the screening and chat crates. No I/O;
//! this is the vocabulary the portal frontend and the CLI agree on.

pub mod error;
pub mod models;
