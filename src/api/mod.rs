//! API module
//!
//! Route tables and request handlers for the lab servers

pub mod directory;
pub mod greeting;
pub mod login;
