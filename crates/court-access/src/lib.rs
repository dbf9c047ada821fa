//! Interactive court accommodation tools: a rules-based accommodation
//! calculator with a request-letter composer, a scripted decision navigator,
//! and a scored quiz, plus the HTTP routers and session service that expose
//! them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tools;
