//! mindwell-core
//!
//! Records as the document store holds them, per-user collection paths,
//! the signed-in session, form checks and the notices a student sees.

pub mod error;
pub mod models;
pub mod notice;
pub mod paths;
pub mod session;
pub mod validate;
