//! mindwell-flows
//!
//! Schema-validated prompt flows over a hosted generative model.

pub mod error;
pub mod flow;
pub mod flows;
pub mod model;
pub mod prompt;
