//! The individual flows.
//!
//! Each module defines the flow's typed input and output, its
//! [`Flow`](crate::flow::Flow) implementation, and a convenience function
//! that validates input and unwraps the run.

pub mod categorize;
pub mod counselor;
pub mod insights;
pub mod sentiment;
pub mod stress;
pub mod wellness_tools;
