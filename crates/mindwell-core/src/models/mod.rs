pub mod chat;
pub mod forum;
pub mod gamification;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod mood;
pub mod safety;
pub mod schedule;
pub mod token_count;
