//! Subcommand implementations.

pub mod check;
pub mod listing;
pub mod publish;
pub mod sign;
