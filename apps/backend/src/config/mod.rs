//! Runtime configuration read from the environment.

pub mod rules;

pub use rules::RulesConfig;
