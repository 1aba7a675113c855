pub mod benchmark;
pub mod cli;
pub mod config;
pub mod corrections;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod ident;
pub mod index;
pub mod loader;
pub mod reporting;
pub mod score;
pub mod soundness;
pub mod types;
