// src/lib.rs
// Library interface for scope-hound
pub mod cli;
pub mod config;
pub mod feed;
pub mod filter;
pub mod output;
pub mod platforms;
pub mod progress;
pub mod prompt;
pub mod record;
