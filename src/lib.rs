pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod parse;
pub mod report;
pub mod stats;
pub mod youtube;
