pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod haplogroup;
pub mod provider;
pub mod report;
pub mod types;

pub use error::TreeError;
