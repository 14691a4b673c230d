pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod list;
pub mod reader;
pub mod search;
