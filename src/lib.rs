pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod format;
pub mod labels;
pub mod output;
pub mod utils;

#[cfg(test)]
mod tests;
