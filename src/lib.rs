pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod projections;
pub mod team_abbrev;
pub mod tui;

#[cfg(any(test, feature = "development"))]
pub mod dev;
