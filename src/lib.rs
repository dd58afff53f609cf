//! Terminal browser for the Rick and Morty character API.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
