pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod messages;
