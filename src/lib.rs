// ABOUTME: Library root for content-studio: re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod logging;
pub mod studio;
pub mod styles;
pub mod tui;
