pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod persist;
pub mod resolve;
pub mod settings;
pub mod theme;
pub mod view;
