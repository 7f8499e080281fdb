// Viewer library - exposes all core modules for testing

pub mod app;
pub mod config;
pub mod listing;
pub mod services;
pub mod tree;
pub mod view;
