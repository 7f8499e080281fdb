// Process-level services: log file locations, tracing setup, terminal modes

pub mod log_dirs;
pub mod terminal_modes;
pub mod tracing_setup;
