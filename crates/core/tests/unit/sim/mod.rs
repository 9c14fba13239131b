/// Program text validation and file loading.
pub mod loader;

/// Driver loop, tick sources, and run outcomes.
pub mod simulator;
