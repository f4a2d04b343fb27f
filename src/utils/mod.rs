//! Utils module - Shared utilities and helpers

/// Interactive line prompts
pub mod input;

/// Stderr logging helpers
pub mod logging;

/// Input validation utilities
pub mod validation;
