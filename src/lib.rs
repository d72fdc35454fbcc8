//! FLAMES
//!
//! Deterministic FLAMES evaluation: cross out the letters two names share,
//! count what is left, and eliminate letters from F-L-A-M-E-S until one remains.
//!
//! # Quick Start
//!
//! ```rust
//! use flames::core::FlamesLetter;
//! use flames::engine::compute_flames;
//!
//! let result = compute_flames("Naren", "Priya");
//! assert_eq!(result.remainder_count, 6);
//! assert_eq!(result.result, FlamesLetter::M);
//! println!("{}", result.relationship.label);
//! ```

// Core domain types
pub mod core;

// Matching, counting and elimination
pub mod engine;

// Manual cross-out mode
pub mod manual;

// Input validation
pub mod validation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
