//! # Weir Support
//!
//! Shared utilities for the Weir DI runtime.
//!
//! This crate provides:
//! - Type-name rendering for error messages
//! - "Did you mean?" suggestion scoring

pub mod rendering;
