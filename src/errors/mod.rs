//! Error types and diagnostic reporting for the front end.
//!
//! This module defines:
//!
//! - Error structures with source position information
//! - Specific error variants for the scanning and parsing phases
//! - Helpful error names and suggestions for rendering
//! - The diagnostic sink that scanner warnings and parse failures are reported on

pub mod diagnostics;
pub mod errors;
