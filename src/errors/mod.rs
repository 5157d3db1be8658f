//! Error types and error handling for the frontend.
//!
//! This module defines the syntax error types produced while parsing. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the classes of syntax error
//! - Error formatting and display functionality
//!
//! Errors are collected per parse, never raised as fatal aborts.

pub mod errors;
