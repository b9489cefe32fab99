//! Command-line driver
//!
//! This module provides the `play` and `analyze` commands of the `noughts`
//! binary. Everything here is presentation: the board and the search engine
//! never print.

pub mod commands;
pub mod output;
