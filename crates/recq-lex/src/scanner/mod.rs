//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct, dispatch and iteration
//! - `comment` - Whitespace and block comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
