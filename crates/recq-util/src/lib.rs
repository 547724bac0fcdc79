//! recq-util - Foundation types shared by the recq toolchain.
//!
//! This crate holds the pieces that every phase needs and that carry no
//! language knowledge of their own:
//!
//! - [`span`] - byte/line/column source locations
//! - [`diagnostic`] - diagnostics, their codes, and the [`Handler`] that collects them
//!
//! # Example
//!
//! ```
//! use recq_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;
