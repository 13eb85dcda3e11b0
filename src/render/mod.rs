//! Rendering targets beyond the plain mapping.
//!
//! - [`register`] / [`register_engine`]: expose the parser to MiniJinja
//!   templates as a `tw` function and filter
//! - [`console_style`] / [`term_style`]: turn a mapping into a terminal style

mod host;
mod term;

pub use host::{register, register_engine};
pub use term::{console_style, term_style};
