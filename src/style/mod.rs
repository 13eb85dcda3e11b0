//! Output types of the engine.
//!
//! - [`StyleMapping`]: property name to value mapping returned by a parse
//! - [`StyleValue`]: a string, number, flag, or nested breakpoint mapping
//! - [`Property`]: the typed property names the rules write

mod mapping;
mod property;
mod value;

pub use mapping::StyleMapping;
pub use property::Property;
pub use value::StyleValue;
