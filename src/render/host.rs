//! Registration of the parser into a MiniJinja environment.
//!
//! Nothing is installed implicitly: the host calls [`register`] (or
//! [`register_engine`] for a custom lexicon) while setting up its own
//! environment, after which templates can use:
//!
//! - `tw(classes, theme=none)` as a global function
//! - `classes | tw` or `classes | tw("dark")` as a filter
//!
//! Both return the style mapping as a map value.

use std::sync::Arc;

use minijinja::{Environment, Value};

use crate::engine::StyleEngine;

/// Registers the `tw` function and filter backed by the shared engine.
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
///
/// let mut env = Environment::new();
/// tailstyle::render::register(&mut env);
///
/// let out = env
///     .render_str(r#"{{ tw("flex rounded-xl").borderRadius }}"#, context! {})
///     .unwrap();
/// assert_eq!(out, "12");
/// ```
pub fn register(env: &mut Environment<'_>) {
    register_engine(env, StyleEngine::shared().clone());
}

/// Registers the `tw` function and filter backed by the given engine.
pub fn register_engine(env: &mut Environment<'_>, engine: StyleEngine) {
    let engine = Arc::new(engine);

    let function_engine = Arc::clone(&engine);
    env.add_function(
        "tw",
        move |classes: String, theme: Option<String>| -> Value {
            Value::from_serialize(function_engine.parse(&classes, theme.as_deref()))
        },
    );

    let filter_engine = engine;
    env.add_filter(
        "tw",
        move |classes: String, theme: Option<String>| -> Value {
            Value::from_serialize(filter_engine.parse(&classes, theme.as_deref()))
        },
    );
}
