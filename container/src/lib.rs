//! # Wirebox
//!
//! A dynamic, thread-safe dependency injection container for Rust.
//!
//! Wirebox stores values indexed by their type, resolves missing values
//! lazily through registered provider functions, injects resolved values into
//! marked struct fields, and calls functions by auto-supplying their
//! arguments. Registration is dynamic: services can be added at any point in
//! the application's lifecycle, from any thread.
//!
//! ## Core Concepts
//!
//! - **Bindings**: already-resolved values, stored under their type. The last
//!   registration for a type wins.
//! - **Providers**: lazy producers invoked at most once, on first demand.
//!   A provider's own parameters are resolved through the container, so
//!   providers compose transitively.
//! - **Interfaces**: values can be bound directly under a trait-object type,
//!   or declared as implementations of one and discovered during resolution.
//! - **Hierarchy**: a container can delegate to a parent container when it
//!   cannot satisfy a request locally.
//! - **Injection & invocation**: `#[derive(Injectable)]` fills marked struct
//!   fields from the container, and [`Container::invoke`] calls a function
//!   with resolved arguments.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use wirebox::Container;
//!
//! // Define a trait and a concrete implementation.
//! trait Greeter: Send + Sync {
//!   fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter {
//!   message: String,
//! }
//!
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     self.message.clone()
//!   }
//! }
//!
//! let container = Container::new();
//!
//! // Bind a ready value under its own type.
//! container.bind(String::from("Hello, World!"));
//!
//! // Register a lazy provider for the greeter interface. Its parameter is
//! // resolved through the container when it first runs.
//! container.provide_as::<dyn Greeter, _, _>(|message: Arc<String>| -> Arc<dyn Greeter> {
//!   Arc::new(EnglishGreeter { message: (*message).clone() })
//! });
//!
//! // Call a function with auto-supplied arguments.
//! let report = container
//!   .invoke(|greeter: Arc<dyn Greeter>| greeter.greet())
//!   .unwrap();
//! assert_eq!(report, "Hello, World!");
//! ```

mod callable;
mod container;
mod core;
mod error;
mod inject;
mod key;
mod macros;

pub use callable::{Callable, MultiOutput};
pub use container::Container;
pub use error::ResolveError;
pub use inject::Injectable;
pub use key::{TypeKey, Value};

#[cfg(feature = "derive")]
pub use wirebox_derive::Injectable;
