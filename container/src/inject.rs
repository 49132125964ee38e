//! Struct field injection.

use crate::container::Container;
use crate::error::ResolveError;

/// A record whose marked fields can be populated from a container.
///
/// Usually implemented through `#[derive(Injectable)]`, which assigns
/// `container.resolve::<T>()?` into every field marked `#[inject]`, in
/// declaration order. Unmarked fields are left untouched, and a struct with no
/// marked fields injects as a no-op success.
///
/// ```
/// use std::sync::Arc;
/// use wirebox::{Container, Injectable};
///
/// #[derive(Injectable)]
/// struct Handler {
///   #[inject]
///   greeting: Arc<String>,
///   hits: u64,
/// }
///
/// let container = Container::new();
/// container.bind(String::from("hi"));
///
/// let mut handler = Handler { greeting: Arc::new(String::new()), hits: 0 };
/// container.apply(&mut handler).unwrap();
/// assert_eq!(*handler.greeting, "hi");
/// assert_eq!(handler.hits, 0);
/// ```
pub trait Injectable {
  /// Resolves and assigns every marked field in place.
  ///
  /// Fails fast on the first unresolvable field; fields assigned before the
  /// failure keep their new values.
  fn inject(&mut self, container: &Container) -> Result<(), ResolveError>;
}
