//! Public macros for ergonomic resolution and interface declarations.

/// Resolves a service from a container, panicking if it is missing.
///
/// # Panics
///
/// Panics if the service cannot be resolved. For a non-panicking version, use
/// [`maybe_resolve!`](crate::maybe_resolve) or `container.get(..)` directly.
///
/// # Examples
///
/// ```
/// use wirebox::{resolve, Container};
///
/// let container = Container::new();
/// container.bind(String::from("hello"));
///
/// let message = resolve!(container, String);
/// assert_eq!(*message, "hello");
/// ```
///
/// ```
/// use std::sync::Arc;
/// use wirebox::{resolve, Container};
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let container = Container::new();
/// container.bind_as::<dyn Greeter>(Arc::new(EnglishGreeter));
///
/// let greeter = resolve!(container, trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  // Arm for resolving a concrete type: resolve!(container, MyService)
  ($container:expr, $ty:ty) => {
    $container
      .resolve::<$ty>()
      .unwrap_or_else(|err| panic!("Failed to resolve required service: {}", err))
  };

  // Arm for resolving a trait object: resolve!(container, trait MyTrait)
  // We use `:ident` to capture the trait's name and construct `dyn Trait`
  // inside the expansion.
  ($container:expr, trait $trait_ident:ident) => {
    $container
      .resolve::<dyn $trait_ident>()
      .unwrap_or_else(|err| panic!("Failed to resolve required trait service: {}", err))
  };
}

/// Resolves a service from a container, returning `None` if it is missing.
#[macro_export]
macro_rules! maybe_resolve {
  ($container:expr, $ty:ty) => {
    $container.get::<$ty>()
  };

  ($container:expr, trait $trait_ident:ident) => {
    $container.get::<dyn $trait_ident>()
  };
}

/// Declares that a concrete type satisfies a trait, writing the upcast
/// function for [`Container::declare_impl`](crate::Container::declare_impl).
///
/// # Examples
///
/// ```
/// use wirebox::{implements, Container};
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let container = Container::new();
/// container.bind(EnglishGreeter);
/// implements!(container, EnglishGreeter: Greeter);
///
/// assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! implements {
  ($container:expr, $concrete:ty : $trait_ident:ident) => {
    $container.declare_impl::<$concrete, dyn $trait_ident>(|value| value)
  };
}
