use std::sync::Arc;

use wirebox::{implements, Container};

// --- Test Fixtures ---

trait Greeter: Send + Sync {
  fn greet(&self) -> String;
}

struct EnglishGreeter;
impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}

struct GermanGreeter;
impl Greeter for GermanGreeter {
  fn greet(&self) -> String {
    "Hallo!".to_string()
  }
}

// --- Interface Scan Tests ---

#[test]
fn test_declared_implementation_is_discovered() {
  // Arrange: the value is bound under its own concrete type only; the
  // interface is reachable through the declaration.
  let container = Container::new();
  container.bind(EnglishGreeter);
  container.declare_impl::<EnglishGreeter, dyn Greeter>(|greeter| greeter);

  // Act
  let greeter = container.resolve::<dyn Greeter>().unwrap();

  // Assert
  assert_eq!(greeter.greet(), "Hello!");
}

#[test]
fn test_implements_macro_writes_the_upcast() {
  let container = Container::new();
  container.bind(GermanGreeter);
  implements!(container, GermanGreeter: Greeter);

  assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "Hallo!");
}

#[test]
fn test_direct_interface_binding_wins_over_scan() {
  // Arrange: both a direct binding for the interface and a declared
  // implementation with a bound concrete type.
  let container = Container::new();
  container.bind(GermanGreeter);
  implements!(container, GermanGreeter: Greeter);
  container.bind_as::<dyn Greeter>(Arc::new(EnglishGreeter));

  // Act & Assert: the direct binding is cheaper and takes priority.
  assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "Hello!");
}

#[test]
fn test_scan_follows_declaration_order() {
  // Two bound implementations for the same interface: the first declared one
  // is served.
  let container = Container::new();
  container.bind(EnglishGreeter);
  container.bind(GermanGreeter);
  implements!(container, GermanGreeter: Greeter);
  implements!(container, EnglishGreeter: Greeter);

  assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "Hallo!");
}

#[test]
fn test_declaration_before_binding_is_honored_later() {
  // Declarations are standing relations, not snapshots: a concrete type
  // bound after the declaration still satisfies the interface.
  let container = Container::new();
  implements!(container, EnglishGreeter: Greeter);

  assert!(container.get::<dyn Greeter>().is_none());

  container.bind(EnglishGreeter);
  assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "Hello!");
}

#[test]
fn test_scan_sees_only_materialized_bindings() {
  // A pending provider for a declared concrete type is not invoked on the
  // interface's behalf; only step-one bindings participate in the scan.
  let container = Container::new();
  container.provide(|| EnglishGreeter);
  implements!(container, EnglishGreeter: Greeter);

  assert!(container.get::<dyn Greeter>().is_none());

  // Resolving the concrete type materializes the binding, after which the
  // scan can find it.
  let _ = container.resolve::<EnglishGreeter>().unwrap();
  assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "Hello!");
}

#[test]
fn test_interface_scan_falls_back_to_parent() {
  // The local scan runs before parent delegation; when nothing local
  // satisfies the interface, the parent runs its own full algorithm.
  let parent = Arc::new(Container::new());
  parent.bind(GermanGreeter);
  implements!(parent, GermanGreeter: Greeter);

  let child = Container::new();
  child.set_parent(&parent);

  assert_eq!(child.resolve::<dyn Greeter>().unwrap().greet(), "Hallo!");
}
