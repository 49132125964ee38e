use std::sync::Arc;

use wirebox::{Container, ResolveError, TypeKey};

// --- Test Fixtures ---

// The trait must be Send + Sync for the container to accept it.
trait Greeter: Send + Sync {
  fn greet(&self) -> String;
}

struct EnglishGreeter;
impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}

// A simple struct for testing.
#[derive(Debug, PartialEq, Eq)]
struct SimpleService {
  id: u32,
}

// --- Basic Tests ---

#[test]
fn test_bind_and_resolve_identity() {
  // Arrange
  let container = Container::new();
  container.bind(SimpleService { id: 101 });

  // Act
  let r1 = container.resolve::<SimpleService>().unwrap();
  let r2 = container.resolve::<SimpleService>().unwrap();

  // Assert
  assert_eq!(r1.id, 101);
  // The same cached instance is returned on every resolution.
  assert!(Arc::ptr_eq(&r1, &r2));
}

#[test]
fn test_bind_overwrites_previous_binding() {
  // The last registration for a given type wins.
  let container = Container::new();

  container.bind("first value".to_string());
  assert_eq!(*container.resolve::<String>().unwrap(), "first value");

  container.bind("second value".to_string());
  assert_eq!(*container.resolve::<String>().unwrap(), "second value");
}

#[test]
fn test_bind_as_trait_resolution() {
  // Arrange
  let container = Container::new();
  container.bind_as::<dyn Greeter>(Arc::new(EnglishGreeter));

  // Act
  let greeter = container.resolve::<dyn Greeter>().unwrap();

  // Assert
  assert_eq!(greeter.greet(), "Hello!");
}

#[test]
fn test_registration_chaining() {
  // Arrange: registration methods return &Self so calls can be chained.
  let container = Container::new();
  container
    .bind(SimpleService { id: 7 })
    .bind("chained".to_string())
    .bind(42_u32);

  // Assert
  assert_eq!(container.resolve::<SimpleService>().unwrap().id, 7);
  assert_eq!(*container.resolve::<String>().unwrap(), "chained");
  assert_eq!(*container.resolve::<u32>().unwrap(), 42);
}

#[test]
fn test_missing_service_reports_not_found() {
  // Debug is needed for unwrap_err on Result<Arc<MissingService>, _>.
  #[derive(Debug)]
  struct MissingService;

  let container = Container::new();

  // The non-failing form returns None.
  assert!(container.get::<MissingService>().is_none());

  // The failing form names the unresolved type.
  let err = container.resolve::<MissingService>().unwrap_err();
  assert_eq!(err, ResolveError::NotFound(TypeKey::of::<MissingService>()));
  assert!(err.to_string().contains("dependency not found for type"));
  assert!(err.to_string().contains("MissingService"));
}

#[test]
fn test_bind_keyed_consistent_usage() {
  // bind_keyed bypasses key derivation; with a consistent key/value pair it
  // behaves exactly like bind.
  let container = Container::new();
  container.bind_keyed(TypeKey::of::<SimpleService>(), Arc::new(SimpleService { id: 5 }));

  assert_eq!(container.resolve::<SimpleService>().unwrap().id, 5);
}

#[test]
fn test_bind_keyed_mismatch_reports_type_mismatch() {
  // The caller is responsible for key/value consistency; a mismatched pair
  // surfaces at resolution time.
  let container = Container::new();
  container.bind_keyed(TypeKey::of::<u32>(), Arc::new("not a number".to_string()));

  let err = container.resolve::<u32>().unwrap_err();
  assert_eq!(err, ResolveError::TypeMismatch(TypeKey::of::<u32>()));
}

#[test]
fn test_resolving_arc_directly() {
  // Registering an Arc<T> makes the binding's own type Arc<T>; the container
  // must handle the nested generic without confusing it with T.
  let container = Container::new();
  let shared = Arc::new("shared config data".to_string());
  container.bind(shared.clone());

  // The binding's own type is Arc<String>, so resolution hands back a shared
  // handle to the registered Arc.
  let resolved = container.resolve::<Arc<String>>().unwrap();

  assert_eq!(&***resolved, "shared config data");
  // The handle dereferences to the exact Arc that was registered.
  assert!(Arc::ptr_eq(&shared, &*resolved));
  // The plain String type was never bound.
  assert!(container.get::<String>().is_none());
}
