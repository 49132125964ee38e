//! Type identifiers and type-erased binding values.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Identifies a bindable type inside a [`Container`](crate::Container).
///
/// Concrete types and trait-object types share the same key space:
/// `TypeKey::of::<MyService>()` and `TypeKey::of::<dyn MyTrait>()` are both
/// valid keys. Keys compare and hash by `TypeId` alone; the captured type name
/// is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeKey {
  id: TypeId,
  name: &'static str,
}

impl TypeKey {
  /// Returns the key for `T`.
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
    }
  }

  /// The full type name the key was created from.
  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({})", self.name)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// A type-erased, cheaply clonable binding value.
///
/// The payload is always an `Arc<T>` (where `T` may be a trait object), so a
/// `Value` can be duplicated without knowing the underlying type. This is what
/// lets resolved arguments flow through providers and invoked functions.
#[derive(Clone)]
pub struct Value(Arc<dyn Any + Send + Sync>);

impl Value {
  /// Erases a shared handle into a binding value.
  pub fn new<T: ?Sized + Any + Send + Sync>(value: Arc<T>) -> Self {
    Self(Arc::new(value))
  }

  /// Recovers the shared handle, if the payload is an `Arc<T>`.
  pub fn downcast<T: ?Sized + Any + Send + Sync>(&self) -> Option<Arc<T>> {
    self.0.downcast_ref::<Arc<T>>().cloned()
  }
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Value(..)")
  }
}
