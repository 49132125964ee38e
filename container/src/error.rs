use std::fmt;

use crate::key::TypeKey;

/// Errors returned by the failing resolution entry points (`resolve`,
/// `apply`, `apply_map`, `invoke`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
  /// No binding, provider, declared implementation, or parent container could
  /// supply the requested type.
  NotFound(TypeKey),
  /// A binding registered through `bind_keyed` was found under the requested
  /// key but holds a value of a different type.
  TypeMismatch(TypeKey),
}

impl ResolveError {
  /// The type key the resolution failed on.
  pub fn key(&self) -> TypeKey {
    match self {
      ResolveError::NotFound(key) | ResolveError::TypeMismatch(key) => *key,
    }
  }
}

impl fmt::Display for ResolveError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ResolveError::NotFound(key) => write!(f, "dependency not found for type {}", key),
      ResolveError::TypeMismatch(key) => {
        write!(f, "binding for type {} holds a value of a different type", key)
      }
    }
  }
}

impl std::error::Error for ResolveError {}
