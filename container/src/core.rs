//! Core, non-public data structures for the container.

use std::cell::RefCell;
use std::collections::HashSet;

use once_cell::sync::OnceCell;

use crate::key::{TypeKey, Value};

thread_local! {
  // The set of provider outputs currently being resolved on this thread.
  // This is the key to detecting circular provider dependencies.
  static RESOLVING_STACK: RefCell<HashSet<TypeKey>> = RefCell::new(HashSet::new());
}

/// An RAII guard to detect and prevent circular provider dependencies.
///
/// When created, it adds every output key of the producer being invoked to
/// the thread-local resolution stack, so a producer that depends on any of
/// its own outputs trips the guard as well. If a key is already present, the
/// provider chain has looped back on itself, and it panics. When the guard is
/// dropped, it removes its keys.
pub(crate) struct ResolutionGuard {
  keys: Vec<TypeKey>,
}

impl ResolutionGuard {
  pub(crate) fn new(keys: &[TypeKey]) -> Self {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      for (index, key) in keys.iter().enumerate() {
        // `insert` returns `false` if the value was already present.
        if !stack.insert(*key) {
          // No guard exists yet to drop, so the keys inserted so far must be
          // unwound by hand before aborting.
          for inserted in &keys[..index] {
            stack.remove(inserted);
          }
          panic!("Circular provider dependency detected while resolving {}", key);
        }
      }
    });
    Self { keys: keys.to_vec() }
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      for key in &self.keys {
        stack.remove(key);
      }
    });
  }
}

/// A registered producer, pending invocation.
///
/// A multi-output producer shares one entry across all of its output keys, so
/// invoking it through any of them satisfies the rest. The `cell` guarantees
/// the producer body runs at most once even under concurrent resolution.
pub(crate) struct ProviderEntry {
  pub(crate) params: Vec<TypeKey>,
  pub(crate) outputs: Vec<TypeKey>,
  pub(crate) cell: OnceCell<Vec<Value>>,
  pub(crate) produce: Box<dyn Fn(Vec<Value>) -> Vec<Value> + Send + Sync>,
}

/// A declared interface-satisfaction edge: a binding of `concrete` can be
/// served for the interface this entry is registered under, via `upcast`.
pub(crate) struct ImplEntry {
  pub(crate) concrete: TypeKey,
  pub(crate) upcast: Box<dyn Fn(&Value) -> Option<Value> + Send + Sync>,
}
