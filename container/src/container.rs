//! The main `Container` struct and the four-step resolution algorithm.

use std::any::Any;
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use log::{debug, trace};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::callable::{Callable, MultiOutput};
use crate::core::{ImplEntry, ProviderEntry, ResolutionGuard};
use crate::error::ResolveError;
use crate::inject::Injectable;
use crate::key::{TypeKey, Value};

/// The dependency container.
///
/// A `Container` stores resolved values indexed by type, lazily materializes
/// missing values through registered providers, and optionally delegates to a
/// parent container. Resolution of a requested type tries, in order:
///
/// 1. a concrete binding for the key;
/// 2. a pending provider for the key, invoked at most once, with its own
///    parameters resolved through the same algorithm and every declared
///    output cached;
/// 3. a declared interface implementation whose concrete type is bound,
///    tried in declaration order;
/// 4. the parent container, running the full algorithm up the chain.
///
/// All registration methods take `&self` and can be called at any point in
/// the container's lifetime, from any thread.
#[derive(Default)]
pub struct Container {
  bindings: DashMap<TypeKey, Value>,
  providers: DashMap<TypeKey, Arc<ProviderEntry>>,
  interfaces: DashMap<TypeKey, Vec<ImplEntry>>,
  parent: RwLock<Option<Weak<Container>>>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- Value Registration ---

  /// Binds `value` under its own concrete type.
  ///
  /// Overwrites any previous binding for that type; the last write wins.
  pub fn bind<T: Any + Send + Sync>(&self, value: T) -> &Self {
    let key = TypeKey::of::<T>();
    trace!("binding value for {}", key);
    self.bindings.insert(key, Value::new(Arc::new(value)));
    self
  }

  /// Binds an already-shared value under an interface (trait object) type.
  ///
  /// Coerce at the call site: `container.bind_as::<dyn Greeter>(Arc::new(EnglishGreeter))`.
  pub fn bind_as<I: ?Sized + Any + Send + Sync>(&self, value: Arc<I>) -> &Self {
    let key = TypeKey::of::<I>();
    trace!("binding value for interface {}", key);
    self.bindings.insert(key, Value::new(value));
    self
  }

  /// Binds `value` under a caller-supplied key, bypassing key derivation.
  ///
  /// The caller is responsible for consistency between key and value; a
  /// mismatched pair surfaces as [`ResolveError::TypeMismatch`] at resolution.
  pub fn bind_keyed<T: ?Sized + Any + Send + Sync>(&self, key: TypeKey, value: Arc<T>) -> &Self {
    trace!("binding value for explicit key {}", key);
    self.bindings.insert(key, Value::new(value));
    self
  }

  // --- Provider Registration ---

  /// Registers a lazy producer for a single output type.
  ///
  /// The producer runs at most once, on first demand for its output type. Its
  /// parameters are resolved through the container when it runs, so a
  /// provider may depend on other providers or bindings transitively.
  pub fn provide<Args, Out, F>(&self, producer: F) -> &Self
  where
    F: Callable<Args, Out> + Send + Sync + 'static,
    Out: Any + Send + Sync,
  {
    self.register_provider(
      F::param_keys(),
      vec![TypeKey::of::<Out>()],
      Box::new(move |args| vec![Value::new(Arc::new(producer.call(args)))]),
    )
  }

  /// Registers a lazy producer keyed under an interface type.
  ///
  /// The producer returns the shared trait object directly:
  /// `container.provide_as::<dyn Greeter, _, _>(|| -> Arc<dyn Greeter> { .. })`.
  pub fn provide_as<I, Args, F>(&self, producer: F) -> &Self
  where
    I: ?Sized + Any + Send + Sync,
    F: Callable<Args, Arc<I>> + Send + Sync + 'static,
  {
    self.register_provider(
      F::param_keys(),
      vec![TypeKey::of::<I>()],
      Box::new(move |args| vec![Value::new(producer.call(args))]),
    )
  }

  /// Registers a lazy producer returning several outputs as a tuple.
  ///
  /// The producer is keyed under every element type of the tuple, all sharing
  /// one entry: invoking it through any output caches the rest and no output
  /// can trigger a second invocation.
  pub fn provide_multi<Args, Out, F>(&self, producer: F) -> &Self
  where
    F: Callable<Args, Out> + Send + Sync + 'static,
    Out: MultiOutput,
  {
    self.register_provider(
      F::param_keys(),
      Out::output_keys(),
      Box::new(move |args| producer.call(args).into_values()),
    )
  }

  fn register_provider(
    &self,
    params: Vec<TypeKey>,
    outputs: Vec<TypeKey>,
    produce: Box<dyn Fn(Vec<Value>) -> Vec<Value> + Send + Sync>,
  ) -> &Self {
    let entry = Arc::new(ProviderEntry {
      params,
      outputs,
      cell: OnceCell::new(),
      produce,
    });
    for key in &entry.outputs {
      trace!("registering provider output {}", key);
      self.providers.insert(*key, Arc::clone(&entry));
    }
    self
  }

  // --- Interface Declarations ---

  /// Declares that a binding of concrete type `T` satisfies interface `I`.
  ///
  /// The declaration feeds step 3 of resolution: when `I` has no direct
  /// binding or provider, declared implementations are scanned in declaration
  /// order and the first whose concrete type currently has a binding is
  /// upcast and returned. The [`implements!`](crate::implements) macro writes
  /// the upcast function for you.
  pub fn declare_impl<T, I>(&self, upcast: fn(Arc<T>) -> Arc<I>) -> &Self
  where
    T: Any + Send + Sync,
    I: ?Sized + Any + Send + Sync,
  {
    let iface = TypeKey::of::<I>();
    let entry = ImplEntry {
      concrete: TypeKey::of::<T>(),
      upcast: Box::new(move |value| value.downcast::<T>().map(|concrete| Value::new(upcast(concrete)))),
    };
    trace!("declaring {} as an implementation of {}", entry.concrete, iface);
    self.interfaces.entry(iface).or_default().push(entry);
    self
  }

  // --- Hierarchy ---

  /// Sets the parent container, consulted when local resolution fails.
  ///
  /// The link is non-owning: if the parent is dropped, delegation silently
  /// stops. Calling this again overwrites the previous link.
  pub fn set_parent(&self, parent: &Arc<Container>) {
    *self.parent.write() = Some(Arc::downgrade(parent));
  }

  fn parent(&self) -> Option<Arc<Container>> {
    self.parent.read().as_ref().and_then(Weak::upgrade)
  }

  // --- Resolution ---

  /// Resolves a value for `T`, or reports why it could not be supplied.
  pub fn resolve<T: ?Sized + Any + Send + Sync>(&self) -> Result<Arc<T>, ResolveError> {
    let key = TypeKey::of::<T>();
    let value = self.resolve_value(key)?;
    value.downcast::<T>().ok_or(ResolveError::TypeMismatch(key))
  }

  /// Resolves a value for `T`, or returns `None`.
  ///
  /// This is the non-failing query form: it collapses a failed provider
  /// invocation (a provider whose own dependency is missing) into `None` as
  /// well. Use [`resolve`](Container::resolve) to distinguish.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self) -> Option<Arc<T>> {
    self.resolve::<T>().ok()
  }

  fn resolve_value(&self, key: TypeKey) -> Result<Value, ResolveError> {
    // 1. Concrete binding. Always wins over a pending provider for the same key.
    if let Some(bound) = self.bindings.get(&key) {
      return Ok(bound.value().clone());
    }

    // 2. Pending provider. The entry is cloned out so no map guard is held
    // across the recursive parameter resolution below.
    let pending = self.providers.get(&key).map(|entry| Arc::clone(entry.value()));
    if let Some(entry) = pending {
      self.run_provider(key, &entry)?;
      if let Some(bound) = self.bindings.get(&key) {
        return Ok(bound.value().clone());
      }
    }

    // 3. Declared interface implementations, in declaration order. Only
    // already-materialized bindings participate; a pending provider for a
    // declared concrete type is not invoked on the interface's behalf.
    if let Some(edges) = self.interfaces.get(&key) {
      for edge in edges.value() {
        if let Some(bound) = self.bindings.get(&edge.concrete) {
          if let Some(upcast) = (edge.upcast)(bound.value()) {
            return Ok(upcast);
          }
        }
      }
    }

    // 4. Parent delegation, running the full algorithm up the chain.
    if let Some(parent) = self.parent() {
      debug!("delegating {} to parent container", key);
      return parent.resolve_value(key);
    }

    Err(ResolveError::NotFound(key))
  }

  /// Invokes the producer behind `key` at most once and caches every declared
  /// output, removing the consumed provider entries.
  fn run_provider(&self, key: TypeKey, entry: &ProviderEntry) -> Result<(), ResolveError> {
    // Guard every output of the entry, not just the requested key, so a
    // multi-output producer depending on one of its own sibling outputs is
    // caught as a cycle instead of re-entering the cell.
    let _guard = ResolutionGuard::new(&entry.outputs);
    let results = entry.cell.get_or_try_init(|| -> Result<Vec<Value>, ResolveError> {
      debug!("invoking provider for {}", key);
      let args = self.resolve_params(&entry.params)?;
      Ok((entry.produce)(args))
    })?;
    for (output, value) in entry.outputs.iter().zip(results.iter()) {
      self.bindings.insert(*output, value.clone());
      self.providers.remove(output);
    }
    Ok(())
  }

  fn resolve_params(&self, params: &[TypeKey]) -> Result<Vec<Value>, ResolveError> {
    params.iter().map(|key| self.resolve_value(*key)).collect()
  }

  // --- Injection ---

  /// Resolves and assigns every `#[inject]`-marked field of `record` in place.
  ///
  /// Fails fast with the first unresolvable field type; fields assigned
  /// before the failure are not rolled back.
  pub fn apply<T: Injectable>(&self, record: &mut T) -> Result<(), ResolveError> {
    record.inject(self)
  }

  /// Runs [`apply`](Container::apply) and, only on success, binds the record
  /// under its own concrete type, returning the shared handle.
  ///
  /// On failure nothing is registered.
  pub fn apply_map<T: Injectable + Any + Send + Sync>(&self, mut record: T) -> Result<Arc<T>, ResolveError> {
    self.apply(&mut record)?;
    let record = Arc::new(record);
    self.bindings.insert(TypeKey::of::<T>(), Value::new(Arc::clone(&record)));
    Ok(record)
  }

  // --- Invocation ---

  /// Calls `f`, resolving each of its parameters by type, in declared order.
  ///
  /// Fails fast with the first unresolvable parameter type without calling
  /// `f`; otherwise returns `f`'s result verbatim.
  pub fn invoke<Args, Out, F>(&self, f: F) -> Result<Out, ResolveError>
  where
    F: Callable<Args, Out>,
  {
    let args = self.resolve_params(&F::param_keys())?;
    Ok(f.call(args))
  }
}
