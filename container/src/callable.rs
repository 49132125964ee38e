//! Function shapes the container can invoke.
//!
//! A [`Callable`] carries an ordered list of parameter type keys alongside the
//! invocation entry point, which is what lets the container resolve arguments
//! without runtime reflection. It is implemented for plain functions and
//! closures taking up to eight `Arc`-wrapped parameters. Closure parameters
//! must be annotated (`|db: Arc<Database>| ...`) so the compiler can select
//! the implementation.

use std::any::Any;
use std::sync::Arc;

use crate::key::{TypeKey, Value};

/// A callable with a fixed, ordered parameter list, each resolvable by type.
pub trait Callable<Args, Out> {
  /// The parameter type keys, in declared order.
  fn param_keys() -> Vec<TypeKey>;

  /// Calls the function with already-resolved arguments.
  ///
  /// # Panics
  ///
  /// Panics if `args` does not match `param_keys` in length and types. The
  /// container always supplies arguments it resolved from `param_keys`, so
  /// this is unreachable through the public API.
  fn call(&self, args: Vec<Value>) -> Out;
}

macro_rules! impl_callable {
  ($($param:ident),*) => {
    // Tuple elements must be `Sized`, so the impl is keyed on the
    // `Arc`-wrapped parameters instead of the bare (possibly unsized)
    // parameter types. `Args` is only ever inferred, never constructed.
    impl<Func, Out, $($param),*> Callable<($(Arc<$param>,)*), Out> for Func
    where
      Func: Fn($(Arc<$param>),*) -> Out,
      $($param: ?Sized + Any + Send + Sync,)*
    {
      fn param_keys() -> Vec<TypeKey> {
        vec![$(TypeKey::of::<$param>()),*]
      }

      #[allow(unused_mut, unused_variables)]
      fn call(&self, args: Vec<Value>) -> Out {
        let mut args = args.into_iter();
        (self)($(
          args
            .next()
            .and_then(|value| value.downcast::<$param>())
            .expect("resolved argument does not match its declared parameter type")
        ),*)
      }
    }
  };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);
impl_callable!(A, B, C, D, E);
impl_callable!(A, B, C, D, E, F);
impl_callable!(A, B, C, D, E, F, G);
impl_callable!(A, B, C, D, E, F, G, H);

/// A provider return shape that fans out into several independent bindings.
///
/// Implemented for tuples of two to four elements. A producer registered with
/// [`Container::provide_multi`](crate::Container::provide_multi) is keyed
/// under every element type, and one invocation satisfies all of them.
pub trait MultiOutput {
  /// The output type keys, in tuple order.
  fn output_keys() -> Vec<TypeKey>;

  /// Splits the tuple into binding values, in tuple order.
  fn into_values(self) -> Vec<Value>;
}

macro_rules! impl_multi_output {
  ($($out:ident : $idx:tt),+) => {
    impl<$($out),+> MultiOutput for ($($out,)+)
    where
      $($out: Any + Send + Sync,)+
    {
      fn output_keys() -> Vec<TypeKey> {
        vec![$(TypeKey::of::<$out>()),+]
      }

      fn into_values(self) -> Vec<Value> {
        vec![$(Value::new(Arc::new(self.$idx))),+]
      }
    }
  };
}

impl_multi_output!(A: 0, B: 1);
impl_multi_output!(A: 0, B: 1, C: 2);
impl_multi_output!(A: 0, B: 1, C: 2, D: 3);
