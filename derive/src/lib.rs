//! Derive macro support for the wirebox dependency injection container.
//!
//! This crate provides `#[derive(Injectable)]`, which implements
//! `wirebox::Injectable` for a struct by resolving every field marked
//! `#[inject]` from the container. It is re-exported by `wirebox` under the
//! default `derive` feature; depend on `wirebox` rather than on this crate
//! directly.

use proc_macro::TokenStream;

mod inject;

/// Derive macro for container-populated structs.
///
/// Generates an `Injectable` implementation that assigns
/// `container.resolve::<T>()?` into every field marked `#[inject]`, in
/// declaration order. Marked fields must have type `Arc<T>` (where `T` may be
/// a trait object); unmarked fields are left untouched.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use wirebox::Injectable;
///
/// #[derive(Injectable)]
/// struct RequestHandler {
///     #[inject]
///     db: Arc<Database>,
///     #[inject]
///     logger: Arc<dyn Logger>,
///     retries: u32, // not injected
/// }
///
/// // Generated implementation:
/// // impl wirebox::Injectable for RequestHandler {
/// //     fn inject(&mut self, container: &wirebox::Container) -> Result<(), wirebox::ResolveError> {
/// //         self.db = container.resolve::<Database>()?;
/// //         self.logger = container.resolve::<dyn Logger>()?;
/// //         Ok(())
/// //     }
/// // }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
  inject::derive_injectable_impl(input)
}
