//! Implementation of #[derive(Injectable)].

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

pub fn derive_injectable_impl(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  let fields = match &input.data {
    Data::Struct(data) => match &data.fields {
      Fields::Named(fields) => &fields.named,
      _ => {
        return error(
          &input,
          "Injectable can only be derived for structs with named fields",
        );
      }
    },
    _ => return error(&input, "Injectable can only be derived for structs"),
  };

  // Generate one assignment per #[inject]-marked field, in declaration order.
  let mut assignments = Vec::new();
  for field in fields {
    if !field.attrs.iter().any(|attr| attr.path().is_ident("inject")) {
      continue;
    }
    let field_name = field.ident.as_ref().unwrap();
    let inner = match arc_inner_type(&field.ty) {
      Some(inner) => inner,
      None => return error(field, "fields marked #[inject] must have type Arc<T>"),
    };
    assignments.push(quote! {
      self.#field_name = container.resolve::<#inner>()?;
    });
  }

  let expanded = quote! {
    impl #impl_generics ::wirebox::Injectable for #name #ty_generics #where_clause {
      fn inject(
        &mut self,
        container: &::wirebox::Container,
      ) -> ::std::result::Result<(), ::wirebox::ResolveError> {
        #(#assignments)*
        Ok(())
      }
    }
  };

  TokenStream::from(expanded)
}

// Peels `Arc<T>` (or `std::sync::Arc<T>`) down to `T`.
fn arc_inner_type(ty: &Type) -> Option<&Type> {
  let Type::Path(path) = ty else {
    return None;
  };
  let segment = path.path.segments.last()?;
  if segment.ident != "Arc" {
    return None;
  }
  let PathArguments::AngleBracketed(args) = &segment.arguments else {
    return None;
  };
  if args.args.len() != 1 {
    return None;
  }
  match args.args.first()? {
    GenericArgument::Type(inner) => Some(inner),
    _ => None,
  }
}

fn error<T: ToTokens>(tokens: T, message: &str) -> TokenStream {
  syn::Error::new_spanned(tokens, message)
    .to_compile_error()
    .into()
}
