mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use smooth_attrs::ErrorKind;
/// use smooth_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "the function is not defined here", labels = ["at this point"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts; the `i`-th label points at the `i`-th span.         |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` and `help` accept any expression implementing [`ToString`]. `labels` must be an array
/// literal whose elements each implement [`ToString`]; they do not need to share a type, so
/// `["here", format!("and {} more", n)]` is fine. For structs with named fields, the expressions
/// are evaluated with the members of the struct in scope (tuple structs are not supported).
///
/// The generated code refers to the `ariadne` and `smooth_error` crates, so both must be
/// dependencies of the crate using the derive.
///
/// [`ErrorKind`]: https://docs.rs/smooth-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
