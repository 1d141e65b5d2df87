use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;

mod config;
mod core;

/// Derives `enum_spelling::Spelled` and the std conversion traits for a
/// fieldless enum.
///
/// The enum must also implement `Clone`, `Copy`, `PartialEq` and `Eq`.
#[proc_macro_error]
#[proc_macro_derive(Spelled, attributes(spelled))]
pub fn spelled_derive(input: TokenStream) -> TokenStream {
    let input = proc_macro2::TokenStream::from(input);
    core::spelled_impl(input).into()
}
