use std::collections::HashMap;

use proc_macro_error::{abort, abort_if_dirty, emit_error};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, Variant, ext::IdentExt, parse2};

use crate::config::{RenameRule, SpelledConfig};

pub struct EnumInfo {
    name: Ident,
    variants: Vec<VariantInfo>,
}

pub struct VariantInfo {
    name: Ident,
    spelling: String,
    span: Span,
}

impl EnumInfo {
    fn from_input(input: DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = input.data else {
            abort!(input.ident, "`Spelled` can only be derived for enums");
        };

        if !input.generics.params.is_empty() {
            abort!(input.generics, "`Spelled` does not support generic enums");
        }

        if data.variants.is_empty() {
            abort!(input.ident, "`Spelled` requires at least one variant");
        }

        let config = SpelledConfig::parse(&input.attrs)?;
        if let Some(rename) = &config.rename {
            abort!(rename, "`rename` applies to variants, use `rename_all` on the enum");
        }
        let rule = config.rename_all.map(|(rule, _)| rule).unwrap_or_default();

        let variants = data
            .variants
            .into_iter()
            .map(|v| VariantInfo::from_variant(v, rule))
            .collect::<syn::Result<Vec<_>>>()?;

        check_distinct(&variants);

        Ok(EnumInfo {
            name: input.ident,
            variants,
        })
    }

    fn gen_spelled_impl(&self) -> TokenStream {
        let name = &self.name;
        let type_name = name.unraw().to_string();
        let spellings = self.variants.iter().map(|v| &v.spelling);
        let variants = self.variants.iter().map(|v| &v.name);

        quote! {
            impl ::enum_spelling::Spelled for #name {
                const TYPE_NAME: &'static str = #type_name;

                const NAMES: &'static [&'static str] = &[
                    #(#spellings,)*
                ];

                const VARIANTS: &'static [Self] = &[
                    #(Self::#variants,)*
                ];

                #[inline]
                fn ordinal(self) -> usize {
                    self as usize
                }
            }
        }
    }

    fn gen_conversions(&self) -> TokenStream {
        let name = &self.name;
        quote! {
            ::enum_spelling::impl_spelled_traits!(#name);
        }
    }
}

impl VariantInfo {
    fn from_variant(variant: Variant, rule: RenameRule) -> syn::Result<Self> {
        let name = variant.ident;

        if !matches!(variant.fields, Fields::Unit) {
            abort!(name, "`Spelled` variants cannot carry fields");
        }

        if let Some((_, discriminant)) = &variant.discriminant {
            abort!(
                discriminant,
                "`Spelled` assigns ordinals in declaration order, remove the explicit discriminant"
            );
        }

        let config = SpelledConfig::parse(&variant.attrs)?;
        if let Some((_, span)) = config.rename_all {
            abort!(span, "`rename_all` applies to the enum, use `rename` on variants");
        }

        let (spelling, span) = match config.rename {
            Some(lit) => (lit.value(), lit.span()),
            None => (rule.apply(&name.unraw().to_string()), name.span()),
        };

        if spelling.is_empty() {
            abort!(span, "spelling of `{}` is empty", name);
        }

        Ok(VariantInfo {
            name,
            spelling,
            span,
        })
    }
}

/// Reports every variant whose spelling is already taken.
fn check_distinct(variants: &[VariantInfo]) {
    let mut seen: HashMap<&str, &Ident> = HashMap::new();

    for v in variants {
        match seen.get(v.spelling.as_str()) {
            Some(first) => emit_error!(
                v.span,
                "duplicate spelling {:?}, already used by `{}`",
                v.spelling,
                first
            ),
            None => {
                seen.insert(&v.spelling, &v.name);
            }
        }
    }

    abort_if_dirty();
}

pub fn spelled_impl(input: TokenStream) -> TokenStream {
    let input = match parse2::<DeriveInput>(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };
    let info = match EnumInfo::from_input(input) {
        Ok(info) => info,
        Err(err) => return err.to_compile_error(),
    };

    let spelled_impl = info.gen_spelled_impl();
    let conversions = info.gen_conversions();

    quote! {
        #spelled_impl
        #conversions
    }
}
