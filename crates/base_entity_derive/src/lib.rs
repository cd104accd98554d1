use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{
    Expr, ExprLit, Fields, ItemStruct, Lit, LitStr, Meta, Token, parse_macro_input,
    punctuated::Punctuated,
};

/// Injects the store-managed columns (`id`, `created_at`, `updated_at`) into a
/// sea-orm model and implements `crate::db::dao::base_traits` for it.
///
/// Fields already declared on the struct are left untouched. `name = "..."`
/// is the entity name reported in lookups and is required.
#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let name = match entity_name(args) {
        Ok(name) => name,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut input = parse_macro_input!(item as ItemStruct);
    let fields = match &mut input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return syn::Error::new_spanned(
                input,
                "base_entity requires a struct with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let existing: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
        .collect();

    let mut injected = Punctuated::<syn::Field, Token![,]>::new();

    if !existing.contains("id") {
        injected.push(syn::parse_quote! {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: uuid::Uuid
        });
    }

    if !existing.contains("created_at") {
        injected.push(syn::parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub created_at: sea_orm::entity::prelude::DateTimeWithTimeZone
        });
    }

    if !existing.contains("updated_at") {
        injected.push(syn::parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub updated_at: sea_orm::entity::prelude::DateTimeWithTimeZone
        });
    }

    injected.extend(fields.named.iter().cloned());
    fields.named = injected;

    let expanded = quote! {
        #input

        impl crate::db::dao::base_traits::BaseActiveModel for ActiveModel {
            fn stamp_new(
                &mut self,
                id: uuid::Uuid,
                now: sea_orm::entity::prelude::DateTimeWithTimeZone,
            ) {
                self.id = sea_orm::ActiveValue::Set(id);
                self.created_at = sea_orm::ActiveValue::Set(now);
                self.updated_at = sea_orm::ActiveValue::Set(now);
            }

            fn touch(&mut self, now: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.updated_at = sea_orm::ActiveValue::Set(now);
            }
        }

        impl crate::db::dao::base_traits::BaseEntity for Entity {
            const NAME: &'static str = #name;

            fn created_at_column() -> Column {
                Column::CreatedAt
            }
        }
    };

    expanded.into()
}

fn entity_name(args: Punctuated<Meta, Token![,]>) -> Result<LitStr, syn::Error> {
    let mut name = None;

    for meta in args {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value pair, e.g. name = \"token\"",
            ));
        };

        if !name_value.path.is_ident("name") {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "unknown base_entity attribute key",
            ));
        }

        match name_value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => name = Some(lit_str),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal for attribute value",
                ));
            }
        }
    }

    name.ok_or_else(|| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            "base_entity requires name = \"...\"",
        )
    })
}
