use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::parse::{FieldKind, FieldSpec, Target};

pub(crate) fn expand(target: &Target) -> TokenStream {
    let ident = &target.ident;
    let vis = &target.vis;
    let helper = format_ident!("{}Assert", ident);
    let type_name = ident.to_string();
    let helper_doc = format!("Fluent assertions over a borrowed [`{}`].", type_name);

    let checks: Vec<TokenStream> = target.fields.iter().map(expand_field).collect();

    quote! {
        #[doc = #helper_doc]
        #vis struct #helper<'a> {
            subject: ::assert_that::Subject<'a, #ident>,
        }

        impl<'a> #helper<'a> {
            pub fn assert_that(actual: &'a #ident) -> Self {
                #helper {
                    subject: ::assert_that::Subject::new(actual).described_as(#type_name),
                }
            }

            /// Names the value in failure messages instead of the type name.
            pub fn described_as(self, description: impl ::std::convert::Into<::std::string::String>) -> Self {
                #helper {
                    subject: self.subject.described_as(description),
                }
            }

            pub fn actual(&self) -> &'a #ident {
                self.subject.actual()
            }

            #(#checks)*
        }

        impl<'a> ::std::convert::From<::assert_that::Subject<'a, #ident>> for #helper<'a> {
            fn from(subject: ::assert_that::Subject<'a, #ident>) -> Self {
                let subject = match subject.description() {
                    ::std::option::Option::Some(_) => subject,
                    ::std::option::Option::None => subject.described_as(#type_name),
                };
                #helper { subject }
            }
        }
    }
}

fn expand_field(field: &FieldSpec) -> TokenStream {
    let name = &field.ident;
    let name_str = name.to_string();
    let ty = &field.ty;

    match field.kind {
        FieldKind::Text => {
            let method = format_ident!("has_{}", name);
            let doc = format!("Checks that `{}` equals `expected`.", name_str);
            quote! {
                #[doc = #doc]
                #[track_caller]
                pub fn #method(&self, expected: &str) -> &Self {
                    ::assert_that::__macro_support::check_field(
                        &self.subject,
                        #name_str,
                        &self.subject.actual().#name,
                        expected,
                    );
                    self
                }
            }
        }
        FieldKind::Flag => {
            let is_method = format_ident!("is_{}", name);
            let is_not_method = format_ident!("is_not_{}", name);
            let doc = format!("Checks that `{}` is `true`.", name_str);
            let not_doc = format!("Checks that `{}` is `false`.", name_str);
            quote! {
                #[doc = #doc]
                #[track_caller]
                pub fn #is_method(&self) -> &Self {
                    ::assert_that::__macro_support::check_flag(
                        &self.subject,
                        #name_str,
                        self.subject.actual().#name,
                        true,
                    );
                    self
                }

                #[doc = #not_doc]
                #[track_caller]
                pub fn #is_not_method(&self) -> &Self {
                    ::assert_that::__macro_support::check_flag(
                        &self.subject,
                        #name_str,
                        self.subject.actual().#name,
                        false,
                    );
                    self
                }
            }
        }
        FieldKind::Value => {
            let method = format_ident!("has_{}", name);
            let doc = format!("Checks that `{}` equals `expected`.", name_str);
            quote! {
                #[doc = #doc]
                #[track_caller]
                pub fn #method(&self, expected: #ty) -> &Self {
                    ::assert_that::__macro_support::check_field(
                        &self.subject,
                        #name_str,
                        &self.subject.actual().#name,
                        &expected,
                    );
                    self
                }
            }
        }
    }
}
