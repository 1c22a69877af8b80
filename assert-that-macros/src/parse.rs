use syn::{Data, DeriveInput, Fields, Ident, Result, Type, Visibility};

/// A struct the derive accepted.
pub(crate) struct Target {
    pub ident: Ident,
    pub vis: Visibility,
    pub fields: Vec<FieldSpec>,
}

pub(crate) struct FieldSpec {
    pub ident: Ident,
    pub ty: Type,
    pub kind: FieldKind,
}

/// How a field's checks are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// `String`: compared against `&str`
    Text,
    /// `bool`: `is_<field>` / `is_not_<field>`
    Flag,
    /// Anything else: compared against a value of the field's type
    Value,
}

/// Validates the derive input.
///
/// # Example Input
/// ```text
/// struct Person {
///     name: String,
///     age: u32,
///     #[assertions(skip)]
///     peers: RefCell<Vec<Weak<Person>>>,
/// }
/// ```
///
/// Only non-generic structs with named fields are accepted.
pub(crate) fn parse(input: &DeriveInput) -> Result<Target> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Assertions)] does not support generic structs",
        ));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "#[derive(Assertions)] requires named fields",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "#[derive(Assertions)] can only be used on structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "#[derive(Assertions)] can only be used on structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in &named.named {
        if is_skipped(field)? {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        fields.push(FieldSpec {
            kind: classify(&field.ty),
            ident,
            ty: field.ty.clone(),
        });
    }

    Ok(Target {
        ident: input.ident.clone(),
        vis: input.vis.clone(),
        fields,
    })
}

fn is_skipped(field: &syn::Field) -> Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("assertions") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported assertions attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn classify(ty: &Type) -> FieldKind {
    let Type::Path(path) = ty else {
        return FieldKind::Value;
    };
    if path.qself.is_some() {
        return FieldKind::Value;
    }
    match path.path.segments.last() {
        Some(segment) if segment.arguments.is_empty() && segment.ident == "String" => {
            FieldKind::Text
        }
        Some(segment) if segment.arguments.is_empty() && segment.ident == "bool" => {
            FieldKind::Flag
        }
        _ => FieldKind::Value,
    }
}
