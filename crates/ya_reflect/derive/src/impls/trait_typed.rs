use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{PolicyAttr, ReflectStruct};

/// Generate implementation code for `Typed`.
///
/// Similar to following:
///
/// ```ignore
/// impl _path_::info::Typed for Foo {
///     fn type_info() -> &'static _path_::info::TypeInfo {
///         static CELL: _path_::info::TypeInfoCell = _path_::info::TypeInfoCell::new();
///         CELL.get_or_init(|| {
///             let owner = _path_::info::DeclaringType::of::<Self>(_path_::info::TypeLayout::Rust);
///             let members: [_path_::info::MemberInfo; 2] = [ /* fields, properties */ ];
///             _path_::info::TypeInfo::new(owner, members)
///         })
///     }
/// }
/// ```
pub(crate) fn impl_trait_typed(reflect_struct: &ReflectStruct) -> TokenStream {
    let meta = reflect_struct.meta();
    let ya_reflect_path = meta.ya_reflect_path();

    let typed_ = crate::path::typed_(ya_reflect_path);
    let type_info_ = crate::path::type_info_(ya_reflect_path);
    let type_info_cell_ = crate::path::type_info_cell_(ya_reflect_path);
    let declaring_type_ = crate::path::declaring_type_(ya_reflect_path);
    let member_info_ = crate::path::member_info_(ya_reflect_path);
    let field_info_ = crate::path::field_info_(ya_reflect_path);
    let property_info_ = crate::path::property_info_(ya_reflect_path);

    let layout = meta.layout().to_tokens(ya_reflect_path);

    let fields = reflect_struct.fields().iter().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        let member = field.member_tokens();
        let readonly = if field.attrs.readonly {
            quote!(.with_readonly(true))
        } else {
            TokenStream::new()
        };
        let policy = PolicyAttr::with_policy_expression(field.attrs.policy, ya_reflect_path);

        quote! {
            #member_info_::Field(
                unsafe {
                    #field_info_::new::<#ty>(owner, #name, ::core::mem::offset_of!(Self, #member))
                }
                #readonly
                #policy
            )
        }
    });

    let properties = meta.attrs().properties.iter().map(|property| {
        let name = &property.name;
        let constructor = match (&property.get, &property.set) {
            (Some(get), Some(set)) => quote! {
                #property_info_::read_write::<Self, _>(owner, #name, #get, #set)
            },
            (Some(get), None) => quote! {
                #property_info_::read_only::<Self, _>(owner, #name, #get)
            },
            (None, Some(set)) => quote! {
                #property_info_::write_only::<Self, _>(owner, #name, #set)
            },
            (None, None) => unreachable!("rejected while parsing"),
        };
        let policy = PolicyAttr::with_policy_expression(property.policy, ya_reflect_path);

        quote! {
            #member_info_::Property(#constructor #policy)
        }
    });

    let count = reflect_struct.fields().len() + meta.attrs().properties.len();
    let ident = meta.ident();

    let unsafe_allow = if reflect_struct.fields().is_empty() {
        TokenStream::new()
    } else {
        quote!(#[allow(unsafe_code)])
    };

    quote! {
        #unsafe_allow
        impl #typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #type_info_cell_ = #type_info_cell_::new();
                CELL.get_or_init(|| {
                    let owner = #declaring_type_::of::<Self>(#layout);
                    let members: [#member_info_; #count] = [
                        #(#fields,)*
                        #(#properties,)*
                    ];
                    #type_info_::new(owner, members)
                })
            }
        }
    }
}
