use crate::derive_data::ReflectMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = meta.attrs().auto_register else {
        return proc_macro2::TokenStream::new();
    };

    let auto_register_ = crate::path::auto_register_(meta.ya_reflect_path());
    let ident = meta.ident();

    quote_spanned! { span =>
        #[allow(unsafe_code)]
        const _: () = {
            #auto_register_::inventory::submit! {
                #auto_register_::__AutoRegisterFunc(#auto_register_::register_type::<#ident>)
            }
        };
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    proc_macro2::TokenStream::new()
}
