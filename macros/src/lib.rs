use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemFn, parse_macro_input};

/// Marks a function as a stasis libc stub.
///
/// This attribute macro:
/// 1. Renames `fn foo` to `fn stub_foo`
/// 2. Makes it `extern "C"` and exports it unmangled, or under the bare C
///    name `foo` when the calling crate enables its `interpose` feature
/// 3. Registers the symbol mapping `foo` -> `stub_foo`
///
/// # Example
///
/// ```ignore
/// #[stub_symbol]
/// pub fn time(tloc: *mut time_t) -> time_t {
///     // implementation
/// }
/// ```
///
/// Expands to:
///
/// ```ignore
/// #[cfg_attr(feature = "interpose", unsafe(export_name = "time"))]
/// #[cfg_attr(not(feature = "interpose"), unsafe(no_mangle))]
/// pub extern "C" fn stub_time(tloc: *mut time_t) -> time_t {
///     // implementation
/// }
///
/// #[linkme::distributed_slice(crate::symbols::STUB_SYMBOLS)]
/// static _STUB_SYM_TIME: (&str, FnPtr) = ("time", FnPtr(stub_time as *const ()));
/// ```
#[proc_macro_attribute]
pub fn stub_symbol(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let sig = &input.sig;
    if !sig.generics.params.is_empty() || sig.asyncness.is_some() || sig.variadic.is_some() {
        return syn::Error::new_spanned(sig, "stub symbols must be plain non-generic functions")
            .to_compile_error()
            .into();
    }

    let vis = &input.vis;
    let block = &input.block;
    let attrs = &input.attrs;

    let original_name = &sig.ident;
    let stub_name = format_ident!("stub_{}", original_name);
    let symbol_name = original_name.to_string();
    let static_name = format_ident!("_STUB_SYM_{}", symbol_name.to_uppercase());

    let inputs = &sig.inputs;
    let output = &sig.output;

    let expanded = quote! {
        #(#attrs)*
        #[cfg_attr(feature = "interpose", unsafe(export_name = #symbol_name))]
        #[cfg_attr(not(feature = "interpose"), unsafe(no_mangle))]
        #vis extern "C" fn #stub_name(#inputs) #output #block

        #[linkme::distributed_slice(crate::symbols::STUB_SYMBOLS)]
        static #static_name: (&str, crate::symbols::FnPtr) =
            (#symbol_name, crate::symbols::FnPtr(#stub_name as *const ()));
    };

    TokenStream::from(expanded)
}
