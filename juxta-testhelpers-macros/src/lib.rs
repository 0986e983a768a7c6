use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct UntilFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct UntilBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct TestFn {
        until_fn: UntilFn, _fn: KFn, name: Ident,
        until_body: UntilBody, body: Body
    }
}

impl quote::ToTokens for UntilFn {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for UntilBody {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// Runs a test after `juxta_testhelpers::setup()`.
///
/// ```ignore
/// use juxta_testhelpers::test;
///
/// #[test]
/// fn renders_markers() {
///     // JUXTA_LOG controls what is printed
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let TestFn {
        until_fn,
        _fn,
        name,
        until_body,
        body,
    } = match tokens.parse::<TestFn>() {
        Ok(test_fn) => test_fn,
        Err(_) => {
            return quote::quote! {
                ::core::compile_error!("#[juxta_testhelpers::test] expects a function");
            }
            .into();
        }
    };

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #until_fn fn #name #until_body {
            ::juxta_testhelpers::setup();

            #body
        }
    }
    .into()
}
