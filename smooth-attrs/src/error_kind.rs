use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    meta::ParseNestedMeta,
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    ExprArray,
    Fields,
    Ident,
    ItemStruct,
    Result,
};

/// The contents of the `error` attribute.
#[derive(Debug, Default)]
struct ErrorAttr {
    message: Option<Expr>,
    labels: Option<Vec<Expr>>,
    help: Option<Expr>,
}

impl ErrorAttr {
    /// Reads the `error` attribute from the given attributes of a struct named `name`, checking
    /// that the required tags are present.
    fn from_attributes(name: &Ident, attributes: &[Attribute]) -> Result<Self> {
        let Some(attr) = attributes.iter().find(|attr| attr.path().is_ident("error")) else {
            return Err(syn::Error::new_spanned(name, "missing `#[error(...)]` attribute"));
        };

        let mut error_attr = Self::default();
        attr.parse_nested_meta(|meta| error_attr.tag(meta))?;

        if error_attr.message.is_none() {
            return Err(syn::Error::new_spanned(attr, "the `error` attribute needs a `message` tag"));
        }
        if error_attr.labels.is_none() {
            return Err(syn::Error::new_spanned(attr, "the `error` attribute needs a `labels` tag"));
        }
        Ok(error_attr)
    }

    /// Applies one `tag = value` pair.
    fn tag(&mut self, meta: ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("message") {
            self.message = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("labels") {
            let labels: ExprArray = meta.value()?.parse()?;
            self.labels = Some(labels.elems.into_iter().collect());
        } else if meta.path.is_ident("help") {
            self.help = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("unknown tag, expected `message`, `labels`, or `help`"));
        }
        Ok(())
    }
}

/// The struct that [`ErrorKind`] is derived for.
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    error_attr: ErrorAttr,
}

impl ErrorKindTarget {
    /// Brings the fields of the struct into scope under their own names. Tuple structs are
    /// rejected.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! {
                    #[allow(unused_variables)]
                    let #name { #(#names),* } = self;
                }
            },
            Fields::Unnamed(_) => quote_spanned! {
                name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => TokenStream2::new(),
        }
    }
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item: ItemStruct = input.parse()?;
        let error_attr = ErrorAttr::from_attributes(&item.ident, &item.attrs)?;
        Ok(Self {
            name: item.ident,
            fields: item.fields,
            error_attr,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind_fields = self.bind_fields();
        let message = &self.error_attr.message;
        let labels = self.error_attr.labels.iter().flatten();
        let help = self.error_attr.help.as_ref().map(|help| quote! { report.set_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bind_fields

                // labels may mix `&str` and `String`
                let labels: std::vec::Vec<std::string::String> = std::vec![
                    #(std::string::ToString::to_string(&#labels)),*
                ];

                let offset = spans.first().map_or(0, |span| span.start);
                let mut report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message);

                for (text, span) in labels.into_iter().zip(spans) {
                    let label = ariadne::Label::new((src_id, span.clone()))
                        .with_color(smooth_error::EXPR);
                    report.add_label(if text.is_empty() { label } else { label.with_message(text) });
                }

                #help
                report.finish()
            }
        });
    }
}
