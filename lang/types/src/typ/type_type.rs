use derivative::Derivative;
use miette_util::codespan::Span;
use printer::theme::ThemeExt;
use printer::tokens::TYPE;
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::Type;

/// The type of the class object of a type
///
/// `Type(C)` is the type of the value `C` itself, as opposed to the type of
/// its instances. Examples: `Type(Int)`, `Type(T)` for the class object of
/// whatever `T` stands for.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct TypeType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    pub item: Box<Type>,
}

impl HasSpan for TypeType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<TypeType> for Type {
    fn from(val: TypeType) -> Self {
        Type::TypeType(val)
    }
}

impl Print for TypeType {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let TypeType { span: _, item } = self;
        alloc.keyword(TYPE).append(item.print(cfg, alloc).parens())
    }
}

impl ContainsTypeVars for TypeType {
    fn contains_type_vars(&self) -> bool {
        let TypeType { span: _, item } = self;

        item.contains_type_vars()
    }
}

#[cfg(test)]
mod type_type_tests {
    use printer::PrintToString;
    use url::Url;

    use crate::ident::ClassName;
    use crate::typ::Instance;

    use super::TypeType;

    #[test]
    fn print_type_type() {
        let int = Instance {
            span: None,
            name: ClassName {
                span: None,
                id: "Int".to_owned(),
                uri: Url::parse("inmemory:///scratch.vl").unwrap(),
            },
            args: vec![],
        };
        let type_type = TypeType { span: None, item: Box::new(int.into()) };
        assert_eq!(type_type.print_to_string(Default::default()), "Type(Int)".to_string());
    }
}
