use derivative::Derivative;
use miette_util::codespan::Span;
use pretty::DocAllocator;
use printer::tokens::AMPERSAND;
use printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::{CallableType, Type};

/// The type of a callable with several alternative signatures
///
/// The list of alternatives is never empty, and the alternatives are kept in
/// declaration order: the first one is the primary candidate a caller
/// resolves against when the alternatives cannot be distinguished.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Overloaded {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    pub items: Vec<CallableType>,
}

impl Overloaded {
    /// The primary alternative.
    pub fn primary(&self) -> &CallableType {
        &self.items[0]
    }
}

impl HasSpan for Overloaded {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<Overloaded> for Type {
    fn from(val: Overloaded) -> Self {
        Type::Overloaded(val)
    }
}

impl Print for Overloaded {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let Overloaded { span: _, items } = self;
        let sep = alloc.space().append(AMPERSAND).append(alloc.space());
        let doc = alloc.intersperse(items.iter().map(|item| item.print_prec(cfg, alloc, 1)), sep);
        if prec == 0 { doc } else { doc.parens() }
    }
}

impl ContainsTypeVars for Overloaded {
    fn contains_type_vars(&self) -> bool {
        let Overloaded { span: _, items } = self;

        items.contains_type_vars()
    }
}

#[cfg(test)]
mod overloaded_tests {
    use printer::PrintToString;
    use url::Url;

    use crate::ident::ClassName;
    use crate::typ::{CallableType, Instance, Param, Type};

    use super::Overloaded;

    /// Create a class name for testing.
    fn class(id: &str) -> ClassName {
        ClassName {
            span: None,
            id: id.to_owned(),
            uri: Url::parse("inmemory:///scratch.vl").unwrap(),
        }
    }

    /// Create an instance of a class without type arguments.
    fn simple(id: &str) -> Type {
        Instance { span: None, name: class(id), args: vec![] }.into()
    }

    #[test]
    fn print_overloaded() {
        let overloaded = Overloaded {
            span: None,
            items: vec![
                CallableType {
                    span: None,
                    params: vec![Param::positional(simple("Int"))],
                    ret_typ: Box::new(simple("Str")),
                    fallback: Instance { span: None, name: class("Function"), args: vec![] },
                },
                CallableType {
                    span: None,
                    params: vec![],
                    ret_typ: Box::new(simple("Str")),
                    fallback: Instance { span: None, name: class("Function"), args: vec![] },
                },
            ],
        };
        assert_eq!(
            overloaded.print_to_string(Default::default()),
            "((Int) -> Str) & (() -> Str)".to_string()
        );
    }
}
