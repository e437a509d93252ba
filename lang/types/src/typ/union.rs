use derivative::Derivative;
use miette_util::codespan::Span;
use pretty::DocAllocator;
use printer::tokens::PIPE;
use printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::Type;

/// A union of alternatives
///
/// Examples: `Int | Str`, `Str | None`
///
/// The order of the alternatives carries no meaning.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct UnionType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    pub items: Vec<Type>,
}

impl HasSpan for UnionType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<UnionType> for Type {
    fn from(val: UnionType) -> Self {
        Type::Union(val)
    }
}

impl Print for UnionType {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let UnionType { span: _, items } = self;
        let sep = alloc.space().append(PIPE).append(alloc.space());
        let doc = alloc.intersperse(items.iter().map(|item| item.print_prec(cfg, alloc, 1)), sep);
        if prec == 0 { doc } else { doc.parens() }
    }
}

impl ContainsTypeVars for UnionType {
    fn contains_type_vars(&self) -> bool {
        let UnionType { span: _, items } = self;

        items.contains_type_vars()
    }
}

#[cfg(test)]
mod union_tests {
    use printer::PrintToString;
    use url::Url;

    use crate::ident::ClassName;
    use crate::typ::{CallableType, Instance, NoneType, VoidType};

    use super::{Type, UnionType};

    /// Create an instance of a class without type arguments.
    fn simple(id: &str) -> Type {
        Instance {
            span: None,
            name: ClassName {
                span: None,
                id: id.to_owned(),
                uri: Url::parse("inmemory:///scratch.vl").unwrap(),
            },
            args: vec![],
        }
        .into()
    }

    #[test]
    fn print_union() {
        let union = UnionType { span: None, items: vec![simple("Int"), simple("Str")] };
        assert_eq!(union.print_to_string(Default::default()), "Int | Str".to_string());
    }

    #[test]
    fn print_nested_union() {
        let inner = UnionType { span: None, items: vec![simple("Str"), NoneType::new().into()] };
        let outer = UnionType { span: None, items: vec![simple("Int"), inner.into()] };
        assert_eq!(outer.print_to_string(Default::default()), "Int | (Str | None)".to_string());
    }

    #[test]
    fn print_callable_alternative() {
        let callable = CallableType {
            span: None,
            params: vec![],
            ret_typ: Box::new(VoidType::new().into()),
            fallback: Instance {
                span: None,
                name: ClassName {
                    span: None,
                    id: "Function".to_owned(),
                    uri: Url::parse("inmemory:///scratch.vl").unwrap(),
                },
                args: vec![],
            },
        };
        let union = UnionType { span: None, items: vec![callable.into(), NoneType::new().into()] };
        assert_eq!(union.print_to_string(Default::default()), "(() -> Void) | None".to_string());
    }
}
