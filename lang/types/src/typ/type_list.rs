use derivative::Derivative;
use miette_util::codespan::Span;
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::Type;

/// A bracketed list of types, e.g. `[Int, Str]`
///
/// This is a syntactic intermediate form which only exists while a
/// composite annotation is taken apart during semantic analysis; it is not
/// a valid type on its own and must not reach the erasure transforms.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct TypeList {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    pub items: Vec<Type>,
}

impl HasSpan for TypeList {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<TypeList> for Type {
    fn from(val: TypeList) -> Self {
        Type::TypeList(val)
    }
}

impl Print for TypeList {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let TypeList { span: _, items } = self;
        items.print(cfg, alloc).brackets()
    }
}

impl ContainsTypeVars for TypeList {
    fn contains_type_vars(&self) -> bool {
        let TypeList { span: _, items } = self;

        items.contains_type_vars()
    }
}

#[cfg(test)]
mod type_list_tests {
    use printer::PrintToString;
    use url::Url;

    use crate::ident::ClassName;
    use crate::typ::{Instance, Type};

    use super::TypeList;

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
    fn print_type_list() {
        let list = TypeList { span: None, items: vec![simple("Int"), simple("Str")] };
        assert_eq!(list.print_to_string(Default::default()), "[Int, Str]".to_string());
    }
}
