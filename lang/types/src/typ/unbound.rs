use derivative::Derivative;
use miette_util::codespan::Span;
use pretty::DocAllocator;
use printer::tokens::QUESTION_MARK;
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::Type;

/// A type name the resolver has not bound yet
///
/// Produced when a type annotation is first read off the syntax tree and
/// replaced during semantic analysis. A well-formed checker never lets an
/// unbound name reach the erasure transforms.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct UnboundType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    /// The unresolved name, as written in the source
    pub name: String,
}

impl UnboundType {
    pub fn from_string(name: &str) -> Self {
        UnboundType { span: None, name: name.to_owned() }
    }
}

impl HasSpan for UnboundType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<UnboundType> for Type {
    fn from(val: UnboundType) -> Self {
        Type::Unbound(val)
    }
}

impl Print for UnboundType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(self.name.clone()).append(QUESTION_MARK)
    }
}

impl ContainsTypeVars for UnboundType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod unbound_tests {
    use printer::PrintToString;

    use super::UnboundType;

    #[test]
    fn print_unbound() {
        assert_eq!(
            UnboundType::from_string("Vector").print_to_string(Default::default()),
            "Vector?".to_string()
        );
    }
}
