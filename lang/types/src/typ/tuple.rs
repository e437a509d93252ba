use derivative::Derivative;
use miette_util::codespan::Span;
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::{Instance, Type};

/// A fixed-length heterogeneous tuple type
///
/// Examples: `()`, `(Int, Str)`
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct TupleType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    pub items: Vec<Type>,
    /// The concrete tuple-class instance this type degrades to when its
    /// per-position precision is discarded, e.g. `Tuple(Int)` for `(Int, Int)`.
    pub fallback: Instance,
}

impl HasSpan for TupleType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<TupleType> for Type {
    fn from(val: TupleType) -> Self {
        Type::Tuple(val)
    }
}

impl Print for TupleType {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let TupleType { span: _, items, fallback: _ } = self;
        items.print(cfg, alloc).align().parens().group()
    }
}

impl ContainsTypeVars for TupleType {
    /// Unlike a callable's fallback, the fallback of a tuple summarizes the
    /// item types and is inspected.
    fn contains_type_vars(&self) -> bool {
        let TupleType { span: _, items, fallback } = self;

        items.contains_type_vars() || fallback.contains_type_vars()
    }
}
