use derivative::Derivative;
use miette_util::codespan::Span;
use printer::theme::ThemeExt;
use printer::tokens::{ERASED, PARTIAL};
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::Type;

// Erased
//
//

/// A placeholder the solver substitutes for contextually erased types
/// while inferring lambda expressions. Must be resolved before the checker
/// hands a type to any consumer; reaching an erasure transform is a bug in
/// the caller.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct ErasedType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
}

impl ErasedType {
    pub fn new() -> ErasedType {
        ErasedType { span: None }
    }
}

impl Default for ErasedType {
    fn default() -> Self {
        Self::new()
    }
}

impl HasSpan for ErasedType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<ErasedType> for Type {
    fn from(val: ErasedType) -> Self {
        Type::Erased(val)
    }
}

impl Print for ErasedType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.marker(ERASED)
    }
}

impl ContainsTypeVars for ErasedType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}

// Partial
//
//

/// The not-yet-complete type of a local binding whose initializer did not
/// determine it, e.g. a binding initialized to `none` or to an empty
/// collection. Later assignments complete it. Like [ErasedType], it must
/// never escape inference.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct PartialType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
}

impl PartialType {
    pub fn new() -> PartialType {
        PartialType { span: None }
    }
}

impl Default for PartialType {
    fn default() -> Self {
        Self::new()
    }
}

impl HasSpan for PartialType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<PartialType> for Type {
    fn from(val: PartialType) -> Self {
        Type::Partial(val)
    }
}

impl Print for PartialType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.marker(PARTIAL)
    }
}

impl ContainsTypeVars for PartialType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}
