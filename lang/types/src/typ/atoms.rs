use derivative::Derivative;
use miette_util::codespan::Span;
use printer::theme::ThemeExt;
use printer::tokens::{ANY, ERROR, NEVER, NONE, VOID};
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::Type;

// Any
//
//

/// The dynamic type `Any`
///
/// `Any` is compatible with every other type in both directions. The checker
/// assigns it wherever it has no information, e.g. for unannotated
/// parameters or for values crossing over from unchecked code, and every
/// erasure transform replaces lost precision with it.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct AnyType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
}

impl AnyType {
    pub fn new() -> AnyType {
        AnyType { span: None }
    }
}

impl Default for AnyType {
    fn default() -> Self {
        Self::new()
    }
}

impl HasSpan for AnyType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<AnyType> for Type {
    fn from(val: AnyType) -> Self {
        Type::Any(val)
    }
}

impl Print for AnyType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.keyword(ANY)
    }
}

impl ContainsTypeVars for AnyType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}

// Void
//
//

/// The type of calls which return without producing a value
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct VoidType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
}

impl VoidType {
    pub fn new() -> VoidType {
        VoidType { span: None }
    }
}

impl Default for VoidType {
    fn default() -> Self {
        Self::new()
    }
}

impl HasSpan for VoidType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<VoidType> for Type {
    fn from(val: VoidType) -> Self {
        Type::Void(val)
    }
}

impl Print for VoidType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.keyword(VOID)
    }
}

impl ContainsTypeVars for VoidType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}

// None
//
//

/// The type inhabited only by the `none` literal
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct NoneType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
}

impl NoneType {
    pub fn new() -> NoneType {
        NoneType { span: None }
    }
}

impl Default for NoneType {
    fn default() -> Self {
        Self::new()
    }
}

impl HasSpan for NoneType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<NoneType> for Type {
    fn from(val: NoneType) -> Self {
        Type::None(val)
    }
}

impl Print for NoneType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.keyword(NONE)
    }
}

impl ContainsTypeVars for NoneType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}

// Uninhabited
//
//

/// The bottom type `Never`
///
/// `Never` has no values. It is the type of expressions which cannot
/// produce a result, e.g. a call that always raises, and the identity
/// element for unions.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct UninhabitedType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
}

impl UninhabitedType {
    pub fn new() -> UninhabitedType {
        UninhabitedType { span: None }
    }
}

impl Default for UninhabitedType {
    fn default() -> Self {
        Self::new()
    }
}

impl HasSpan for UninhabitedType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<UninhabitedType> for Type {
    fn from(val: UninhabitedType) -> Self {
        Type::Uninhabited(val)
    }
}

impl Print for UninhabitedType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.keyword(NEVER)
    }
}

impl ContainsTypeVars for UninhabitedType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}

// Error
//
//

/// The type of an expression whose checking already failed
///
/// Stands in for the real type so that one error does not cascade into
/// follow-up errors. Transparent to erasure.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct ErrorType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
}

impl ErrorType {
    pub fn new() -> ErrorType {
        ErrorType { span: None }
    }
}

impl Default for ErrorType {
    fn default() -> Self {
        Self::new()
    }
}

impl HasSpan for ErrorType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<ErrorType> for Type {
    fn from(val: ErrorType) -> Self {
        Type::Error(val)
    }
}

impl Print for ErrorType {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.marker(ERROR)
    }
}

impl ContainsTypeVars for ErrorType {
    fn contains_type_vars(&self) -> bool {
        false
    }
}
