use derivative::Derivative;
use miette_util::codespan::Span;
use printer::theme::ThemeExt;
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::ident::TypeVarId;
use crate::{ContainsTypeVars, HasSpan};

use super::Type;

/// A reference to a type variable
///
/// Either a declared generic parameter such as the `T` of the enclosing
/// class or callable, or a unification variable the solver invented while
/// inferring a generic call. The kind is carried by the [TypeVarId].
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct TypeVarType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    /// The display name of the variable, e.g. `T`
    pub name: String,
    pub id: TypeVarId,
}

impl TypeVarType {
    /// A declared generic parameter with the given id.
    pub fn declared(name: &str, id: u64) -> Self {
        TypeVarType { span: None, name: name.to_owned(), id: TypeVarId::declared(id) }
    }

    /// A solver-invented unification variable with the given id.
    pub fn meta(name: &str, id: u64) -> Self {
        TypeVarType { span: None, name: name.to_owned(), id: TypeVarId::meta(id) }
    }
}

impl HasSpan for TypeVarType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<TypeVarType> for Type {
    fn from(val: TypeVarType) -> Self {
        Type::TypeVar(val)
    }
}

impl Print for TypeVarType {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let TypeVarType { span: _, name, id } = self;
        if cfg.print_var_ids {
            alloc.var(name).append(id.print(cfg, alloc))
        } else {
            alloc.var(name)
        }
    }
}

impl ContainsTypeVars for TypeVarType {
    fn contains_type_vars(&self) -> bool {
        true
    }
}
