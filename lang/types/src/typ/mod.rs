use derivative::Derivative;
use miette_util::codespan::Span;
use printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::traits::{ContainsTypeVars, HasSpan};

mod atoms;
mod callable;
mod instance;
mod overloaded;
mod placeholder;
mod tuple;
mod type_list;
mod type_type;
mod type_var;
mod unbound;
mod union;

pub use atoms::*;
pub use callable::*;
pub use instance::*;
pub use overloaded::*;
pub use placeholder::*;
pub use tuple::*;
pub use type_list::*;
pub use type_type::*;
pub use type_var::*;
pub use unbound::*;
pub use union::*;

// Type
//
//

#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub enum Type {
    Unbound(UnboundType),
    Error(ErrorType),
    TypeList(TypeList),
    Any(AnyType),
    Void(VoidType),
    None(NoneType),
    Uninhabited(UninhabitedType),
    Erased(ErasedType),
    Partial(PartialType),
    Instance(Instance),
    TypeVar(TypeVarType),
    Callable(CallableType),
    Overloaded(Overloaded),
    Tuple(TupleType),
    Union(UnionType),
    TypeType(TypeType),
}

impl HasSpan for Type {
    fn span(&self) -> Option<Span> {
        match self {
            Type::Unbound(t) => t.span(),
            Type::Error(t) => t.span(),
            Type::TypeList(t) => t.span(),
            Type::Any(t) => t.span(),
            Type::Void(t) => t.span(),
            Type::None(t) => t.span(),
            Type::Uninhabited(t) => t.span(),
            Type::Erased(t) => t.span(),
            Type::Partial(t) => t.span(),
            Type::Instance(t) => t.span(),
            Type::TypeVar(t) => t.span(),
            Type::Callable(t) => t.span(),
            Type::Overloaded(t) => t.span(),
            Type::Tuple(t) => t.span(),
            Type::Union(t) => t.span(),
            Type::TypeType(t) => t.span(),
        }
    }
}

impl Print for Type {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        match self {
            Type::Unbound(t) => t.print_prec(cfg, alloc, prec),
            Type::Error(t) => t.print_prec(cfg, alloc, prec),
            Type::TypeList(t) => t.print_prec(cfg, alloc, prec),
            Type::Any(t) => t.print_prec(cfg, alloc, prec),
            Type::Void(t) => t.print_prec(cfg, alloc, prec),
            Type::None(t) => t.print_prec(cfg, alloc, prec),
            Type::Uninhabited(t) => t.print_prec(cfg, alloc, prec),
            Type::Erased(t) => t.print_prec(cfg, alloc, prec),
            Type::Partial(t) => t.print_prec(cfg, alloc, prec),
            Type::Instance(t) => t.print_prec(cfg, alloc, prec),
            Type::TypeVar(t) => t.print_prec(cfg, alloc, prec),
            Type::Callable(t) => t.print_prec(cfg, alloc, prec),
            Type::Overloaded(t) => t.print_prec(cfg, alloc, prec),
            Type::Tuple(t) => t.print_prec(cfg, alloc, prec),
            Type::Union(t) => t.print_prec(cfg, alloc, prec),
            Type::TypeType(t) => t.print_prec(cfg, alloc, prec),
        }
    }
}

impl ContainsTypeVars for Type {
    fn contains_type_vars(&self) -> bool {
        match self {
            Type::Unbound(unbound) => unbound.contains_type_vars(),
            Type::Error(error) => error.contains_type_vars(),
            Type::TypeList(type_list) => type_list.contains_type_vars(),
            Type::Any(any) => any.contains_type_vars(),
            Type::Void(void) => void.contains_type_vars(),
            Type::None(none) => none.contains_type_vars(),
            Type::Uninhabited(uninhabited) => uninhabited.contains_type_vars(),
            Type::Erased(erased) => erased.contains_type_vars(),
            Type::Partial(partial) => partial.contains_type_vars(),
            Type::Instance(instance) => instance.contains_type_vars(),
            Type::TypeVar(type_var) => type_var.contains_type_vars(),
            Type::Callable(callable) => callable.contains_type_vars(),
            Type::Overloaded(overloaded) => overloaded.contains_type_vars(),
            Type::Tuple(tuple) => tuple.contains_type_vars(),
            Type::Union(union) => union.contains_type_vars(),
            Type::TypeType(type_type) => type_type.contains_type_vars(),
        }
    }
}
