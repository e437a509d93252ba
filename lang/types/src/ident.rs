use std::fmt;

use derivative::Derivative;
use miette_util::codespan::Span;
use pretty::DocAllocator;
use printer::{Alloc, Builder, Print, PrintCfg, tokens::HASH};
use url::Url;

use crate::traits::HasSpan;

// Class names (bound occurence)
//
//

/// A bound occurence of a class name
///
/// E.g. the head of an instance type, or the fallback class of a tuple or callable
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct ClassName {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    pub id: String,
    /// The URI of the module where the class was defined
    pub uri: Url,
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl HasSpan for ClassName {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl Print for ClassName {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(self.id.clone())
    }
}

// Type variables
//
//

/// Whether a type variable was declared by the programmer or invented by the
/// solver during inference.
#[derive(Debug, Clone, Copy, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub enum TypeVarKind {
    /// A generic parameter declared in the source, e.g. `T` in `class List(T)`.
    Declared,
    /// A unification variable invented by the solver while inferring the
    /// arguments of a generic call. Never written by the programmer.
    Meta,
}

/// The identity of a type variable
///
/// Two variables are the same variable exactly if their ids and kinds agree;
/// the display name is cosmetic. Declared parameters and solver-invented
/// unification variables draw from separate id namespaces.
#[derive(Debug, Clone, Copy, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct TypeVarId {
    pub kind: TypeVarKind,
    pub id: u64,
}

impl TypeVarId {
    pub fn declared(id: u64) -> Self {
        TypeVarId { kind: TypeVarKind::Declared, id }
    }

    pub fn meta(id: u64) -> Self {
        TypeVarId { kind: TypeVarKind::Meta, id }
    }

    /// Check whether this is a unification variable invented by the solver.
    pub fn is_meta_var(&self) -> bool {
        self.kind == TypeVarKind::Meta
    }

    /// Check whether this is a generic parameter declared in the source.
    pub fn is_declared(&self) -> bool {
        self.kind == TypeVarKind::Declared
    }
}

impl fmt::Display for TypeVarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeVarKind::Declared => write!(f, "{}", self.id),
            TypeVarKind::Meta => write!(f, "?{}", self.id),
        }
    }
}

impl Print for TypeVarId {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(HASH).append(alloc.text(format!("{self}")))
    }
}

#[cfg(test)]
mod ident_tests {
    use url::Url;

    use super::{ClassName, TypeVarId};

    /// Create a class name defined in the given module.
    fn class_in(id: &str, uri: &str) -> ClassName {
        ClassName { span: None, id: id.to_owned(), uri: Url::parse(uri).unwrap() }
    }

    #[test]
    fn display_type_var_ids() {
        assert_eq!(format!("{}", TypeVarId::declared(3)), "3".to_string());
        assert_eq!(format!("{}", TypeVarId::meta(3)), "?3".to_string());
    }

    #[test]
    fn type_var_id_kinds() {
        assert!(TypeVarId::declared(0).is_declared());
        assert!(!TypeVarId::declared(0).is_meta_var());
        assert!(TypeVarId::meta(0).is_meta_var());
        assert_ne!(TypeVarId::declared(7), TypeVarId::meta(7));
    }

    #[test]
    fn class_names_compare_by_module() {
        let here = class_in("Int", "inmemory:///scratch.vl");
        let there = class_in("Int", "inmemory:///other.vl");
        assert_eq!(here, class_in("Int", "inmemory:///scratch.vl"));
        assert_ne!(here, there);
    }
}
