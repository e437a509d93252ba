use derivative::Derivative;
use miette_util::codespan::Span;
use pretty::DocAllocator;
use printer::tokens::{ARROW, COLON, QUESTION_MARK, STAR};
use printer::util::print_comma_separated;
use printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::{ContainsTypeVars, HasSpan};

use super::{Instance, Type};

// Parameters
//
//

/// How a parameter position accepts its argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// A required parameter
    Positional,
    /// A parameter with a default, which the call may omit
    Optional,
    /// A `*rest` parameter collecting the remaining arguments
    Variadic,
}

/// A single parameter of a callable type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    /// The parameter name, if callers may pass the argument by name
    pub name: Option<String>,
    pub kind: ParamKind,
    pub typ: Type,
}

impl Param {
    /// A required positional parameter without a name.
    pub fn positional(typ: Type) -> Self {
        Param { name: None, kind: ParamKind::Positional, typ }
    }
}

impl Print for Param {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Param { name, kind, typ } = self;
        let prefix = match kind {
            ParamKind::Variadic => alloc.text(STAR),
            ParamKind::Positional | ParamKind::Optional => alloc.nil(),
        };
        match name {
            Some(name) => {
                let name = match kind {
                    ParamKind::Optional => alloc.text(name.clone()).append(QUESTION_MARK),
                    ParamKind::Positional | ParamKind::Variadic => alloc.text(name.clone()),
                };
                prefix
                    .append(name)
                    .append(COLON)
                    .append(alloc.space())
                    .append(typ.print(cfg, alloc))
            }
            None => {
                let typ = typ.print(cfg, alloc);
                match kind {
                    ParamKind::Optional => prefix.append(typ).append(QUESTION_MARK),
                    ParamKind::Positional | ParamKind::Variadic => prefix.append(typ),
                }
            }
        }
    }
}

impl ContainsTypeVars for Param {
    fn contains_type_vars(&self) -> bool {
        let Param { name: _, kind: _, typ } = self;

        typ.contains_type_vars()
    }
}

// Callable
//
//

/// The type of a callable value
///
/// Examples: `() -> Void`, `(Int, y: Str, *rest: Int) -> Bool`
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct CallableType {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    pub params: Vec<Param>,
    pub ret_typ: Box<Type>,
    /// The concrete class of callable values, e.g. `Function`. Overload
    /// resolution keys on this class when the signature is erased, so every
    /// transform must carry it over.
    pub fallback: Instance,
}

impl CallableType {
    pub fn to_typ(&self) -> Type {
        Type::Callable(self.clone())
    }
}

impl HasSpan for CallableType {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<CallableType> for Type {
    fn from(val: CallableType) -> Self {
        Type::Callable(val)
    }
}

impl Print for CallableType {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let CallableType { span: _, params, ret_typ, fallback: _ } = self;
        let fun = print_comma_separated(params, cfg, alloc)
            .align()
            .parens()
            .group()
            .append(alloc.space())
            .append(ARROW)
            .append(alloc.space())
            .append(ret_typ.print(cfg, alloc));
        if prec == 0 { fun } else { fun.parens() }
    }
}

impl ContainsTypeVars for CallableType {
    /// The fallback is a plain class reference and is not inspected.
    fn contains_type_vars(&self) -> bool {
        let CallableType { span: _, params, ret_typ, fallback: _ } = self;

        params.contains_type_vars() || ret_typ.contains_type_vars()
    }
}
