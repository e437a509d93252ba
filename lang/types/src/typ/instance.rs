use derivative::Derivative;
use miette_util::codespan::Span;
use printer::theme::ThemeExt;
use printer::util::print_comma_separated;
use printer::{Alloc, Builder, Print, PrintCfg};

use crate::ident::ClassName;
use crate::{ContainsTypeVars, HasSpan};

use super::Type;

/// A class applied to type arguments
///
/// Examples: `Int`, `List(Str)`, `Dict(Str, List(Int))`
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Instance {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Option<Span>,
    /// Name of the class
    pub name: ClassName,
    /// Type arguments of the class
    pub args: Vec<Type>,
}

impl Instance {
    pub fn to_typ(&self) -> Type {
        Type::Instance(self.clone())
    }

    /// An instance type is simple if the list of arguments is empty.
    pub fn is_simple(&self) -> bool {
        self.args.is_empty()
    }
}

impl HasSpan for Instance {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl From<Instance> for Type {
    fn from(val: Instance) -> Self {
        Type::Instance(val)
    }
}

impl Print for Instance {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Instance { span: _, name, args } = self;
        if args.is_empty() {
            alloc.typ(&name.id)
        } else {
            alloc
                .typ(&name.id)
                .append(print_comma_separated(args, cfg, alloc).align().parens().group())
        }
    }
}

impl ContainsTypeVars for Instance {
    fn contains_type_vars(&self) -> bool {
        let Instance { span: _, name: _, args } = self;

        args.contains_type_vars()
    }
}
