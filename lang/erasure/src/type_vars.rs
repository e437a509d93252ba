//! Substituting type variables in a type

use log::trace;

use printer::PrintToString;
use types::*;

/// Replace every type variable accepted by `select` with `replacement`.
///
/// The replacement is inserted as it is and keeps its own span rather than
/// taking over the span of the variable it stands in for. All other
/// variants are rebuilt unchanged, with instance arguments substituted
/// recursively.
pub fn substitute_type_vars<F>(typ: &Type, select: F, replacement: &Type) -> Type
where
    F: FnMut(&TypeVarId) -> bool,
{
    trace!("Substituting type variables in: {}", typ.print_trace());
    trace!("replacement = {}", replacement.print_trace());

    TypeVarEraser { select, replacement }.fold_type(typ)
}

/// Replace type variables with `Any`.
///
/// Only the variables listed in `ids_to_erase` are replaced, or all of them
/// when `ids_to_erase` is `None`.
pub fn erase_type_vars(typ: &Type, ids_to_erase: Option<&HashSet<TypeVarId>>) -> Type {
    let replacement = AnyType::new().into();
    substitute_type_vars(
        typ,
        |id| ids_to_erase.map_or(true, |ids| ids.contains(id)),
        &replacement,
    )
}

/// Replace every meta variable with `target_typ`, leaving declared type
/// parameters untouched.
///
/// This is how the solution of a unification variable is written back into
/// a type.
pub fn replace_meta_vars(typ: &Type, target_typ: &Type) -> Type {
    substitute_type_vars(typ, TypeVarId::is_meta_var, target_typ)
}

/// Replaces the type variables selected by a predicate with a fixed
/// replacement type.
struct TypeVarEraser<'a, F> {
    select: F,
    replacement: &'a Type,
}

impl<F: FnMut(&TypeVarId) -> bool> TypeFolder for TypeVarEraser<'_, F> {
    fn fold_type_var(&mut self, typ: &TypeVarType) -> Type {
        if (self.select)(&typ.id) {
            self.replacement.clone()
        } else {
            typ.clone().into()
        }
    }
}
