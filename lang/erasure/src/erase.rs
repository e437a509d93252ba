//! Erasing type variables from a type

use log::trace;

use printer::PrintToString;
use types::*;

use crate::result::{ErasureError, ErasureResult};

/// Erase any type variables from a type.
///
/// Tuple types are replaced by their concrete fallback class, and callable
/// types by the empty signature over their fallback class, so a successful
/// erasure never mentions a type variable.
///
/// Examples:
///
/// ```text
/// A           |->  A
/// B(T)        |->  B(Any)
/// (Int, Str)  |->  Tuple(Any)
/// (T) -> T    |->  () -> Void
/// ```
pub fn erase_type(typ: &Type) -> ErasureResult {
    trace!("Erasing type: {}", typ.print_trace());

    match typ {
        Type::Unbound(t) => Err(ErasureError::unresolved_type(t)),
        Type::Error(t) => Ok(t.clone().into()),
        Type::TypeList(t) => Err(ErasureError::unresolved_type(t)),
        Type::Any(t) => Ok(t.clone().into()),
        Type::Void(t) => Ok(t.clone().into()),
        Type::None(t) => Ok(t.clone().into()),
        Type::Uninhabited(t) => Ok(t.clone().into()),
        Type::Erased(t) => Err(ErasureError::placeholder_escaped(t)),
        Type::Partial(t) => Err(ErasureError::placeholder_escaped(t)),
        Type::Instance(t) => Ok(erase_instance(t).into()),
        Type::TypeVar(_) => Ok(AnyType::new().into()),
        Type::Callable(t) => Ok(erase_callable(t).into()),
        Type::Overloaded(t) => Ok(erase_callable(t.primary()).into()),
        Type::Tuple(t) => Ok(erase_instance(&t.fallback).into()),
        // TODO: A union with a single alternative could erase to that alternative instead.
        Type::Union(_) => Ok(AnyType::new().into()),
        Type::TypeType(t) => {
            let TypeType { span, item } = t;
            Ok(TypeType { span: *span, item: Box::new(erase_type(item)?) }.into())
        }
    }
}

/// Replace every type argument of an instance with `Any`.
///
/// The arguments are replaced wholesale rather than erased recursively, so
/// the arity of the class is preserved.
fn erase_instance(typ: &Instance) -> Instance {
    let Instance { span, name, args } = typ;
    let args = args.iter().map(|_| AnyType::new().into()).collect();
    Instance { span: *span, name: name.clone(), args }
}

/// Replace the signature of a callable with the empty signature `() -> Void`.
///
/// The parameters and the return type are dropped; the fallback class is
/// carried over unchanged.
fn erase_callable(typ: &CallableType) -> CallableType {
    let CallableType { span, fallback, .. } = typ;
    CallableType {
        span: *span,
        params: vec![],
        ret_typ: Box::new(VoidType::new().into()),
        fallback: fallback.clone(),
    }
}
