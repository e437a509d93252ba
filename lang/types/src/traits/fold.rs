use crate::typ::*;

/// A structure-preserving rewrite of a type
///
/// Every method has a default implementation which rebuilds the variant from
/// its folded components, so an implementor only overrides the variants it
/// treats specially. The entry point `fold_type` dispatches exhaustively;
/// adding a variant to [Type] therefore forces every transform to decide on
/// a rule for it.
///
/// Instances and callables fold to `Instance` and `CallableType` rather than
/// to [Type] so that a tuple can fold its fallback and an overloaded type can
/// fold its alternatives without losing their shape.
pub trait TypeFolder: Sized {
    fn fold_type(&mut self, typ: &Type) -> Type {
        match typ {
            Type::Unbound(t) => self.fold_unbound(t),
            Type::Error(t) => self.fold_error(t),
            Type::TypeList(t) => self.fold_type_list(t),
            Type::Any(t) => self.fold_any(t),
            Type::Void(t) => self.fold_void(t),
            Type::None(t) => self.fold_none(t),
            Type::Uninhabited(t) => self.fold_uninhabited(t),
            Type::Erased(t) => self.fold_erased(t),
            Type::Partial(t) => self.fold_partial(t),
            Type::Instance(t) => Type::Instance(self.fold_instance(t)),
            Type::TypeVar(t) => self.fold_type_var(t),
            Type::Callable(t) => Type::Callable(self.fold_callable(t)),
            Type::Overloaded(t) => self.fold_overloaded(t),
            Type::Tuple(t) => self.fold_tuple(t),
            Type::Union(t) => self.fold_union(t),
            Type::TypeType(t) => self.fold_type_type(t),
        }
    }

    fn fold_types(&mut self, typs: &[Type]) -> Vec<Type> {
        typs.iter().map(|typ| self.fold_type(typ)).collect()
    }

    fn fold_unbound(&mut self, typ: &UnboundType) -> Type {
        typ.clone().into()
    }

    fn fold_error(&mut self, typ: &ErrorType) -> Type {
        typ.clone().into()
    }

    fn fold_type_list(&mut self, typ: &TypeList) -> Type {
        let TypeList { span, items } = typ;
        TypeList { span: *span, items: self.fold_types(items) }.into()
    }

    fn fold_any(&mut self, typ: &AnyType) -> Type {
        typ.clone().into()
    }

    fn fold_void(&mut self, typ: &VoidType) -> Type {
        typ.clone().into()
    }

    fn fold_none(&mut self, typ: &NoneType) -> Type {
        typ.clone().into()
    }

    fn fold_uninhabited(&mut self, typ: &UninhabitedType) -> Type {
        typ.clone().into()
    }

    fn fold_erased(&mut self, typ: &ErasedType) -> Type {
        typ.clone().into()
    }

    fn fold_partial(&mut self, typ: &PartialType) -> Type {
        typ.clone().into()
    }

    fn fold_instance(&mut self, typ: &Instance) -> Instance {
        let Instance { span, name, args } = typ;
        Instance { span: *span, name: name.clone(), args: self.fold_types(args) }
    }

    fn fold_type_var(&mut self, typ: &TypeVarType) -> Type {
        typ.clone().into()
    }

    /// The fallback of a callable is a plain class reference and is copied,
    /// not folded.
    fn fold_callable(&mut self, typ: &CallableType) -> CallableType {
        let CallableType { span, params, ret_typ, fallback } = typ;
        CallableType {
            span: *span,
            params: params.iter().map(|param| self.fold_param(param)).collect(),
            ret_typ: Box::new(self.fold_type(ret_typ)),
            fallback: fallback.clone(),
        }
    }

    fn fold_param(&mut self, param: &Param) -> Param {
        let Param { name, kind, typ } = param;
        Param { name: name.clone(), kind: *kind, typ: self.fold_type(typ) }
    }

    fn fold_overloaded(&mut self, typ: &Overloaded) -> Type {
        let Overloaded { span, items } = typ;
        let items = items.iter().map(|item| self.fold_callable(item)).collect();
        Overloaded { span: *span, items }.into()
    }

    /// The fallback of a tuple carries the item types of the concrete tuple
    /// class and is folded along with the items.
    fn fold_tuple(&mut self, typ: &TupleType) -> Type {
        let TupleType { span, items, fallback } = typ;
        TupleType {
            span: *span,
            items: self.fold_types(items),
            fallback: self.fold_instance(fallback),
        }
        .into()
    }

    fn fold_union(&mut self, typ: &UnionType) -> Type {
        let UnionType { span, items } = typ;
        UnionType { span: *span, items: self.fold_types(items) }.into()
    }

    fn fold_type_type(&mut self, typ: &TypeType) -> Type {
        let TypeType { span, item } = typ;
        TypeType { span: *span, item: Box::new(self.fold_type(item)) }.into()
    }
}
