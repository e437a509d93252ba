//! Removing generic type arguments from a type

use log::trace;

use printer::PrintToString;
use types::*;

/// Remove generic type arguments and type variables from a type.
///
/// In contrast to [erase_type](crate::erase::erase_type), the outer shape
/// of the type is kept: callables, tuples, overloads and unions are rebuilt
/// with erased components instead of collapsing. An absent type passes
/// through unchanged.
pub fn erase_generic_types(typ: Option<&Type>) -> Option<Type> {
    let typ = typ?;
    trace!("Erasing generic types from: {}", typ.print_trace());

    Some(GenericTypeEraser.fold_type(typ))
}

/// Removes generic class arguments and type variables while preserving the
/// shape of the type.
// TODO: Decide how the type parameters of a generic callable should be erased.
struct GenericTypeEraser;

impl TypeFolder for GenericTypeEraser {
    fn fold_type_var(&mut self, _typ: &TypeVarType) -> Type {
        AnyType::new().into()
    }

    fn fold_instance(&mut self, typ: &Instance) -> Instance {
        let Instance { span, name, .. } = typ;
        Instance { span: *span, name: name.clone(), args: vec![] }
    }
}

#[cfg(test)]
mod generic_tests {
    use miette_util::codespan::Span;
    use url::Url;

    use types::*;

    use super::erase_generic_types;

    /// Create a class name for testing.
    fn class(id: &str) -> ClassName {
        ClassName {
            span: None,
            id: id.to_owned(),
            uri: Url::parse("inmemory:///scratch.vl").unwrap(),
        }
    }

    /// Create an instance of a class without type arguments.
    fn simple(id: &str) -> Type {
        Instance { span: None, name: class(id), args: vec![] }.into()
    }

    #[test]
    fn absent_types_pass_through() {
        assert_eq!(erase_generic_types(None), None);
    }

    #[test]
    fn instances_lose_their_arguments() {
        let typ: Type = Instance {
            span: Some(Span::new(0, 9)),
            name: class("List"),
            args: vec![simple("Int")],
        }
        .into();
        let result = erase_generic_types(Some(&typ)).unwrap();
        assert_eq!(result, Instance { span: None, name: class("List"), args: vec![] }.into());
        assert_eq!(result.span(), Some(Span::new(0, 9)));
    }

    #[test]
    fn type_vars_are_replaced_with_any() {
        let typ: Type = TypeVarType::declared("T", 0).into();
        assert_eq!(erase_generic_types(Some(&typ)), Some(AnyType::new().into()));
    }

    #[test]
    fn callables_keep_their_shape() {
        let typ: Type = CallableType {
            span: None,
            params: vec![
                Param::positional(TypeVarType::declared("T", 0).into()),
                Param { name: Some("y".to_owned()), kind: ParamKind::Optional, typ: simple("Str") },
            ],
            ret_typ: Box::new(
                Instance {
                    span: None,
                    name: class("List"),
                    args: vec![TypeVarType::declared("T", 0).into()],
                }
                .into(),
            ),
            fallback: Instance { span: None, name: class("Function"), args: vec![] },
        }
        .into();
        let result = erase_generic_types(Some(&typ)).unwrap();
        let Type::Callable(result) = result else { panic!("expected a callable") };
        assert_eq!(result.params.len(), 2);
        assert_eq!(result.params[0].typ, AnyType::new().into());
        assert_eq!(result.params[1].name, Some("y".to_owned()));
        assert_eq!(result.params[1].kind, ParamKind::Optional);
        let expected_ret = Instance { span: None, name: class("List"), args: vec![] };
        assert_eq!(*result.ret_typ, expected_ret.into());
        assert_eq!(result.fallback, Instance { span: None, name: class("Function"), args: vec![] });
    }

    #[test]
    fn unions_are_rebuilt() {
        let typ: Type = UnionType {
            span: None,
            items: vec![TypeVarType::declared("T", 0).into(), simple("Int")],
        }
        .into();
        let expected: Type =
            UnionType { span: None, items: vec![AnyType::new().into(), simple("Int")] }.into();
        assert_eq!(erase_generic_types(Some(&typ)), Some(expected));
    }

    #[test]
    fn tuples_are_rebuilt() {
        let typ: Type = TupleType {
            span: None,
            items: vec![TypeVarType::declared("T", 0).into(), simple("Int")],
            fallback: Instance {
                span: None,
                name: class("Tuple"),
                args: vec![TypeVarType::declared("T", 0).into()],
            },
        }
        .into();
        let result = erase_generic_types(Some(&typ)).unwrap();
        let Type::Tuple(result) = result else { panic!("expected a tuple") };
        assert_eq!(result.items, vec![AnyType::new().into(), simple("Int")]);
        assert_eq!(result.fallback, Instance { span: None, name: class("Tuple"), args: vec![] });
    }

    #[test]
    fn placeholders_pass_through() {
        for typ in [Type::from(ErasedType::new()), PartialType::new().into()] {
            assert_eq!(erase_generic_types(Some(&typ)), Some(typ));
        }
    }
}
