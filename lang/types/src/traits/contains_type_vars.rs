pub trait ContainsTypeVars {
    /// Whether the type or any of its components contains a type variable
    fn contains_type_vars(&self) -> bool;
}

impl<T: ContainsTypeVars> ContainsTypeVars for Vec<T> {
    fn contains_type_vars(&self) -> bool {
        self.iter().any(|x| x.contains_type_vars())
    }
}

impl<T: ContainsTypeVars> ContainsTypeVars for Box<T> {
    fn contains_type_vars(&self) -> bool {
        self.as_ref().contains_type_vars()
    }
}

impl<T: ContainsTypeVars> ContainsTypeVars for Option<T> {
    fn contains_type_vars(&self) -> bool {
        self.as_ref().map_or(false, |x| x.contains_type_vars())
    }
}

#[cfg(test)]
mod contains_type_vars_tests {
    use url::Url;

    use crate::ident::ClassName;
    use crate::typ::*;

    use super::ContainsTypeVars;

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
    fn leaves_contain_no_type_vars() {
        assert!(!Type::from(AnyType::new()).contains_type_vars());
        assert!(!Type::from(VoidType::new()).contains_type_vars());
        assert!(!Type::from(NoneType::new()).contains_type_vars());
        assert!(!Type::from(UninhabitedType::new()).contains_type_vars());
        assert!(!Type::from(ErrorType::new()).contains_type_vars());
        assert!(!Type::from(ErasedType::new()).contains_type_vars());
        assert!(!Type::from(PartialType::new()).contains_type_vars());
        assert!(!Type::from(UnboundType::from_string("Vector")).contains_type_vars());
    }

    #[test]
    fn type_vars_are_found_in_components() {
        let var: Type = TypeVarType::declared("T", 0).into();
        assert!(var.contains_type_vars());

        let list: Type =
            Instance { span: None, name: class("List"), args: vec![var.clone()] }.into();
        assert!(list.contains_type_vars());
        assert!(!simple("Int").contains_type_vars());

        let nested: Type = TypeType {
            span: None,
            item: Box::new(UnionType { span: None, items: vec![simple("Int"), var] }.into()),
        }
        .into();
        assert!(nested.contains_type_vars());
    }

    #[test]
    fn callable_fallback_is_not_inspected() {
        let callable: Type = CallableType {
            span: None,
            params: vec![Param::positional(simple("Int"))],
            ret_typ: Box::new(simple("Str")),
            fallback: Instance {
                span: None,
                name: class("Function"),
                args: vec![TypeVarType::declared("T", 0).into()],
            },
        }
        .into();
        assert!(!callable.contains_type_vars());
    }

    #[test]
    fn tuple_fallback_is_inspected() {
        let tuple: Type = TupleType {
            span: None,
            items: vec![simple("Int")],
            fallback: Instance {
                span: None,
                name: class("Tuple"),
                args: vec![TypeVarType::declared("T", 0).into()],
            },
        }
        .into();
        assert!(tuple.contains_type_vars());
    }
}
