pub use graphql_parser;
pub use indoc;
pub use serde_yaml;

use graphql_parser::schema::{Definition, Type, TypeDefinition};

const BUILT_IN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// Deserializes an indented yaml literal into the given type.
#[macro_export]
macro_rules! from_yaml {
    ($t:ty, $e:literal) => {{
        $crate::serde_yaml::from_str::<$t>($crate::indoc::indoc! {$e}).unwrap()
    }};
}

/// Asserts that a mapped type renders to the same `graphql_parser` type as
/// the SDL type reference `$expected`, e.g. `"[Boolean!]"`.
#[macro_export]
macro_rules! assert_sdl_type {
    ($actual:expr, $expected:literal) => {{
        use $crate::graphql_parser::schema::{Definition, Type, TypeDefinition};
        let sdl = format!("type T {{ f: {} }}", $expected);
        let doc = $crate::graphql_parser::parse_schema::<String>(&sdl).unwrap();
        let expected = match &doc.definitions[0] {
            Definition::TypeDefinition(TypeDefinition::Object(obj)) => {
                obj.fields[0].field_type.clone()
            }
            _ => unreachable!(),
        };
        let actual: Type<String> = (&$actual).into();
        assert_eq!(actual, expected);
    }};
}

fn named_type(ty: &Type<String>) -> String {
    match ty {
        Type::NamedType(name) => name.clone(),
        Type::ListType(inner) | Type::NonNullType(inner) => named_type(inner),
    }
}

/// Parses `sdl` back and asserts it is a usable schema: a `Query` type exists
/// and every type a field or argument names is built in or declared.
pub fn assert_complete_schema(sdl: &str) {
    let doc = graphql_parser::parse_schema::<String>(sdl).unwrap();
    let mut declared = Vec::<String>::new();
    let mut referenced = Vec::<String>::new();
    for definition in &doc.definitions {
        match definition {
            Definition::TypeDefinition(TypeDefinition::Scalar(scalar)) => {
                declared.push(scalar.name.clone());
            }
            Definition::TypeDefinition(TypeDefinition::Object(obj)) => {
                declared.push(obj.name.clone());
                for field in &obj.fields {
                    referenced.push(named_type(&field.field_type));
                    for argument in &field.arguments {
                        referenced.push(named_type(&argument.value_type));
                    }
                }
            }
            _ => (),
        }
    }
    assert!(
        declared.iter().any(|name| name == "Query"),
        "No `Query` type in\n{}",
        sdl
    );
    for name in referenced {
        assert!(
            BUILT_IN_SCALARS.contains(&name.as_str()) || declared.contains(&name),
            "`{}` is used but never declared in\n{}",
            name,
            sdl
        );
    }
}
