//! Building a whole SDL document from collections and routes.
use graphql_parser::schema::{
    Definition, Document, Field, ObjectType, ScalarType, Type, TypeDefinition,
};
use graphql_parser::Pos;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::attribute::Collection;
use super::injection::ResolveInjections;
use super::route::RouteDefinition;
use super::schema_type::Scalar;
use super::TypeMapperError;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SchemaSource {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
}

impl SchemaSource {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TypeMapperError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, TypeMapperError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// One object type per collection, followed by `Query` and `Mutation`
    /// types holding the routes, with `Json` and `InputFile` declared as
    /// scalars when anything refers to them.  `Mutation` is left out when no
    /// route needs it; a source without any query route is an error.
    pub fn document<'a, R: ResolveInjections>(
        &self,
        resolver: &R,
    ) -> Result<Document<'a, String>, TypeMapperError> {
        let mut objects: Vec<ObjectType<'a, String>> =
            self.collections.iter().map(Collection::object_type).collect();

        let mut queries = Vec::<Field<'a, String>>::new();
        let mut mutations = Vec::<Field<'a, String>>::new();
        for definition in &self.routes {
            let mut route = definition.to_route::<R::Injection>();
            let undefined = route
                .returns
                .as_ref()
                .filter(|name| !self.collections.iter().any(|c| c.name == **name))
                .cloned();
            if let Some(name) = undefined {
                log::warn!(
                    "Route `{}` returns undefined type `{}`, using Json",
                    route.name,
                    name
                );
                route.returns = None;
            }
            let field = route.field(resolver)?;
            if route.is_mutation() {
                mutations.push(field);
            } else {
                queries.push(field);
            }
        }
        if queries.is_empty() {
            return Err(TypeMapperError::SchemaMissingQuery);
        }
        log::debug!(
            "Built {} collection types, {} queries, {} mutations",
            self.collections.len(),
            queries.len(),
            mutations.len()
        );

        for (name, fields) in [("Query", queries), ("Mutation", mutations)] {
            if fields.is_empty() {
                continue;
            }
            objects.push(ObjectType {
                position: Pos { line: 1, column: 1 },
                description: None,
                name: name.to_owned(),
                implements_interfaces: vec![],
                directives: vec![],
                fields,
            });
        }

        let scalars = [Scalar::Json, Scalar::InputFile]
            .iter()
            .filter(|scalar| objects.iter().any(|o| references(o, scalar.name())))
            .map(|scalar| {
                TypeDefinition::Scalar(ScalarType {
                    position: Pos { line: 1, column: 1 },
                    description: None,
                    name: scalar.name().to_owned(),
                    directives: vec![],
                })
            })
            .collect::<Vec<_>>();
        let definitions = scalars
            .into_iter()
            .chain(objects.into_iter().map(TypeDefinition::Object))
            .map(Definition::TypeDefinition)
            .collect();

        Ok(Document { definitions })
    }
}

fn named_type<'t>(ty: &'t Type<'_, String>) -> &'t str {
    match ty {
        Type::NamedType(name) => name,
        Type::ListType(inner) | Type::NonNullType(inner) => named_type(inner),
    }
}

/// Whether any field or argument of `object` bottoms out in type `name`.
fn references(object: &ObjectType<'_, String>, name: &str) -> bool {
    object.fields.iter().any(|field| {
        named_type(&field.field_type) == name
            || field
                .arguments
                .iter()
                .any(|argument| named_type(&argument.value_type) == name)
    })
}
