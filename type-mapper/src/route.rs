use graphql_parser::schema::{Field, InputValue, Type};
use graphql_parser::Pos;
use serde::Deserialize;

use super::injection::{ResolveInjections, ValidatorSource};
use super::validator::Validator;
use super::{SchemaType, TypeMapper, TypeMapperError};

#[derive(Debug)]
pub struct RouteParam<V> {
    pub name: String,
    pub source: ValidatorSource<V>,
    pub required: bool,
}

impl<V> RouteParam<V> {
    pub fn new<S: Into<ValidatorSource<V>>>(name: &str, source: S, required: bool) -> Self {
        Self {
            name: name.to_owned(),
            source: source.into(),
            required,
        }
    }

    pub fn schema_type<R>(&self, resolver: &R) -> Result<SchemaType, TypeMapperError>
    where
        R: ResolveInjections<Injection = V>,
    {
        TypeMapper::from_route_parameter(resolver, &self.source, self.required)
    }
}

/// An endpoint exposed as a GraphQL field.  `GET` routes become queries,
/// everything else a mutation.
#[derive(Debug)]
pub struct Route<V> {
    pub name: String,
    pub method: String,
    pub params: Vec<RouteParam<V>>,
    /// Name of the collection type returned, `Json` when not set.
    pub returns: Option<String>,
}

impl<V> Route<V> {
    pub fn is_mutation(&self) -> bool {
        !self.method.eq_ignore_ascii_case("GET")
    }

    pub fn arguments<'a, R>(&self, resolver: &R) -> Result<Vec<InputValue<'a, String>>, TypeMapperError>
    where
        R: ResolveInjections<Injection = V>,
    {
        self.params
            .iter()
            .map(|param| -> Result<_, TypeMapperError> {
                Ok(InputValue {
                    position: Pos { line: 1, column: 1 },
                    description: None,
                    name: param.name.clone(),
                    value_type: (&param.schema_type(resolver)?).into(),
                    default_value: None,
                    directives: vec![],
                })
            })
            .collect()
    }

    pub fn field<'a, R>(&self, resolver: &R) -> Result<Field<'a, String>, TypeMapperError>
    where
        R: ResolveInjections<Injection = V>,
    {
        let field_type = match &self.returns {
            Some(name) => Type::NamedType(name.clone()),
            None => (&SchemaType::json()).into(),
        };
        Ok(Field {
            position: Pos { line: 1, column: 1 },
            description: None,
            name: self.name.clone(),
            arguments: self.arguments(resolver)?,
            field_type,
            directives: vec![],
        })
    }
}

fn default_method() -> String {
    "GET".to_owned()
}

/// Yaml form of a route parameter; validators are given by class name.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ParamDefinition {
    pub name: String,
    #[serde(default)]
    pub validator: Option<Validator>,
    #[serde(default)]
    pub required: bool,
}

/// Yaml form of a route.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RouteDefinition {
    pub name: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub params: Vec<ParamDefinition>,
    #[serde(default)]
    pub returns: Option<String>,
}

impl RouteDefinition {
    pub fn to_route<V>(&self) -> Route<V> {
        Route {
            name: self.name.clone(),
            method: self.method.clone(),
            params: self
                .params
                .iter()
                .map(|p| RouteParam::new(&p.name, p.validator.clone(), p.required))
                .collect(),
            returns: self.returns.clone(),
        }
    }
}
