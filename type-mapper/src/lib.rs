//! Maps route parameter validators and collection attribute types to
//! GraphQL types, for building a schema over an existing REST surface.
use thiserror::Error;

mod attribute;
pub use attribute::{Attribute, Collection};
mod document;
pub use document::SchemaSource;
mod injection;
pub use injection::{ResolveInjections, ValidatorFactory, ValidatorSource};
mod route;
pub use route::{ParamDefinition, Route, RouteDefinition, RouteParam};
mod schema_type;
pub use schema_type::{Scalar, SchemaType};
mod validator;
pub use validator::{QueriesResource, Validator};

pub use graphql_parser;

#[derive(Error, Debug)]
pub enum TypeMapperError {
    #[error("Injection `{0}` could not be resolved")]
    InjectionNotFound(String),
    #[error("Validator factory failed: {0}")]
    FactoryFailed(String),
    #[error("No query route in schema source")]
    SchemaMissingQuery,
    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Stateless mapping from validators and attribute types to [SchemaType]s.
pub struct TypeMapper;

impl TypeMapper {
    /// Maps a route parameter to a GraphQL type, materializing its validator
    /// through `resolver` first if it comes from a factory.
    ///
    /// Only resolver or factory failures are errors.  Unknown or absent
    /// validators map to `String`.
    pub fn from_route_parameter<R>(
        resolver: &R,
        source: &ValidatorSource<R::Injection>,
        required: bool,
    ) -> Result<SchemaType, TypeMapperError>
    where
        R: ResolveInjections,
    {
        let validator = source.materialize(resolver)?;
        Ok(Self::from_validator(validator.as_deref(), required))
    }

    /// Maps an already materialized validator.  Array validators recurse into
    /// their element with the same `required`, so a required array of
    /// integers is `[Int!]!`.
    pub fn from_validator(validator: Option<&Validator>, required: bool) -> SchemaType {
        use Validator::*;
        let ty = match validator {
            Some(Boolean) => SchemaType::boolean(),
            Some(Numeric) | Some(Integer) | Some(Range) => SchemaType::int(),
            Some(Float) => SchemaType::float(),
            Some(ArrayList(element)) => {
                SchemaType::list(Self::from_validator(Some(element.as_ref()), required))
            }
            Some(Authorization) | Some(Permissions) | Some(Roles) | Some(Queries(_)) => {
                SchemaType::list(SchemaType::string())
            }
            Some(Assoc) | Some(Json) => SchemaType::json(),
            Some(File) => SchemaType::input_file(),
            Some(Password) | Some(Event) | Some(Cname) | Some(Domain) | Some(Email)
            | Some(Host) | Some(Ip) | Some(Origin) | Some(Url) | Some(Cron) | Some(CustomId)
            | Some(Key) | Some(Uid) | Some(HexColor) | Some(Length) | Some(Text)
            | Some(WhiteList) => SchemaType::string(),
            Some(Unknown(class)) => {
                // Empty for array validators declared without an element.
                if !class.is_empty() {
                    log::debug!("Unrecognised validator `{}`, mapping to String", class);
                }
                SchemaType::string()
            }
            None => SchemaType::string(),
        };
        if required {
            SchemaType::non_null(ty)
        } else {
            ty
        }
    }

    /// Maps a stored attribute's type tag.  For arrays, `required` applies to
    /// the elements rather than the list, so a required boolean array is
    /// `[Boolean!]`.
    pub fn from_collection_attribute(type_tag: &str, array: bool, required: bool) -> SchemaType {
        if array {
            return SchemaType::list(Self::from_collection_attribute(type_tag, false, required));
        }
        let ty = match type_tag {
            "boolean" => SchemaType::boolean(),
            "integer" => SchemaType::int(),
            "double" => SchemaType::float(),
            "string" => SchemaType::string(),
            _ => {
                log::debug!("Unrecognised attribute type `{}`, mapping to String", type_tag);
                SchemaType::string()
            }
        };
        if required {
            SchemaType::non_null(ty)
        } else {
            ty
        }
    }
}
