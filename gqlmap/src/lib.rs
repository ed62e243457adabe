//! GraphQL schema generation from route parameter validators and stored
//! collection attributes.
//!
//! The mapping itself lives in [gqlmap_type_mapper], re-exported here along
//! with the types needed to drive it.
pub use gqlmap_type_mapper;
pub use gqlmap_type_mapper::{
    Attribute, Collection, ParamDefinition, QueriesResource, ResolveInjections, Route,
    RouteDefinition, RouteParam, Scalar, SchemaSource, SchemaType, TypeMapper, TypeMapperError,
    Validator, ValidatorFactory, ValidatorSource,
};
