//! GraphQL type references produced by the [TypeMapper](crate::TypeMapper).
//!
//! A [SchemaType] is a plain tree: a named scalar, optionally wrapped in any
//! combination of list and non-null wrappers.  It carries no identity, so two
//! mappings of the same input compare equal.  Conversions into
//! `graphql_parser` and `juniper` type references let either stack consume
//! the result.
use graphql_parser::schema;
use std::borrow::Cow;
use std::fmt;

/// The named types a mapping can bottom out in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scalar {
    String,
    Boolean,
    Int,
    Float,
    /// Opaque, unconstrained structured value.
    Json,
    /// File upload, only meaningful in mutation arguments.
    InputFile,
}

impl Scalar {
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Json => "Json",
            Self::InputFile => "InputFile",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SchemaType {
    Named(Scalar),
    List(Box<SchemaType>),
    NonNull(Box<SchemaType>),
}

impl SchemaType {
    pub fn string() -> Self {
        Self::Named(Scalar::String)
    }
    pub fn boolean() -> Self {
        Self::Named(Scalar::Boolean)
    }
    pub fn int() -> Self {
        Self::Named(Scalar::Int)
    }
    pub fn float() -> Self {
        Self::Named(Scalar::Float)
    }
    pub fn json() -> Self {
        Self::Named(Scalar::Json)
    }
    pub fn input_file() -> Self {
        Self::Named(Scalar::InputFile)
    }
    pub fn list(of: Self) -> Self {
        Self::List(Box::new(of))
    }
    pub fn non_null(of: Self) -> Self {
        Self::NonNull(Box::new(of))
    }
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
    /// Whether this is a list, looking through an outer non-null wrapper.
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }
    /// The innermost named scalar.
    pub fn named(&self) -> Scalar {
        match self {
            Self::Named(scalar) => *scalar,
            Self::List(inner) | Self::NonNull(inner) => inner.named(),
        }
    }
}

impl From<Scalar> for SchemaType {
    fn from(scalar: Scalar) -> Self {
        Self::Named(scalar)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(scalar) => write!(f, "{}", scalar),
            Self::List(inner) => write!(f, "[{}]", inner),
            Self::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

impl<'a> From<&SchemaType> for schema::Type<'a, String> {
    fn from(ty: &SchemaType) -> Self {
        use schema::Type::{ListType, NamedType, NonNullType};
        match ty {
            SchemaType::Named(scalar) => NamedType(scalar.name().to_owned()),
            SchemaType::List(inner) => ListType(Box::new(Self::from(inner.as_ref()))),
            SchemaType::NonNull(inner) => NonNullType(Box::new(Self::from(inner.as_ref()))),
        }
    }
}

impl From<&SchemaType> for juniper::Type<'static> {
    fn from(ty: &SchemaType) -> Self {
        use juniper::Type::{List, Named, NonNullList, NonNullNamed};
        match ty {
            SchemaType::Named(scalar) => Named(Cow::Borrowed(scalar.name())),
            SchemaType::List(inner) => List(Box::new(Self::from(inner.as_ref()))),
            SchemaType::NonNull(inner) => match Self::from(inner.as_ref()) {
                Named(name) => NonNullNamed(name),
                List(of) => NonNullList(of),
                non_null => non_null,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use test_utils::assert_sdl_type;

    #[test]
    fn displays_as_sdl() -> Result<()> {
        let ty = SchemaType::non_null(SchemaType::list(SchemaType::non_null(
            SchemaType::boolean(),
        )));
        assert_eq!(ty.to_string(), "[Boolean!]!");
        assert_eq!(SchemaType::json().to_string(), "Json");
        assert_eq!(SchemaType::input_file().to_string(), "InputFile");
        Ok(())
    }

    #[test]
    fn converts_to_graphql_parser_type() -> Result<()> {
        assert_sdl_type!(SchemaType::string(), "String");
        assert_sdl_type!(SchemaType::non_null(SchemaType::int()), "Int!");
        assert_sdl_type!(
            SchemaType::list(SchemaType::list(SchemaType::float())),
            "[[Float]]"
        );
        assert_sdl_type!(
            SchemaType::non_null(SchemaType::list(SchemaType::json())),
            "[Json]!"
        );
        Ok(())
    }

    #[test]
    fn converts_to_juniper_type() -> Result<()> {
        use juniper::Type;
        let ty = SchemaType::non_null(SchemaType::list(SchemaType::non_null(SchemaType::int())));
        assert_eq!(
            Type::from(&ty),
            Type::NonNullList(Box::new(Type::NonNullNamed("Int".into())))
        );
        assert_eq!(
            Type::from(&SchemaType::list(SchemaType::string())),
            Type::List(Box::new(Type::Named("String".into())))
        );
        Ok(())
    }

    #[test]
    fn collapses_doubled_non_null_for_juniper() -> Result<()> {
        use juniper::Type;
        let ty = SchemaType::non_null(SchemaType::non_null(SchemaType::float()));
        assert_eq!(Type::from(&ty), Type::NonNullNamed("Float".into()));
        Ok(())
    }

    #[test]
    fn inspects_wrappers() -> Result<()> {
        let ty = SchemaType::non_null(SchemaType::list(SchemaType::boolean()));
        assert!(ty.is_non_null());
        assert!(ty.is_list());
        assert_eq!(ty.named(), Scalar::Boolean);
        assert!(!SchemaType::int().is_list());
        Ok(())
    }
}
