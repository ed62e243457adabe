use graphql_parser::schema::{Field, ObjectType};
use graphql_parser::Pos;
use serde::Deserialize;

use super::{SchemaType, TypeMapper};

/// A stored field of a collection.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Attribute {
    pub key: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub array: bool,
    #[serde(default)]
    pub required: bool,
}

impl Attribute {
    pub fn schema_type(&self) -> SchemaType {
        TypeMapper::from_collection_attribute(&self.type_tag, self.array, self.required)
    }

    fn field<'a>(&self) -> Field<'a, String> {
        Field {
            position: Pos { line: 1, column: 1 },
            description: None,
            name: self.key.clone(),
            arguments: vec![],
            field_type: (&self.schema_type()).into(),
            directives: vec![],
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Collection {
    /// An object type with one field per attribute, in declaration order.
    pub fn object_type<'a>(&self) -> ObjectType<'a, String> {
        ObjectType {
            position: Pos { line: 1, column: 1 },
            description: None,
            name: self.name.clone(),
            implements_interfaces: vec![],
            directives: vec![],
            fields: self.attributes.iter().map(Attribute::field).collect(),
        }
    }
}
