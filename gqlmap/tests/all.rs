use color_eyre::Result;
use gqlmap::{
    Collection, Route, RouteParam, SchemaSource, SchemaType, TypeMapper, TypeMapperError, Validator,
    ValidatorSource,
};
use indoc::indoc;
use std::collections::HashMap;
use test_utils::{assert_complete_schema, assert_sdl_type, from_yaml};

#[test]
fn attribute_mapping_table() -> Result<()> {
    assert_sdl_type!(TypeMapper::from_collection_attribute("integer", false, true), "Int!");
    assert_sdl_type!(TypeMapper::from_collection_attribute("boolean", true, true), "[Boolean!]");
    assert_sdl_type!(TypeMapper::from_collection_attribute("unknown", false, false), "String");
    assert_sdl_type!(TypeMapper::from_collection_attribute("double", true, false), "[Float]");
    Ok(())
}

// A required array route parameter is non-null at the list level, while a
// required array attribute only marks its elements.
#[test]
fn required_arrays_differ_between_parameters_and_attributes() -> Result<()> {
    let parameter = TypeMapper::from_validator(Some(&Validator::array_of(Validator::Boolean)), true);
    let attribute = TypeMapper::from_collection_attribute("boolean", true, true);
    assert!(parameter.is_non_null());
    assert!(!attribute.is_non_null());
    assert_sdl_type!(parameter, "[Boolean!]!");
    assert_sdl_type!(attribute, "[Boolean!]");
    Ok(())
}

#[test]
fn mapped_types_feed_juniper() -> Result<()> {
    let ty = TypeMapper::from_collection_attribute("integer", true, true);
    assert_eq!(
        juniper::Type::from(&ty),
        juniper::Type::List(Box::new(juniper::Type::NonNullNamed("Int".into())))
    );
    Ok(())
}

#[test]
fn factory_validators_resolve_from_yaml_injections() -> Result<()> {
    let injections: serde_yaml::Mapping = from_yaml! {serde_yaml::Mapping, "
        ---
        elementType: float
    "};
    let source = ValidatorSource::factory(&["elementType"], |values: Vec<serde_yaml::Value>| {
        Ok(match values[0].as_str() {
            Some("float") => Some(Validator::array_of(Validator::Float)),
            _ => None,
        })
    });
    let ty = TypeMapper::from_route_parameter(&injections, &source, false)?;
    assert_eq!(ty, SchemaType::list(SchemaType::float()));
    Ok(())
}

#[test]
fn renders_collection_and_routes() -> Result<()> {
    let teams: Collection = from_yaml! {Collection, "
        ---
        name: Team
        attributes:
        - key: name
          type: string
          required: true
        - key: total
          type: integer
          required: true
    "};
    let route: Route<()> = Route {
        name: "teamsGet".to_owned(),
        method: "GET".to_owned(),
        params: vec![RouteParam::new("teamId", Validator::Uid, true)],
        returns: Some(teams.name.clone()),
    };
    let field = route.field(&HashMap::<String, ()>::new())?;
    assert_eq!(field.arguments[0].name, "teamId");
    assert!(teams.object_type().to_string().contains("total: Int!"));
    Ok(())
}

#[test]
fn builds_sdl_from_schema_source() -> Result<()> {
    let source = SchemaSource::from_reader(
        indoc! {"
            ---
            collections:
            - name: Bucket
              attributes:
              - key: enabled
                type: boolean
                required: true
              - key: allowedFileExtensions
                type: string
                array: true
            routes:
            - name: storageListBuckets
              returns: Bucket
              params:
              - name: queries
                validator: Appwrite\\Utopia\\Database\\Validator\\Queries\\Buckets
              - name: search
                validator: Utopia\\Validator\\Text
            - name: storageCreateFile
              method: POST
              params:
              - name: bucketId
                validator: Utopia\\Database\\Validator\\UID
                required: true
              - name: file
                validator: Utopia\\Storage\\Validator\\File
                required: true
              - name: ids
                validator:
                    array: Utopia\\Database\\Validator\\UID
        "}
        .as_bytes(),
    )?;
    let sdl = source.document(&HashMap::<String, ()>::new())?.to_string();
    assert!(sdl.contains("type Bucket {"));
    assert!(sdl.contains("enabled: Boolean!"));
    assert!(sdl.contains("allowedFileExtensions: [String]"));
    assert!(sdl.contains("storageListBuckets(queries: [String], search: String): Bucket"));
    assert!(sdl.contains("storageCreateFile(bucketId: String!, file: InputFile!, ids: [String]): Json"));
    assert!(sdl.contains("scalar Json"));
    assert!(sdl.contains("scalar InputFile"));
    assert_complete_schema(&sdl);
    Ok(())
}

#[test]
fn upload_only_source_has_no_query_root() -> Result<()> {
    let source = SchemaSource::from_reader(
        indoc! {"
            ---
            routes:
            - name: upload
              method: POST
              params:
              - name: file
                validator: Utopia\\Storage\\Validator\\File
              - name: data
                validator: Utopia\\Validator\\JSON
        "}
        .as_bytes(),
    )?;
    assert!(matches!(
        source.document(&HashMap::<String, ()>::new()),
        Err(TypeMapperError::SchemaMissingQuery)
    ));
    Ok(())
}
