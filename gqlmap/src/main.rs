//! Renders SDL for the collections and routes described in a yaml file.
//!
//! The file is read from `SCHEMA_SOURCE`, defaulting to `schema.yml` in the
//! working directory.
#[macro_use]
extern crate lazy_static;
use color_eyre::Result;
use gqlmap::SchemaSource;
use std::collections::HashMap;
use std::path::PathBuf;

lazy_static! {
    static ref SCHEMA_SOURCE: PathBuf = std::env::var("SCHEMA_SOURCE")
        .map_or_else(|_e| PathBuf::from("schema.yml"), PathBuf::from);
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    log::info!("Reading schema source {:?}", *SCHEMA_SOURCE);
    let source = SchemaSource::from_file(&SCHEMA_SOURCE)?;
    // Yaml routes carry resolved validators only, so nothing is injected.
    let document = source.document(&HashMap::<String, ()>::new())?;
    print!("{}", document);
    Ok(())
}
