use anyhow::{Context, Result, bail};
use forms_core::{Schema, ValueMap};
use forms_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    values_path: &str,
    schema_path: Option<&str>,
    builtin: Option<&str>,
    format: &str,
) -> Result<()> {
    let schema = load_schema(schema_path, builtin)?;

    let content = std::fs::read_to_string(values_path)
        .with_context(|| format!("Failed to read values file: {values_path}"))?;
    let values: ValueMap = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse values file as JSON: {values_path}"))?;

    info!(
        "Validating {} value(s) against {} field(s)",
        values.len(),
        schema.len()
    );

    let result = forms_validator::validate(&schema, &values);
    output::print_validation_report(&result, format);

    if !result.is_valid() {
        output::print_error(&format!(
            "validation failed with {} error(s)",
            result.error_count()
        ));
        std::process::exit(1);
    }
    Ok(())
}

fn load_schema(schema_path: Option<&str>, builtin: Option<&str>) -> Result<Schema> {
    if let Some(path) = schema_path {
        let definition = parse_file(Path::new(path))
            .with_context(|| format!("Failed to parse form definition: {path}"))?;
        return Ok(definition.schema);
    }

    // clap guarantees exactly one of the two sources is present.
    let name = builtin.context("no schema source given")?;
    match forms_catalog::builtin(name) {
        Some(schema) => Ok(schema),
        None => bail!(
            "unknown built-in form '{}' (run `formcheck forms` for the list)",
            name
        ),
    }
}
