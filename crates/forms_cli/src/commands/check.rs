use anyhow::{Context, Result};
use forms_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(definition_path: &str) -> Result<()> {
    info!("Checking form definition: {}", definition_path);

    let path = Path::new(definition_path);
    let definition = parse_file(path)
        .with_context(|| format!("Failed to parse form definition: {definition_path}"))?;

    output::print_success(&format!(
        "Form '{}' is well-formed ({} fields)",
        definition.name,
        definition.schema.len()
    ));

    println!("\nFields:");
    for field in definition.schema.fields() {
        println!("  {:<20} {} rule(s)", field.name(), field.rules().len());
    }

    Ok(())
}
