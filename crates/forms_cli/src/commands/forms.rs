use anyhow::Result;
use forms_catalog::{BUILTIN_FORMS, builtin};

use crate::output;

pub fn execute() -> Result<()> {
    output::print_info("Built-in forms:");
    for name in BUILTIN_FORMS {
        if let Some(schema) = builtin(name) {
            println!("  {:<24} {} field(s)", name, schema.len());
        }
    }
    Ok(())
}
