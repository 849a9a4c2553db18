use colored::*;
use forms_validator::ValidationResult;
use serde_json::json;

pub fn print_validation_report(result: &ValidationResult, format: &str) {
    match format {
        "json" => print_json_report(result),
        _ => print_text_report(result),
    }
}

fn print_text_report(result: &ValidationResult) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if result.is_valid() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );

        println!("\n{}", "Errors:".red().bold());
        for field in result.errors() {
            println!("  {}", field.field.bold());
            for message in &field.messages {
                println!("    - {}", message.red());
            }
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Fields in error: {}", result.errors().len());
    println!("  Total messages:  {}", result.error_count());
    println!("{}", "═".repeat(60));
}

fn print_json_report(result: &ValidationResult) {
    let output = json!({
        "valid": result.is_valid(),
        "errors": result.errors(),
        "summary": {
            "field_count": result.errors().len(),
            "message_count": result.error_count(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
