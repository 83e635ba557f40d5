use colored::Colorize;

use crate::emit::EmitSummary;
use crate::pipeline::{GenerationOutcome, GenerationSource};

pub fn print_outcome_dashboard(outcome: &GenerationOutcome) {
    let source = match outcome.source {
        GenerationSource::Model => "model".green().bold().to_string(),
        GenerationSource::Fallback(reason) => {
            format!("fallback ({})", reason).yellow().bold().to_string()
        }
    };

    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━ Generation Result ━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!(
        "  {}: {}   {}: {}   {}: {}ms",
        "Archetype".bold(), outcome.archetype,
        "Source".bold(), source,
        "Elapsed".bold(), outcome.elapsed_ms
    );
    println!(
        "  {}: {}B   {}: {}B   {}: {}B   {}: {}B   {}: {}",
        "HTML".green().bold(), outcome.bundle.html_content.len(),
        "CSS".cyan().bold(), outcome.bundle.css_content.len(),
        "JS".magenta().bold(), outcome.bundle.js_content.len(),
        "Backend".blue().bold(), outcome.bundle.python_backend.len(),
        "Files".bold(), outcome.bundle.files.len()
    );
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());
}

pub fn print_emit_dashboard(sum: &EmitSummary) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━━━ Emit Results ━━━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!(
        "  {}: {}   {}: {}B",
        "Files".green().bold(), sum.written.len(),
        "Bytes".bold(), sum.bytes_written
    );
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());

    for p in &sum.written {
        println!("  {}  {}", "[WROTE]".green().bold(), p.display());
    }
    println!();
}
