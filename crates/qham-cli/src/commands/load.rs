//! Load command implementation.

use anyhow::{Context, Result, bail};
use console::style;
use qham_parse::Loaded;
use std::fs;

/// Execute the load command.
pub fn execute(input: &str, format: &str, output: Option<&str>) -> Result<()> {
    println!(
        "{} Loading {}",
        style("→").cyan().bold(),
        style(input).green()
    );

    let loaded = load_or_empty(input);
    println!(
        "  Accumulated: {} terms over {} qubits",
        loaded.operator.num_terms(),
        loaded.operator.min_qubits()
    );

    for skipped in &loaded.skipped {
        println!(
            "  {} line {} skipped: {}",
            style("!").yellow().bold(),
            skipped.line_no,
            skipped.text
        );
    }

    let rendered = match format {
        "text" => loaded.operator.render(),
        "json" => {
            let mut json = serde_json::to_string_pretty(&loaded.operator.weighted_terms())
                .context("serializing operator to JSON")?;
            json.push('\n');
            json
        }
        other => bail!("unknown output format '{other}' (expected text or json)"),
    };

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {path}"))?;
            println!("  Output: {}", style(path).green());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Load the file, degrading an unreadable path to an empty operator.
fn load_or_empty(input: &str) -> Loaded {
    match qham_parse::load(input) {
        Ok(loaded) => loaded,
        Err(err) => {
            println!("  {} {err}", style("Warning:").yellow().bold());
            Loaded::default()
        }
    }
}
