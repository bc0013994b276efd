//! Info command implementation.

use anyhow::Result;
use console::style;
use qham_op::PauliTerm;

/// Execute the info command.
pub fn execute(input: &str) -> Result<()> {
    let loaded = qham_parse::load(input)?;
    let op = &loaded.operator;

    println!(
        "{} {}",
        style("Hamiltonian").cyan().bold(),
        style(input).green()
    );
    println!("  Terms:      {}", op.num_terms());
    println!("  Qubits:     {}", op.min_qubits());
    println!("  One-norm:   {}", op.one_norm());
    match op.coefficient(&PauliTerm::identity()) {
        Some(c) => println!("  Identity:   {c}"),
        None => println!("  Identity:   (absent)"),
    }
    if !loaded.skipped.is_empty() {
        println!(
            "  {} {} malformed lines skipped",
            style("!").yellow().bold(),
            loaded.skipped.len()
        );
    }

    Ok(())
}
