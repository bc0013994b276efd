//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - qubit-Hamiltonian ingestion and inspection",
        style("QHAM").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qham-op     Symbolic Pauli-operator representation");
    println!("  qham-parse  Hamiltonian text parser and loader");
    println!("  qham-cli    Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/qham-rs/qham").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
