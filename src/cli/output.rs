//! Console formatting for CLI output

use std::fmt::Write;

use crate::{environment::Environment, q_learning::QTable};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a Q-table with location labels on both axes
pub fn format_q_table(table: &QTable, environment: &Environment) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>6}", "");
    for location in environment.locations() {
        let _ = write!(out, "{:>10}", location.as_str());
    }
    out.push('\n');

    for (state, location) in environment.locations().iter().enumerate() {
        let _ = write!(out, "{:>6}", location.as_str());
        for value in table.row(state) {
            let _ = write!(out, "{value:>10.2}");
        }
        out.push('\n');
    }
    out
}

/// Render the outgoing edges of every location, one per line
pub fn format_edges(environment: &Environment) -> Vec<String> {
    environment
        .locations()
        .iter()
        .enumerate()
        .map(|(state, location)| {
            let targets: Vec<&str> = environment
                .neighbors(state)
                .into_iter()
                .filter_map(|next| environment.locations().get(next))
                .map(|next| next.as_str())
                .collect();
            format!("{location} -> {}", targets.join(", "))
        })
        .collect()
}
