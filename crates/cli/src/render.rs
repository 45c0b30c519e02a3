//! Terminal rendering of the summary table.

use rootcheck_core::{Category, SummaryTable};

/// Prints the summary table to stdout, grouped by category.
pub fn print_table(table: &SummaryTable) {
    println!();
    println!("==========================================================");
    println!("VERIFICATION SUMMARY");
    println!("==========================================================");

    let mut current: Option<Category> = None;
    for row in &table.rows {
        if current != Some(row.category) {
            if current.is_some() {
                println!("----------------------------------------------------------");
            }
            println!("{}", row.category);
            current = Some(row.category);
        }
        println!("  {:<26} {:<16} {}", row.metric, row.value, row.description);
    }
    println!("==========================================================");
}
