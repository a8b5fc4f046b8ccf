//! Taxonomy command - list the built-in stack catalog

use colored::*;

use crate::processing::taxonomy::CATALOG;
use crate::ui;

pub fn run() {
	ui::header("Stack Taxonomy");
	for entry in CATALOG {
		println!("  {} {}", format!("{:<12}", entry.id).bright_cyan(), entry.label.bright_white().bold());
		println!("  {:<12} {}", "", entry.descriptor.dimmed());
	}
	println!();
}
