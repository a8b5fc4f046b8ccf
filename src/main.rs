//! Skillgraph - skill catalog to 2-D skill graph
//!
//! Embeds every skill, groups them, projects them onto two principal axes
//! and writes the result as JSON.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;

use skillgraph::cli::{Cli, Command};
use skillgraph::{commands, ui};

fn main() {
	let cli = Cli::parse();
	ui::Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Command::Build { .. } => {
			let config = cli
				.command
				.build_config()
				.context("build arguments did not resolve to a configuration")?;
			print_header();
			commands::build::run(&config)
		}
		Command::Show { path } => commands::show::run(path),
		Command::Taxonomy => {
			commands::taxonomy::run();
			Ok(())
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand.as_deref().and_then(|s| cmd.find_subcommand_mut(s)) {
				Some(sub) => sub.print_help()?,
				None => {
					if let Some(sub) = subcommand {
						ui::warn(&format!("Unknown subcommand: {}", sub));
					}
					Cli::command().print_help()?;
				}
			}
			Ok(())
		}
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Skillgraph v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
