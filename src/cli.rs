use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{
	Config, Strategy, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_CLUSTERS, DEFAULT_INPUT, DEFAULT_MODEL,
	DEFAULT_OUTPUT,
};

fn parse_clusters(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if val == 0 {
		Err("cluster count must be at least 1".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "skillgraph",
	author,
	version,
	about = "Embed, cluster and project a skill catalog into a 2-D skill graph",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {build}     {build_args}             {build_desc}
  {bin} {build}     {taxonomy_args}  {taxonomy_desc}
  {bin} {show}      {show_args}  {show_desc}
  {bin} {help}      {help_args}                    {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "skillgraph".bright_blue(),
		build = "build".yellow(),
		build_args = "-k 6 --seed 7",
		build_desc = "K-Means graph, reproducible".dimmed(),
		taxonomy_args = "-s taxonomy --hidden",
		taxonomy_desc = "One cluster per area".dimmed(),
		show = "show".yellow(),
		show_args = "public/skill-graph.json",
		show_desc = "Summarize an artifact".dimmed(),
		help = "help".yellow(),
		help_args = "build",
		help_desc = "Show help for build".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Embed, group and project skills, then write the graph
	Build {
		/// Skill catalog (resume JSON with a `skills` array)
		#[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
		input: PathBuf,

		/// Where to write the skill graph JSON
		#[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
		output: PathBuf,

		/// Number of K-Means clusters
		#[arg(short = 'k', long = "clusters", default_value_t = DEFAULT_CLUSTERS, value_parser = parse_clusters)]
		clusters: usize,

		/// Embedding model identifier
		#[arg(short = 'm', long = "model", default_value = DEFAULT_MODEL)]
		model: String,

		/// Include items marked `display: false`
		#[arg(long = "hidden")]
		include_hidden: bool,

		/// Grouping strategy
		#[arg(short = 's', long = "strategy", value_enum, default_value_t = Strategy::Kmeans)]
		strategy: Strategy,

		/// Seed for K-Means initialization and the projection start vector
		#[arg(long = "seed")]
		seed: Option<u64>,

		/// Embedding API base URL (OpenAI-compatible)
		#[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
		base_url: String,

		/// Embedding API key
		#[arg(long = "api-key", env = API_KEY_ENV, hide_env_values = true)]
		api_key: Option<String>,
	},

	/// Print the cluster summary of an existing skill graph
	Show {
		/// Skill graph JSON
		#[arg(value_name = "PATH", default_value = DEFAULT_OUTPUT)]
		path: PathBuf,
	},

	/// List the built-in stack taxonomy
	Taxonomy,

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}

impl Command {
	/// Resolves `build` arguments into a `Config`; `None` for other commands
	pub fn build_config(&self) -> Option<Config> {
		match self {
			Command::Build {
				input,
				output,
				clusters,
				model,
				include_hidden,
				strategy,
				seed,
				base_url,
				api_key,
			} => Some(Config {
				api_key: api_key.clone().unwrap_or_default(),
				base_url: base_url.clone(),
				model: model.clone(),
				input: input.clone(),
				output: output.clone(),
				strategy: *strategy,
				clusters: *clusters,
				include_hidden: *include_hidden,
				seed: *seed,
			}),
			_ => None,
		}
	}
}
