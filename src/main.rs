mod cfg;
mod display;
mod error;
mod input;

#[cfg(feature = "tui")]
mod app;

use std::process::ExitCode;

use clap::Parser;

use crate::{
	cfg::{GraphArgs, UiOptions},
	display::{plot::render_files, GraphConfig},
	error::GraphError,
	input::file::FileSource,
};

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	println!("{}", cfg::USAGE);
	println!("Start.");

	let args = GraphArgs::parse();

	match run(&args) {
		Ok(()) => {
			println!("End.");
			ExitCode::SUCCESS
		},
		Err(e) => {
			eprintln!("[!] {e}");
			ExitCode::FAILURE
		},
	}
}

fn run(args: &GraphArgs) -> Result<(), GraphError> {
	let points = {
		let open_err = |source| GraphError::Open { path: args.path.clone(), source };
		let mut source = FileSource::open(&args.path, args.depth, args.sample_limit()).map_err(open_err)?;
		source.points().map_err(open_err)?
	};

	let graph = GraphConfig::new(args.rate, points.len());
	render_files(&graph, &points, &args.ui.output)?;

	show(graph, &points, &args.ui)
}

/// the interactive view needs a terminal on stdout, otherwise only files are written
fn wants_window(ui: &UiOptions, stdout_is_tty: bool) -> bool {
	if ui.no_window {
		return false;
	}
	if !stdout_is_tty {
		log::warn!("stdout is not a terminal, skipping interactive view");
		return false;
	}
	true
}

#[cfg(feature = "tui")]
fn show(graph: GraphConfig, points: &[f64], ui: &UiOptions) -> Result<(), GraphError> {
	use crossterm::tty::IsTty;
	if !wants_window(ui, std::io::stdout().is_tty()) {
		return Ok(());
	}
	app::App::new(graph, points, ui).show()?;
	Ok(())
}

#[cfg(not(feature = "tui"))]
fn show(_graph: GraphConfig, _points: &[f64], ui: &UiOptions) -> Result<(), GraphError> {
	if wants_window(ui, true) {
		log::info!("built without tui feature, not opening interactive view");
	}
	Ok(())
}
