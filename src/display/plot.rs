use std::{ops::Range, path::PathBuf};

use plotters::{
	coord::{ranged1d::{DefaultFormatting, KeyPointHint, Ranged}, types::RangedCoordf64, Shift},
	prelude::*,
};

use crate::error::GraphError;

use super::{amplitude_bounds, GraphConfig};

pub const IMAGE_SIZE : (u32, u32) = (1024, 576);

/// draw the graph into `<base>.svg` and `<base>.jpg`, replacing existing files
pub fn render_files(cfg: &GraphConfig, points: &[f64], base: &str) -> Result<[PathBuf; 2], GraphError> {
	let svg = PathBuf::from(format!("{base}.svg"));
	let jpg = PathBuf::from(format!("{base}.jpg"));

	{
		let root = SVGBackend::new(&svg, IMAGE_SIZE).into_drawing_area();
		draw(&root, cfg, points)?;
		root.present()?;
	}
	log::info!("wrote {}", svg.display());

	{
		let root = BitMapBackend::new(&jpg, IMAGE_SIZE).into_drawing_area();
		draw(&root, cfg, points)?;
		root.present()?;
	}
	log::info!("wrote {}", jpg.display());

	Ok([svg, jpg])
}

/// sample index axis whose only key points are the whole second ticks
struct SecondsAxis {
	inner: RangedCoordf64,
	ticks: Vec<f64>,
}

impl SecondsAxis {
	fn new(cfg: &GraphConfig, samples: usize) -> Self {
		SecondsAxis {
			inner: (0f64..samples.max(1) as f64).into(),
			ticks: cfg.ticks.iter().map(|t| t.position as f64).collect(),
		}
	}
}

impl Ranged for SecondsAxis {
	type FormatOption = DefaultFormatting;
	type ValueType = f64;

	fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
		self.inner.map(value, limit)
	}

	fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
		if hint.weight().allow_light_points() {
			vec![]
		} else {
			self.ticks.clone()
		}
	}

	fn range(&self) -> Range<f64> {
		self.inner.range()
	}
}

fn draw<DB: DrawingBackend>(
	root: &DrawingArea<DB, Shift>,
	cfg: &GraphConfig,
	points: &[f64],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
	root.fill(&WHITE)?;

	let (y_min, y_max) = amplitude_bounds(points);
	let seconds = |x: &f64| {
		cfg.ticks.iter()
			.find(|t| t.position as f64 == *x)
			.map(|t| t.label.to_string())
			.unwrap_or_default()
	};
	let amplitude = |y: &f64| format!("{:.2}", y);

	let mut chart = ChartBuilder::on(root)
		.margin(10)
		.caption(cfg.title, ("sans-serif", 24))
		.x_label_area_size(45)
		.y_label_area_size(55)
		.build_cartesian_2d(SecondsAxis::new(cfg, points.len()), y_min..y_max)?;

	let mut mesh = chart.configure_mesh();
	mesh
		.x_labels(cfg.ticks.len().max(1))
		.x_label_formatter(&seconds)
		.y_label_formatter(&amplitude)
		.x_desc(cfg.x_label)
		.y_desc(cfg.y_label)
		.light_line_style(&BLACK.mix(0.05));
	if !cfg.grid {
		mesh.disable_mesh();
	}
	mesh.draw()?;

	chart.draw_series(LineSeries::new(
		points.iter().enumerate().map(|(i, y)| (i as f64, *y)),
		&BLUE,
	))?;

	Ok(())
}
