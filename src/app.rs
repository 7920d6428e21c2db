use std::io;

use crossterm::{
	event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
	execute,
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
	backend::{Backend, CrosstermBackend},
	layout::Alignment,
	style::{Color, Modifier, Style},
	symbols::Marker,
	text::Span,
	widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
	Terminal,
};

use crate::{cfg::UiOptions, display::GraphConfig};

const SCALE_STEP : f64 = 0.05;
const SCALE_MIN : f64 = 0.05;
const SCALE_MAX : f64 = 4.0;

pub struct App {
	cfg: GraphConfig,
	data: Vec<(f64, f64)>,
	reference: [(f64, f64); 2],
	scale: f64,
	scatter: bool,
	marker_type: Marker,
	primary_color: Color,
	axis_color: Color,
	labels_color: Color,
}

impl App {
	pub fn new(cfg: GraphConfig, points: &[f64], ui: &UiOptions) -> Self {
		App {
			data: points.iter().enumerate().map(|(i, y)| (i as f64, *y)).collect(),
			reference: [(0.0, 0.0), (points.len().max(1) as f64, 0.0)],
			cfg,
			scale: 1.0,
			scatter: ui.scatter,
			marker_type: if ui.no_braille { Marker::Dot } else { Marker::Braille },
			primary_color: Color::Yellow,
			axis_color: Color::DarkGray,
			labels_color: Color::Cyan,
		}
	}

	pub fn scale(&self) -> f64 {
		self.scale
	}

	/// takes over the terminal and blocks until the user closes the graph
	pub fn show(&mut self) -> Result<(), io::Error> {
		enable_raw_mode()?;
		let mut terminal = restore_on_err(setup_terminal(), || {
			execute!(io::stdout(), LeaveAlternateScreen).unwrap_or(());
			disable_raw_mode().unwrap_or(());
		})?;

		let res = self.run(&mut terminal);

		// restore terminal, every step even if one fails
		let raw = disable_raw_mode();
		let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
		let cursor = terminal.show_cursor();

		res.and(raw).and(screen).and(cursor)
	}

	fn run<T: Backend>(&mut self, terminal: &mut Terminal<T>) -> Result<(), io::Error> {
		loop {
			terminal.draw(|f| {
				let size = f.size();
				f.render_widget(self.chart(), size)
			})?;

			if let Event::Key(key) = event::read()? {
				if self.process_key(key) {
					break;
				}
			}
		}
		Ok(())
	}

	fn chart(&self) -> Chart<'_> {
		let style = if self.scatter { GraphType::Scatter } else { GraphType::Line };
		let width = self.data.len().max(1) as f64;
		let datasets = vec![
			Dataset::default()
				.marker(self.marker_type)
				.graph_type(GraphType::Line)
				.style(Style::default().fg(self.axis_color))
				.data(&self.reference),
			Dataset::default()
				.marker(self.marker_type)
				.graph_type(style)
				.style(Style::default().fg(self.primary_color))
				.data(&self.data),
		];

		Chart::new(datasets)
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_style(Style::default().fg(self.axis_color))
					.title(Span::styled(
						format!(
							"{}  --  {} samples  --  {:.1} kHz  --  {:.2}s  --  scale {:.2}  --  q to quit",
							self.cfg.title, self.cfg.samples, self.cfg.rate as f64 / 1000.0,
							self.cfg.seconds(), self.scale,
						),
						Style::default().add_modifier(Modifier::BOLD).fg(self.primary_color),
					))
					.title_alignment(Alignment::Center),
			)
			.x_axis(
				Axis::default()
					.title(Span::styled(self.cfg.x_label, Style::default().fg(self.labels_color)))
					.style(Style::default().fg(self.axis_color))
					.bounds([0.0, width])
					.labels(self.time_labels()),
			)
			.y_axis(
				Axis::default()
					.title(Span::styled(self.cfg.y_label, Style::default().fg(self.labels_color)))
					.style(Style::default().fg(self.axis_color))
					.bounds([-self.scale, self.scale])
					.labels(vec![
						Span::raw(format!("{:.2}", -self.scale)),
						Span::raw("0"),
						Span::raw(format!("{:.2}", self.scale)),
					]),
			)
	}

	// terminal cells are too coarse for a label every second
	fn time_labels(&self) -> Vec<Span<'static>> {
		let total = self.cfg.seconds();
		vec![
			Span::raw("0"),
			Span::raw(format!("{:.2}", total / 2.0)),
			Span::raw(format!("{:.2}", total)),
		]
	}

	/// returns true when the view should close
	pub fn process_key(&mut self, key: KeyEvent) -> bool {
		if key.kind != KeyEventKind::Press {
			return false;
		}
		if key.modifiers == KeyModifiers::CONTROL {
			return matches!(key.code, KeyCode::Char('c'));
		}
		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return true,
			KeyCode::Char('+') | KeyCode::Char('=') => update_value_f(&mut self.scale, -SCALE_STEP, 1.0, SCALE_MIN..SCALE_MAX),
			KeyCode::Char('-') | KeyCode::Char('_') => update_value_f(&mut self.scale, SCALE_STEP, 1.0, SCALE_MIN..SCALE_MAX),
			KeyCode::Char('s') => self.scatter = !self.scatter,
			KeyCode::Char('r') => self.scale = 1.0,
			_ => {},
		}
		false
	}
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
	let mut stdout = io::stdout();
	execute!(stdout, EnterAlternateScreen)?;
	let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
	terminal.hide_cursor()?;
	Ok(terminal)
}

fn restore_on_err<T>(res: Result<T, io::Error>, restore: impl FnOnce()) -> Result<T, io::Error> {
	if res.is_err() {
		restore();
	}
	res
}

fn update_value_f(val: &mut f64, base: f64, magnitude: f64, range: std::ops::Range<f64>) {
	let delta = base * magnitude;
	if *val + delta > range.end {
		*val = range.end
	} else if *val + delta < range.start {
		*val = range.start
	} else {
		*val += delta;
	}
}
