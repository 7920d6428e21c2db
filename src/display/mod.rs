pub mod plot;

pub const TITLE : &str = "Sound";
pub const X_LABEL : &str = "Time (sec)";
pub const Y_LABEL : &str = "Amplitude";

/// a labeled mark on the time axis, placed on a sample index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
	pub position: usize,
	pub label: usize,
}

/// everything needed to decorate a graph, derived from sample rate and data
#[derive(Debug, Clone)]
pub struct GraphConfig {
	pub title: &'static str,
	pub x_label: &'static str,
	pub y_label: &'static str,
	pub grid: bool,
	pub rate: u32,
	pub samples: usize,
	pub ticks: Vec<Tick>,
}

impl GraphConfig {
	pub fn new(rate: u32, samples: usize) -> Self {
		let ticks = second_ticks(samples, rate);
		if ticks.is_empty() {
			log::warn!("less than one second of audio ({} samples at {} Hz), time axis will have no ticks", samples, rate);
		}
		log::debug!("time axis gets {} ticks", ticks.len());
		GraphConfig {
			title: TITLE,
			x_label: X_LABEL,
			y_label: Y_LABEL,
			grid: true,
			rate,
			samples,
			ticks,
		}
	}

	pub fn seconds(&self) -> f64 {
		self.samples as f64 / self.rate as f64
	}
}

/// one tick per whole second of samples, at multiples of `rate`, labeled 0, 1, 2...
pub fn second_ticks(samples: usize, rate: u32) -> Vec<Tick> {
	let rate = rate as usize;
	if rate == 0 { return vec![] }
	(0..samples / rate)
		.map(|label| Tick { position: label * rate, label })
		.collect()
}

/// vertical range to show: data extremes with some headroom, [-1, 1] if flat
pub fn amplitude_bounds(points: &[f64]) -> (f64, f64) {
	let (min, max) = points.iter().fold(
		(f64::INFINITY, f64::NEG_INFINITY),
		|(lo, hi), v| (lo.min(*v), hi.max(*v)),
	);
	if !min.is_finite() || !max.is_finite() || (max - min).abs() < f64::EPSILON {
		return (-1.0, 1.0);
	}
	let pad = (max - min) * 0.05;
	(min - pad, max + pad)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn one_tick_per_whole_second() {
		let ticks = second_ticks(8000 * 3 + 7999, 8000);
		assert_eq!(ticks.len(), 3);
		assert_eq!(
			ticks,
			vec![
				Tick { position: 0, label: 0 },
				Tick { position: 8000, label: 1 },
				Tick { position: 16000, label: 2 },
			]
		);
	}

	#[test]
	fn less_than_a_second_has_no_ticks() {
		assert!(second_ticks(7999, 8000).is_empty());
		assert!(second_ticks(0, 8000).is_empty());
		assert_eq!(second_ticks(8000, 8000).len(), 1);
	}

	#[test]
	fn tick_positions_are_multiples_of_rate() {
		let rate = 441;
		let ticks = second_ticks(44100, rate);
		assert_eq!(ticks.len(), 100);
		for (i, tick) in ticks.iter().enumerate() {
			assert_eq!(tick.label, i);
			assert_eq!(tick.position, i * rate as usize);
		}
	}

	#[test]
	fn config_is_decorated() {
		let cfg = GraphConfig::new(4, 10);
		assert_eq!(cfg.title, "Sound");
		assert_eq!(cfg.x_label, "Time (sec)");
		assert_eq!(cfg.y_label, "Amplitude");
		assert!(cfg.grid);
		assert_eq!(cfg.ticks.len(), 2);
		assert_eq!(cfg.seconds(), 2.5);
	}

	#[test]
	fn bounds_cover_data() {
		let (lo, hi) = amplitude_bounds(&[-0.5, 0.25, 1.0]);
		assert!(lo < -0.5 && hi > 1.0);
		assert_eq!(amplitude_bounds(&[]), (-1.0, 1.0));
		assert_eq!(amplitude_bounds(&[0.0, 0.0]), (-1.0, 1.0));
	}
}
