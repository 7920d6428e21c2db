use clap::Parser;

pub const USAGE : &str = "Usage: pcm-graph PATH RATE DEPTH DURATION";

const HELP_TEMPLATE : &str = "{before-help}\
{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}
";

/// plot a raw PCM audio file as amplitude over time
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, help_template = HELP_TEMPLATE)]
pub struct GraphArgs {
	/// path on filesystem of raw headerless PCM file
	pub path: String,

	/// sample rate of the file, in samples per second
	#[arg(value_name = "RATE", value_parser = clap::value_parser!(u32).range(1..))]
	pub rate: u32,

	/// bytes per sample, little endian signed
	#[arg(value_name = "DEPTH", value_parser = clap::value_parser!(u8).range(1..=8))]
	pub depth: u8,

	/// how many seconds of audio to read at most
	#[arg(value_name = "DURATION", value_parser = parse_duration)]
	pub duration: f64,

	#[command(flatten)]
	pub ui: UiOptions,
}

#[derive(Debug, Clone, Parser)]
pub struct UiOptions {
	/// base name of output images, .svg and .jpg get appended
	#[arg(short, long, value_name = "BASE", default_value = "Graph")]
	pub output: String,

	/// only write image files, don't open the interactive view
	#[arg(long, default_value_t = false)]
	pub no_window: bool,

	/// use vintage looking scatter mode instead of line mode
	#[arg(long, default_value_t = false)]
	pub scatter: bool,

	/// don't use braille dots for drawing lines
	#[arg(long, default_value_t = false)]
	pub no_braille: bool,
}

impl GraphArgs {
	/// samples to collect before stopping: floor(rate * duration)
	pub fn sample_limit(&self) -> usize {
		(self.rate as f64 * self.duration).floor() as usize
	}
}

fn parse_duration(txt: &str) -> Result<f64, String> {
	let value : f64 = txt.parse().map_err(|e| format!("'{txt}' is not a number: {e}"))?;
	if !value.is_finite() || value <= 0.0 {
		return Err(format!("duration must be a positive number of seconds, got {value}"));
	}
	Ok(value)
}
