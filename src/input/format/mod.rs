pub trait SampleParser<T> {
	fn parse(&self, data: &[u8]) -> T;
}

/// little endian two's complement integers, `depth` bytes wide
#[derive(Debug, Clone, Copy)]
pub struct SignedLEPCM {
	depth: usize,
}

impl SignedLEPCM {
	pub fn new(depth: u8) -> Self {
		assert!((1..=8).contains(&depth), "sample depth must be between 1 and 8 bytes");
		SignedLEPCM { depth: depth as usize }
	}

	pub fn depth(&self) -> usize {
		self.depth
	}

	/// largest magnitude a positive sample can have: 2^(8*depth - 1) - 1
	///
	/// the most negative sample is one further away, so it normalizes
	/// slightly past -1.0
	pub fn max_magnitude(&self) -> f64 {
		((1u64 << (8 * self.depth - 1)) - 1) as f64
	}

	pub fn normalize(&self, sample: i64) -> f64 {
		sample as f64 / self.max_magnitude()
	}
}

impl SampleParser<i64> for SignedLEPCM {
	fn parse(&self, chunk: &[u8]) -> i64 {
		let mut raw = 0u64;
		for (i, byte) in chunk.iter().take(self.depth).enumerate() {
			raw |= (*byte as u64) << (8 * i);
		}
		let shift = 64 - 8 * self.depth as u32;
		((raw << shift) as i64) >> shift
	}
}
