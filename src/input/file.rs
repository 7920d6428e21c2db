use std::{fs::File, io::{self, ErrorKind, Read}, path::Path};

use super::format::{SampleParser, SignedLEPCM};

/// reads fixed width samples from a raw PCM stream, until either the stream
/// ends or `limit` samples have been read
pub struct FileSource<R: Read> {
	reader: R,
	buffer: Vec<u8>,
	format: SignedLEPCM,
	limit: usize,
	count: usize,
	exhausted: bool,
}

impl FileSource<File> {
	pub fn open(path: impl AsRef<Path>, depth: u8, limit: usize) -> Result<Self, io::Error> {
		Ok(FileSource::new(File::open(path)?, depth, limit))
	}
}

impl<R: Read> FileSource<R> {
	pub fn new(reader: R, depth: u8, limit: usize) -> Self {
		let format = SignedLEPCM::new(depth);
		FileSource {
			reader,
			buffer: vec![0u8; format.depth()],
			format,
			limit,
			count: 0,
			exhausted: false,
		}
	}

	/// next raw sample, None once the limit is hit or the stream ran dry
	pub fn recv(&mut self) -> Result<Option<i64>, io::Error> {
		if self.exhausted || self.count >= self.limit {
			return Ok(None);
		}
		let mut filled = 0;
		while filled < self.buffer.len() {
			match self.reader.read(&mut self.buffer[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			}
		}
		if filled < self.buffer.len() {
			self.exhausted = true;
			if filled > 0 {
				log::warn!("discarding trailing {} byte(s), shorter than one {}-byte sample", filled, self.buffer.len());
			}
			return Ok(None);
		}
		self.count += 1;
		Ok(Some(self.format.parse(&self.buffer)))
	}

	/// decode and normalize everything available, in time order
	pub fn points(&mut self) -> Result<Vec<f64>, io::Error> {
		log::debug!(
			"decoding {}-byte samples, normalizing by {}",
			self.format.depth(), self.format.max_magnitude(),
		);
		let mut out = Vec::with_capacity(self.limit.min(1 << 20));
		while let Some(sample) = self.recv()? {
			out.push(self.format.normalize(sample));
		}
		log::info!("decoded {} samples (limit {})", out.len(), self.limit);
		Ok(out)
	}

	#[cfg(test)]
	fn into_inner(self) -> R {
		self.reader
	}
}

#[cfg(test)]
mod tests {
	use std::io::{Cursor, Write};

	use super::*;

	fn pcm16(samples: impl IntoIterator<Item = i16>) -> Vec<u8> {
		samples.into_iter().flat_map(|s| s.to_le_bytes()).collect()
	}

	#[test]
	fn one_second_of_alternating_samples() {
		let data = pcm16((0..8000).map(|i| if i % 2 == 0 { 0 } else { 16383 }));
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&data).unwrap();
		file.flush().unwrap();

		let mut source = FileSource::open(file.path(), 2, 8000).unwrap();
		let points = source.points().unwrap();
		assert_eq!(points.len(), 8000);
		for (i, p) in points.iter().enumerate() {
			if i % 2 == 0 {
				assert_eq!(*p, 0.0);
			} else {
				assert_eq!(*p, 16383.0 / 32767.0);
			}
		}
		assert!((points[1] - 0.49999).abs() < 1e-4);
	}

	#[test]
	fn short_file_stops_at_end_of_stream() {
		let data = pcm16([1, 2, 3, 4, 5]);
		let mut source = FileSource::new(Cursor::new(data), 2, 8000);
		assert_eq!(source.points().unwrap().len(), 5);
		assert!(source.recv().unwrap().is_none());
	}

	#[test]
	fn trailing_partial_chunk_is_discarded() {
		let mut data = pcm16([100, -100]);
		data.push(0x7f);
		let mut source = FileSource::new(Cursor::new(data), 2, 10);
		let points = source.points().unwrap();
		assert_eq!(points, vec![100.0 / 32767.0, -100.0 / 32767.0]);
	}

	#[test]
	fn long_file_stops_at_limit_without_reading_further() {
		let data = pcm16(0..100);
		let mut source = FileSource::new(Cursor::new(data), 2, 10);
		let points = source.points().unwrap();
		assert_eq!(points.len(), 10);
		assert_eq!(points[9], 9.0 / 32767.0);
		assert!(source.recv().unwrap().is_none());
		assert_eq!(source.into_inner().position(), 20);
	}

	#[test]
	fn zero_limit_reads_nothing() {
		let mut source = FileSource::new(Cursor::new(pcm16([1, 2])), 2, 0);
		assert!(source.points().unwrap().is_empty());
		assert_eq!(source.into_inner().position(), 0);
	}

	#[test]
	fn most_negative_sample_keeps_its_overshoot() {
		let mut source = FileSource::new(Cursor::new(pcm16([i16::MIN])), 2, 1);
		assert_eq!(source.points().unwrap(), vec![-32768.0 / 32767.0]);
	}

	#[test]
	fn three_byte_samples() {
		let data = vec![0xff, 0xff, 0x7f, 0x00, 0x00, 0x80];
		let mut source = FileSource::new(Cursor::new(data), 3, 10);
		assert_eq!(source.recv().unwrap(), Some(8_388_607));
		assert_eq!(source.recv().unwrap(), Some(-8_388_608));
		assert_eq!(source.recv().unwrap(), None);
	}

	#[test]
	fn missing_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = FileSource::open(dir.path().join("nope.raw"), 2, 1).err().unwrap();
		assert_eq!(err.kind(), ErrorKind::NotFound);
	}
}
