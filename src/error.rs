use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
	#[error("could not read '{path}': {source}")]
	Open { path: String, source: std::io::Error },

	#[error("{0}")]
	Io(#[from] std::io::Error),

	#[error("failed to render plot: {0}")]
	Plot(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>> for GraphError {
	fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
		GraphError::Plot(format!("{value:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_are_human_readable() {
		let err = GraphError::Open {
			path: "sound.raw".into(),
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
		};
		assert_eq!(err.to_string(), "could not read 'sound.raw': No such file or directory");
		assert_eq!(GraphError::Plot("no font".into()).to_string(), "failed to render plot: no font");
	}
}
