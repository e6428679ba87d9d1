pub mod chunk_size;
pub mod error;
pub mod progress;
pub mod splitter;

pub use chunk_size::{parse_chunk_size, ByteCount};
pub use error::{Result, SplitError};
pub use progress::{ConsoleSink, LogPolicy, ProgressEvent, ProgressSink};
pub use splitter::{split, PartMetadata, SplitJob, SplitReport};
