pub mod builders;

pub use builders::{PageBuilder, RecordingOpener};
