pub mod samples;

pub use samples::{read_samples, SampleRecord};
