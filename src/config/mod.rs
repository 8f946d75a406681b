pub mod settings;

pub use settings::{ColorMode, OutputFormat, Settings};
