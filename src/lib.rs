pub mod bundle;
pub mod config;
pub mod error;

pub use bundle::{Bundle, InputKind, InputSet, Sources, combine, read_sources, write_output};
pub use config::Config;
pub use error::BundleError;
