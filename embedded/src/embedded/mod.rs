mod embedded;
mod embedded_config;

pub use embedded::Embedded;
pub use embedded_config::{EmbeddedConfig, EmbeddedVariant};
