mod host;
mod host_config;

pub use host::{Host, NO_REMOTE_TEXT_PLACEHOLDER};
pub use host_config::HostConfig;
