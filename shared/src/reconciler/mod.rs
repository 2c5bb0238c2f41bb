pub mod events;
pub mod link_state;
pub mod local_state;
pub mod reconciler;
pub mod sync_config;
