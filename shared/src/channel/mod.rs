pub mod channel_adapter;
pub mod error;
