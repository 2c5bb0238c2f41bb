pub mod error;
pub mod origin;
pub mod origin_gate;
