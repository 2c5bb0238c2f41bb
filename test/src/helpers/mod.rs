pub mod exchange;
pub mod logging;
pub mod test_pair;

pub use exchange::{exchange, Exchanged};
pub use logging::init_logger;
pub use test_pair::{TestPair, CHILD_ORIGIN, HOST_ORIGIN};
