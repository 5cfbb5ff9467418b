pub mod sinks;

pub use sinks::{find_sink, parse_sinks};
