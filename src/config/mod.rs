mod model;
mod store;

pub use model::SinkConfig;
pub use store::ConfigStore;
