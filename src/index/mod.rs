pub mod builder;
pub mod inverted;
pub mod snapshot;
