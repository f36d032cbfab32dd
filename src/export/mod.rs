pub mod dump;
pub mod sink;
