pub mod measurement;
pub mod order;
pub mod provider;
