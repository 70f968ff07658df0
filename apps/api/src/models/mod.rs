pub mod assessment;
pub mod gap;
pub mod resource;
