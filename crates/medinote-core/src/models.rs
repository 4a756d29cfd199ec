pub mod analysis;
pub mod entity;
pub mod sentiment;
pub mod severity;
