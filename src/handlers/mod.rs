pub mod greeting;
pub mod health;

pub use greeting::{endpoint1_handler, endpoint2_handler, endpoint3_handler};
pub use health::health_handler;
