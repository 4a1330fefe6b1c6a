pub mod health;

pub use health::{health, HEALTH_BODY};
