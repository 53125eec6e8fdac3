pub mod global_config;
pub mod participant;
pub mod pool;
pub mod user;

pub use global_config::*;
pub use participant::*;
pub use pool::*;
pub use user::*;
