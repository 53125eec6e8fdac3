pub mod buy;
pub mod create_pool;
pub mod init_config;
pub mod sell;
pub mod transfers;
pub mod update_config;
pub mod withdraw;

pub use buy::*;
pub use create_pool::*;
pub use init_config::*;
pub use sell::*;
pub use update_config::*;
pub use withdraw::*;
