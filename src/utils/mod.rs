mod gracefullshutdown;
mod logs;
pub mod validation;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
