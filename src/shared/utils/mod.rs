pub mod ids;
pub mod logger;
