mod account_gateway;

pub use account_gateway::*;
