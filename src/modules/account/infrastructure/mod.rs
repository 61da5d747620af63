pub mod http_account_gateway;

pub use http_account_gateway::HttpAccountGateway;
