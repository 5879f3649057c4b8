pub mod commands;
pub mod endpoint;
pub mod http_transport;
pub mod service;
pub mod transport;

pub use commands::{BoardCommand, CommandContext};
pub use endpoint::{ApiRoot, Endpoint};
pub use http_transport::HttpTransport;
pub use service::BoardCommands;
pub use transport::{ApiResponse, Transport};
