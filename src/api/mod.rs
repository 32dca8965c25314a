pub mod errors;
pub mod payloads;
pub mod server;
pub mod users;
