pub mod input;
pub mod page;
pub mod server;
