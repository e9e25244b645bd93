//! Terminal host for the records view.
//!
//! `Session` owns a `TodoView` and a `Transport` and turns text commands into
//! view operations. `UreqTransport` is the blocking HTTP transport the binary
//! runs with.

pub mod app;
pub mod command;
pub mod config;
pub mod transport;

pub use app::Session;
pub use command::{Command, CommandError, HELP};
pub use config::Config;
pub use transport::UreqTransport;
