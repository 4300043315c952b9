#![warn(rust_2018_idioms)]

pub mod command;
pub mod host;

pub use host::{HostBot, NopHost};
