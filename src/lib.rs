//! 一个基于 mini-redis 的异步 key-value 客户端.
//!
//! 由一个独立的链接任务持有 redis 链接, 调用方通过 channel 发送 GET / SET 命令.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod school;
pub mod server;

pub use client::{connect, print_reply, Ack, PendingSet, StoreClient};
pub use config::{Cli, StoreConfig};
pub use error::{ConnectionError, OperationError};
