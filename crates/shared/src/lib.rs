//! 共享库
//!
//! 包含夹具 crate 共用的配置、错误处理和日志初始化代码。

pub mod config;
pub mod error;
pub mod observability;

pub use error::{FixtureError, Result};
