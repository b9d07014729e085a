//! 核心模块 - 会话配置和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 会话配置
//! - [`SessionError`] - 会话错误

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Result, SessionError};
