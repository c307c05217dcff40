//! 配置管理
//!
//! 默认值 → config.toml → config.{APP_ENV}.toml → ACADEMY_* 环境变量 → 常用环境变量覆盖。

mod r#impl;
mod structs;

pub use structs::*;
