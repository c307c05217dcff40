//! Academy Records - 课程、考试、成绩与复查申请管理后端
//!
//! 基于 Actix Web 与 SeaORM 构建，每类实体一条独立的
//! 存储 → 服务 → 路由链路。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 业务数据模型
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM / 内存）
//! - `utils`: 提取器与参数错误处理

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
