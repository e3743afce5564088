//! Connect-N 共享协议库
//!
//! 包含:
//! - 标记、棋盘等核心数据结构
//! - 重力落子与胜负判定规则
//! - 错误类型定义

mod board;
mod constants;
mod error;
mod mark;

pub use board::{BoardState, LastPlay};
pub use constants::*;
pub use error::{GameError, Result};
pub use mark::{Cell, Mark};
