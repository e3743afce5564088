//! 错误类型定义

use thiserror::Error;

/// 游戏规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 无效的列号
    #[error("Invalid column: {column} (board has {num_columns} columns)")]
    InvalidColumn { column: usize, num_columns: usize },

    /// 列已满
    #[error("Column {column} is full")]
    ColumnFull { column: usize },

    /// 无效的棋盘尺寸
    #[error("Invalid dimensions: {rows}x{columns} with win length {win_num}")]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        win_num: usize,
    },
}

/// 游戏操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
