//! 协议常量定义

/// 默认行数
pub const DEFAULT_NUM_ROWS: usize = 6;

/// 默认列数
pub const DEFAULT_NUM_COLUMNS: usize = 7;

/// 默认连线长度（获胜所需连续棋子数）
pub const DEFAULT_WIN_NUM: usize = 4;

/// 最小连线长度
pub const MIN_WIN_NUM: usize = 2;
