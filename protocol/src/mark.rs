//! 棋子标记定义

use serde::{Deserialize, Serialize};

/// 棋子标记
///
/// Connect-N 是双人游戏，双方各执一种标记，X 先手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// 先手方
    X,
    /// 后手方
    O,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 格子内容（空或某方标记）
pub type Cell = Option<Mark>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_char_roundtrip() {
        assert_eq!(Mark::from_char('X'), Some(Mark::X));
        assert_eq!(Mark::from_char('o'), Some(Mark::O));
        assert_eq!(Mark::from_char('.'), None);
        assert_eq!(Mark::X.to_char(), 'X');
    }
}
