//! 棋盘状态
//!
//! 重力落子规则：棋子落入所选列的最低空位，行 0 在底部

use serde::{Deserialize, Serialize};

use crate::constants::MIN_WIN_NUM;
use crate::error::{GameError, Result};
use crate::mark::{Cell, Mark};

/// 最近一手棋的记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPlay {
    /// 落子列
    pub column: usize,
    /// 落子行（0 为底部）
    pub row: usize,
    /// 落子方
    pub mark: Mark,
}

/// 棋盘状态
///
/// 行优先存储，索引为 row * num_columns + column。
/// 不变式：col_fills[c] 等于第 c 列非空格子数，且这些格子
/// 连续占据行 0..col_fills[c]（重力不变式）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 格子内容，使用 Vec 以支持可配置尺寸和 serde
    cells: Vec<Cell>,
    /// 每列已落子数
    col_fills: Vec<usize>,
    /// 行数
    num_rows: usize,
    /// 列数
    num_columns: usize,
    /// 获胜所需连线长度
    win_num: usize,
    /// 最近一手棋（空棋盘为 None）
    last_play: Option<LastPlay>,
}

impl BoardState {
    /// 创建空棋盘
    ///
    /// 连线长度必须不小于 2 且不超过较长的一边，否则这局游戏
    /// 永远无法（或开局即）分出胜负
    pub fn new(num_rows: usize, num_columns: usize, win_num: usize) -> Result<Self> {
        if num_rows == 0
            || num_columns == 0
            || win_num < MIN_WIN_NUM
            || win_num > num_rows.max(num_columns)
        {
            return Err(GameError::InvalidDimensions {
                rows: num_rows,
                columns: num_columns,
                win_num,
            });
        }

        Ok(Self {
            cells: vec![None; num_rows * num_columns],
            col_fills: vec![0; num_columns],
            num_rows,
            num_columns,
            win_num,
            last_play: None,
        })
    }

    /// 获取指定位置的格子内容（越界视为空）
    pub fn get(&self, row: usize, column: usize) -> Cell {
        if row < self.num_rows && column < self.num_columns {
            self.cells[row * self.num_columns + column]
        } else {
            None
        }
    }

    /// 带符号坐标的格子访问，供方向扫描使用
    fn cell_at(&self, row: isize, column: isize) -> Cell {
        if row < 0
            || column < 0
            || row >= self.num_rows as isize
            || column >= self.num_columns as isize
        {
            None
        } else {
            self.cells[row as usize * self.num_columns + column as usize]
        }
    }

    /// 行数
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// 列数
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// 获胜所需连线长度
    pub fn win_num(&self) -> usize {
        self.win_num
    }

    /// 指定列的已落子数
    pub fn column_fill(&self, column: usize) -> usize {
        self.col_fills.get(column).copied().unwrap_or(0)
    }

    /// 棋盘是否为空
    pub fn is_empty(&self) -> bool {
        self.col_fills.iter().all(|&fill| fill == 0)
    }

    /// 最近一手棋的记录
    pub fn last_play(&self) -> Option<LastPlay> {
        self.last_play
    }

    /// 最近落子方（空棋盘为 None）
    pub fn last_mark(&self) -> Option<Mark> {
        self.last_play.map(|play| play.mark)
    }

    /// 所有未满的列，按列号升序
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.num_columns)
            .filter(|&column| self.col_fills[column] < self.num_rows)
            .collect()
    }

    /// 落子，返回新棋盘（复制语义，不修改自身）
    pub fn apply(&self, column: usize, mark: Mark) -> Result<BoardState> {
        if column >= self.num_columns {
            return Err(GameError::InvalidColumn {
                column,
                num_columns: self.num_columns,
            });
        }

        let row = self.col_fills[column];
        if row >= self.num_rows {
            return Err(GameError::ColumnFull { column });
        }

        let mut next = self.clone();
        next.cells[row * next.num_columns + column] = Some(mark);
        next.col_fills[column] = row + 1;
        next.last_play = Some(LastPlay { column, row, mark });
        Ok(next)
    }

    /// 从 (row, column) 出发沿 (dr, dc) 方向是否有 win_num 个同色棋子
    fn run_matches(&self, row: usize, column: usize, dr: isize, dc: isize) -> bool {
        let first = self.get(row, column);
        if first.is_none() {
            return false;
        }
        (1..self.win_num).all(|i| {
            let r = row as isize + dr * i as isize;
            let c = column as isize + dc * i as isize;
            self.cell_at(r, c) == first
        })
    }

    /// 任意一方是否已连成 win_num 长度的线
    pub fn check_win(&self) -> bool {
        for row in 0..self.num_rows {
            for column in 0..self.num_columns {
                // 从每个格子向右、向上及两条对角线方向探测即可覆盖所有连线
                if self.run_matches(row, column, 0, 1)
                    || self.run_matches(row, column, 1, 0)
                    || self.run_matches(row, column, 1, 1)
                    || self.run_matches(row, column, 1, -1)
                {
                    return true;
                }
            }
        }
        false
    }

    /// 棋盘是否已满
    pub fn check_full(&self) -> bool {
        self.col_fills.iter().all(|&fill| fill == self.num_rows)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            cells: vec![
                None;
                crate::constants::DEFAULT_NUM_ROWS * crate::constants::DEFAULT_NUM_COLUMNS
            ],
            col_fills: vec![0; crate::constants::DEFAULT_NUM_COLUMNS],
            num_rows: crate::constants::DEFAULT_NUM_ROWS,
            num_columns: crate::constants::DEFAULT_NUM_COLUMNS,
            win_num: crate::constants::DEFAULT_WIN_NUM,
            last_play: None,
        }
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 顶行在前，底行在后
        for row in (0..self.num_rows).rev() {
            for column in 0..self.num_columns {
                if column > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, column) {
                    Some(mark) => write!(f, "{}", mark.to_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_4x4_win3() -> BoardState {
        BoardState::new(4, 4, 3).unwrap()
    }

    /// 按列序列依次落子，双方交替由调用者指定
    fn play(board: &BoardState, moves: &[(usize, Mark)]) -> BoardState {
        let mut state = board.clone();
        for &(column, mark) in moves {
            state = state.apply(column, mark).unwrap();
        }
        state
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board_4x4_win3();
        assert!(board.is_empty());
        assert!(!board.check_win());
        assert!(!board.check_full());
        assert_eq!(board.last_mark(), None);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(BoardState::new(0, 7, 4).is_err());
        assert!(BoardState::new(6, 0, 4).is_err());
        assert!(BoardState::new(6, 7, 1).is_err());
        // 连线长度超过较长边
        assert_eq!(
            BoardState::new(4, 4, 5),
            Err(GameError::InvalidDimensions {
                rows: 4,
                columns: 4,
                win_num: 5
            })
        );
        // 恰好等于较长边是合法的
        assert!(BoardState::new(4, 6, 6).is_ok());
    }

    #[test]
    fn test_gravity_drop() {
        let board = board_4x4_win3();

        // 第一子落到行 0
        let board = board.apply(2, Mark::X).unwrap();
        assert_eq!(board.get(0, 2), Some(Mark::X));
        assert_eq!(board.column_fill(2), 1);

        // 同列第二子落到行 1
        let board = board.apply(2, Mark::O).unwrap();
        assert_eq!(board.get(1, 2), Some(Mark::O));
        assert_eq!(board.column_fill(2), 2);

        // 记录最近一手
        assert_eq!(
            board.last_play(),
            Some(LastPlay {
                column: 2,
                row: 1,
                mark: Mark::O
            })
        );
    }

    #[test]
    fn test_apply_copy_semantics() {
        let board = board_4x4_win3();
        let next = board.apply(0, Mark::X).unwrap();

        // 原棋盘不受影响
        assert!(board.is_empty());
        assert_eq!(board.get(0, 0), None);
        assert_eq!(next.get(0, 0), Some(Mark::X));
    }

    #[test]
    fn test_apply_errors() {
        let board = board_4x4_win3();
        assert_eq!(
            board.apply(4, Mark::X),
            Err(GameError::InvalidColumn {
                column: 4,
                num_columns: 4
            })
        );

        // 填满第 0 列
        let mut state = board;
        for _ in 0..4 {
            state = state.apply(0, Mark::X).unwrap();
        }
        assert_eq!(
            state.apply(0, Mark::O),
            Err(GameError::ColumnFull { column: 0 })
        );
        assert_eq!(state.legal_moves(), vec![1, 2, 3]);
    }

    #[test]
    fn test_win_horizontal() {
        let board = board_4x4_win3();
        let state = play(
            &board,
            &[(0, Mark::X), (0, Mark::O), (1, Mark::X), (1, Mark::O)],
        );
        assert!(!state.check_win());

        let state = state.apply(2, Mark::X).unwrap();
        assert!(state.check_win());
    }

    #[test]
    fn test_win_vertical() {
        let board = board_4x4_win3();
        let state = play(
            &board,
            &[
                (1, Mark::O),
                (2, Mark::X),
                (1, Mark::O),
                (3, Mark::X),
                (1, Mark::O),
            ],
        );
        assert!(state.check_win());
    }

    #[test]
    fn test_win_diagonal_up() {
        let board = board_4x4_win3();
        // X 连成 (0,0), (1,1), (2,2)
        let state = play(
            &board,
            &[
                (1, Mark::O),
                (0, Mark::X),
                (1, Mark::X),
                (2, Mark::O),
                (2, Mark::O),
            ],
        );
        assert!(!state.check_win());

        let state = state.apply(2, Mark::X).unwrap();
        assert!(state.check_win());
    }

    #[test]
    fn test_win_diagonal_down() {
        let board = board_4x4_win3();
        // O 连成 (2,0), (1,1), (0,2)
        let state = play(
            &board,
            &[
                (1, Mark::X),
                (1, Mark::O),
                (0, Mark::X),
                (2, Mark::O),
                (0, Mark::X),
            ],
        );
        assert!(!state.check_win());

        let state = state.apply(0, Mark::O).unwrap();
        assert!(state.check_win());
    }

    #[test]
    fn test_full_board_draw() {
        // 3x3 连 3，手工排布一个没有任何连线的满盘
        let board = BoardState::new(3, 3, 3).unwrap();
        let state = play(
            &board,
            &[
                (0, Mark::X),
                (0, Mark::O),
                (0, Mark::X),
                (1, Mark::O),
                (1, Mark::X),
                (1, Mark::O),
                (2, Mark::O),
                (2, Mark::X),
                (2, Mark::O),
            ],
        );
        // 布局（顶行在前）:
        // X O O
        // O X X
        // X O O
        assert!(state.check_full());
        assert!(!state.check_win());
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_display() {
        let board = board_4x4_win3();
        let state = play(&board, &[(0, Mark::X), (1, Mark::O)]);
        let text = state.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        // 底行最后输出
        assert_eq!(lines[3], "X O . .");
        assert_eq!(lines[0], ". . . .");
    }

    #[test]
    fn test_default_board() {
        let board = BoardState::default();
        assert_eq!(board.num_rows(), 6);
        assert_eq!(board.num_columns(), 7);
        assert_eq!(board.win_num(), 4);
        assert!(board.is_empty());
    }
}
