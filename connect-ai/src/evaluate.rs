//! 棋局评估函数
//!
//! 对非终局局面赋一个启发式分值，只在搜索深度耗尽的叶子节点使用

use protocol::{BoardState, Mark};

/// 中心列每个己方棋子的加成（中心列参与的潜在连线最多）
const CENTER_BONUS: i32 = 6;

/// 整窗己方连线的加成
const WINDOW_WIN_BONUS: i32 = 50;

/// 部分成形连线按已有子数的加成系数
const PARTIAL_FACTOR: i32 = 5;

/// 对方临门一脚窗口的惩罚系数（乘以连线长度）
const THREAT_FACTOR: i32 = 10;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 从指定标记的视角评估棋局（正值对该方有利）
    ///
    /// 中心列控制加成，加上四个方向所有 win_num 长度窗口的逐窗评分
    pub fn evaluate(state: &BoardState, mark: Mark) -> i32 {
        let rows = state.num_rows();
        let cols = state.num_columns();
        let n = state.win_num();

        let mut score = 0;

        // 中心列控制加成
        let center = cols / 2;
        for row in 0..rows {
            if state.get(row, center) == Some(mark) {
                score += CENTER_BONUS;
            }
        }

        // 窗口起点的合法范围（连线长度可能超过某一边）
        let h_starts = if cols >= n { cols - n + 1 } else { 0 };
        let v_starts = if rows >= n { rows - n + 1 } else { 0 };

        // 横向（每行从左到右）
        for row in 0..rows {
            for col in 0..h_starts {
                score += Self::window_at(state, row, col, 0, 1, mark);
            }
        }

        // 纵向（每列从下到上）
        for col in 0..cols {
            for row in 0..v_starts {
                score += Self::window_at(state, row, col, 1, 0, mark);
            }
        }

        // 右上对角
        for row in 0..v_starts {
            for col in 0..h_starts {
                score += Self::window_at(state, row, col, 1, 1, mark);
            }
        }

        // 右下对角
        for row in 0..v_starts {
            for col in 0..h_starts {
                score += Self::window_at(state, row + n - 1, col, -1, 1, mark);
            }
        }

        score
    }

    /// 统计从 (row, col) 沿 (dr, dc) 方向的 win_num 窗口并评分
    fn window_at(
        state: &BoardState,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        own: Mark,
    ) -> i32 {
        let n = state.win_num();
        let mut own_count = 0;
        let mut opp_count = 0;
        let mut empty_count = 0;

        for i in 0..n {
            let r = (row as isize + dr * i as isize) as usize;
            let c = (col as isize + dc * i as isize) as usize;
            match state.get(r, c) {
                Some(m) if m == own => own_count += 1,
                Some(_) => opp_count += 1,
                None => empty_count += 1,
            }
        }

        Self::window_score(own_count, opp_count, empty_count, n)
    }

    /// 单个窗口的评分规则（三项检查相互独立，可叠加）
    fn window_score(own: usize, opp: usize, empty: usize, win_num: usize) -> i32 {
        let mut value = 0;

        // 整窗连线（通常已被搜索的终局检测拦截）
        if own == win_num {
            value += WINDOW_WIN_BONUS;
        }

        // 部分成形且无对方干扰、仍可完成的连线，按已有子数加分
        if own >= 2 && own < win_num && empty == win_num - own {
            value += PARTIAL_FACTOR * own as i32;
        }

        // 对方只差一子即可在此窗口连线：惩罚大于任何单窗进攻加成
        if opp == win_num - 1 && empty == 1 {
            value -= THREAT_FACTOR * win_num as i32;
        }

        value
    }
}
