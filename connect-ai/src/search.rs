//! 搜索引擎
//!
//! 实现两种可互换的固定深度对抗搜索策略:
//! 无剪枝 Minimax 与 Alpha-Beta 剪枝 Minimax

use protocol::{BoardState, Mark, DEFAULT_NUM_COLUMNS, DEFAULT_NUM_ROWS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;
use crate::transposition::{CacheStats, EvalCache};
use crate::zobrist::ZobristTable;

/// 必胜/必败终局的饱和分值
pub const WIN_SCORE: i32 = 100_000;

/// 搜索配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// select_move 使用的 Minimax 搜索深度（步数）
    pub minimax_depth: u8,
    /// select_move_alpha_beta 使用的搜索深度
    pub alpha_beta_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minimax_depth: 3,
            alpha_beta_depth: 6,
        }
    }
}

/// 单个节点的搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 回传分值
    pub value: i32,
    /// 该节点的最佳列（终局/叶子节点为 None）
    pub column: Option<usize>,
}

/// 搜索代理
///
/// 持有本方标记、评估缓存和统计计数器，为一方选择落子列。
/// 每次假想落子都通过复制产生新棋盘，兄弟分支互不可见。
/// 单线程使用；计数器只能通过重新构造代理复位
pub struct Agent {
    mark: Mark,
    config: SearchConfig,
    zobrist: ZobristTable,
    cache: EvalCache,
    nodes_expanded: u64,
    prunes: u64,
}

impl Agent {
    /// 为指定尺寸的棋盘创建代理
    pub fn new(mark: Mark, num_rows: usize, num_columns: usize, config: SearchConfig) -> Self {
        Self {
            mark,
            config,
            zobrist: ZobristTable::new(num_rows, num_columns),
            cache: EvalCache::new(),
            nodes_expanded: 0,
            prunes: 0,
        }
    }

    /// 以默认棋盘尺寸和默认深度创建
    pub fn with_defaults(mark: Mark) -> Self {
        Self::new(
            mark,
            DEFAULT_NUM_ROWS,
            DEFAULT_NUM_COLUMNS,
            SearchConfig::default(),
        )
    }

    /// 本方标记
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// 搜索配置
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 已展开的子节点总数
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// 已发生的剪枝次数
    pub fn prunes(&self) -> u64 {
        self.prunes
    }

    /// 评估缓存统计
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// 用无剪枝 Minimax 选择落子列
    ///
    /// 调用方必须保证局面尚未结束；搜索未产生列时退回列 0
    pub fn select_move(&mut self, state: &BoardState) -> usize {
        debug_assert!(
            !state.check_win() && !state.check_full(),
            "select_move called on a finished position"
        );

        let result = self.minimax(state, self.config.minimax_depth, true);
        let column = result.column.unwrap_or(0);
        debug!(
            "minimax: column={} value={} nodes={} cache_hit_rate={:.2}",
            column,
            result.value,
            self.nodes_expanded,
            self.cache.hit_rate()
        );
        column
    }

    /// 用 Alpha-Beta 剪枝 Minimax 选择落子列
    ///
    /// 与 select_move 的约定相同，只是搜索更深且会剪枝
    pub fn select_move_alpha_beta(&mut self, state: &BoardState) -> usize {
        debug_assert!(
            !state.check_win() && !state.check_full(),
            "select_move_alpha_beta called on a finished position"
        );

        let result = self.alpha_beta(
            state,
            self.config.alpha_beta_depth,
            i32::MIN,
            i32::MAX,
            true,
        );
        let column = result.column.unwrap_or(0);
        debug!(
            "alpha_beta: column={} value={} nodes={} prunes={} cache_hit_rate={:.2}",
            column,
            result.value,
            self.nodes_expanded,
            self.prunes,
            self.cache.hit_rate()
        );
        column
    }

    /// 无剪枝 Minimax
    ///
    /// maximizing 为 true 时轮到本方落子。合法列按升序展开，
    /// 分值严格更优才替换，同分保留先到的列
    pub fn minimax(&mut self, state: &BoardState, depth: u8, maximizing: bool) -> SearchResult {
        let finished = state.check_win() || state.check_full();
        if depth == 0 || finished {
            if finished {
                return SearchResult {
                    value: self.terminal_value(state),
                    column: None,
                };
            }
            return SearchResult {
                value: self.leaf_value(state),
                column: None,
            };
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            // 满盘应已被终局检测拦截；返回恒等值而非未初始化的极值
            return SearchResult {
                value: 0,
                column: None,
            };
        }

        if maximizing {
            let mut value = i32::MIN;
            let mut column = None;
            for col in moves {
                self.nodes_expanded += 1;
                if let Ok(next) = state.apply(col, self.mark) {
                    let score = self.minimax(&next, depth - 1, false).value;
                    if score > value {
                        value = score;
                        column = Some(col);
                    }
                }
            }
            SearchResult { value, column }
        } else {
            let mut value = i32::MAX;
            let mut column = None;
            for col in moves {
                self.nodes_expanded += 1;
                if let Ok(next) = state.apply(col, self.mark.opponent()) {
                    let score = self.minimax(&next, depth - 1, true).value;
                    if score < value {
                        value = score;
                        column = Some(col);
                    }
                }
            }
            SearchResult { value, column }
        }
    }

    /// Alpha-Beta 剪枝 Minimax
    ///
    /// 状态机和终局/叶子处理与 minimax 完全一致，只是额外按值
    /// 传递窗口 (alpha, beta)：一旦 alpha >= beta，剩余兄弟分支
    /// 已被证明不影响根部决策，停止展开。相同深度和展开顺序下
    /// 剪枝不改变返回的分值与所选列
    pub fn alpha_beta(
        &mut self,
        state: &BoardState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        let finished = state.check_win() || state.check_full();
        if depth == 0 || finished {
            if finished {
                return SearchResult {
                    value: self.terminal_value(state),
                    column: None,
                };
            }
            return SearchResult {
                value: self.leaf_value(state),
                column: None,
            };
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return SearchResult {
                value: 0,
                column: None,
            };
        }

        if maximizing {
            let mut value = i32::MIN;
            let mut column = None;
            for col in moves {
                self.nodes_expanded += 1;
                if let Ok(next) = state.apply(col, self.mark) {
                    let score = self.alpha_beta(&next, depth - 1, alpha, beta, false).value;
                    if score > value {
                        value = score;
                        column = Some(col);
                    }
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        self.prunes += 1;
                        break;
                    }
                }
            }
            SearchResult { value, column }
        } else {
            let mut value = i32::MAX;
            let mut column = None;
            for col in moves {
                self.nodes_expanded += 1;
                if let Ok(next) = state.apply(col, self.mark.opponent()) {
                    let score = self.alpha_beta(&next, depth - 1, alpha, beta, true).value;
                    if score < value {
                        value = score;
                        column = Some(col);
                    }
                    beta = beta.min(value);
                    if alpha >= beta {
                        self.prunes += 1;
                        break;
                    }
                }
            }
            SearchResult { value, column }
        }
    }

    /// 终局分值
    ///
    /// 获胜方即最近落子方：为本方则 +WIN_SCORE，否则 -WIN_SCORE；
    /// 满盘无胜为和棋 0，不调用评估函数
    fn terminal_value(&self, state: &BoardState) -> i32 {
        if state.check_win() {
            if state.last_mark() == Some(self.mark) {
                WIN_SCORE
            } else {
                -WIN_SCORE
            }
        } else {
            0
        }
    }

    /// 叶子评估：先查缓存，未命中才调用评估函数并回填
    ///
    /// 缓存只保存"本方视角"的分数，键为排布的 Zobrist 哈希
    fn leaf_value(&mut self, state: &BoardState) -> i32 {
        let key = self.zobrist.hash(state);
        if let Some(score) = self.cache.probe(key) {
            return score;
        }

        let score = Evaluator::evaluate(state, self.mark);
        self.cache.store(key, score);
        score
    }
}
