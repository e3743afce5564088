//! Connect-N 对弈 AI 引擎
//!
//! 包含:
//! - 局面评估函数
//! - 无剪枝 Minimax 搜索
//! - Alpha-Beta 剪枝搜索
//! - Zobrist 哈希
//! - 评估缓存（置换表）

mod evaluate;
mod search;
mod transposition;
mod zobrist;

pub use evaluate::Evaluator;
pub use search::{Agent, SearchConfig, SearchResult, WIN_SCORE};
pub use transposition::{CacheStats, EvalCache};
pub use zobrist::ZobristTable;
