//! Zobrist 哈希
//!
//! 将棋盘排布映射为规范的缓存键：内容相同的棋盘（无论落子顺序）
//! 哈希值必定相同，内容不同的棋盘实际上不会碰撞

use protocol::{BoardState, Mark};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Zobrist 哈希表
///
/// 为每个格子的每种标记生成随机 64 位键，棋盘哈希为所有
/// 已占用格子键的异或。键只与格子内容有关，不含走子方分量：
/// 缓存按"固定评估视角下的排布"取值（见 transposition 模块）
pub struct ZobristTable {
    /// 格子键，索引为 (row * num_columns + column) * 2 + mark
    keys: Vec<u64>,
    num_rows: usize,
    num_columns: usize,
}

impl ZobristTable {
    /// 创建指定尺寸的 Zobrist 表（使用固定种子保证确定性）
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(0x4C1E_57A7_E0B5_2DD1);

        let mut keys = vec![0u64; num_rows * num_columns * 2];
        for key in keys.iter_mut() {
            *key = rng.gen();
        }

        Self {
            keys,
            num_rows,
            num_columns,
        }
    }

    /// 计算棋盘排布的完整哈希值（空棋盘为 0）
    pub fn hash(&self, state: &BoardState) -> u64 {
        let mut hash = 0u64;

        for row in 0..self.num_rows {
            for column in 0..self.num_columns {
                if let Some(mark) = state.get(row, column) {
                    hash ^= self.cell_key(row, column, mark);
                }
            }
        }

        hash
    }

    /// 获取单个格子的键
    #[inline]
    fn cell_key(&self, row: usize, column: usize, mark: Mark) -> u64 {
        self.keys[(row * self.num_columns + column) * 2 + mark_index(mark)]
    }
}

/// 将标记转换为索引
#[inline]
fn mark_index(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}
