//! 评估缓存（置换表）
//!
//! 缓存已评估过的棋盘排布，避免重复计算。条目惰性创建，
//! 在代理的生命周期内永不淘汰、永不失效：固定评估策略下
//! 同一排布的分数是不变的事实

use std::collections::HashMap;

/// 评估缓存
///
/// 键为棋盘排布的 Zobrist 哈希，值为启发式评估分。
/// 由单个代理独占，仅用于"己方视角"的叶子评估——
/// 混入其他视角的分数会悄悄污染搜索结果
#[derive(Debug, Default)]
pub struct EvalCache {
    entries: HashMap<u64, i32>,
    /// 命中次数
    hits: u64,
    /// 查询次数
    probes: u64,
}

impl EvalCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 查询条目
    pub fn probe(&mut self, key: u64) -> Option<i32> {
        self.probes += 1;
        let entry = self.entries.get(&key).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// 存储条目
    pub fn store(&mut self, key: u64, score: i32) {
        self.entries.insert(key, score);
    }

    /// 条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 清空缓存及统计
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.probes = 0;
    }

    /// 获取命中率
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }

    /// 获取统计信息
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            probes: self.probes,
        }
    }
}

/// 缓存统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub probes: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}
