use std::collections::{HashSet, VecDeque};

/// 一次合并的结果：合并前快照、合并后快照、实际加入的数字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowUpdate {
    pub prev: Vec<i64>,
    pub curr: Vec<i64>,
    pub admitted: Vec<i64>,
}

/// 定长、去重、按插入顺序排列的滑动窗口，最老的在前
/// bounded, duplicate-free, insertion-ordered window, oldest first
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<i64>,
    capacity: usize,
}

impl SlidingWindow {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "SlidingWindow capacity must be greater than 0");
        Self { values: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    pub fn snapshot(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    /// 合并一批数字：
    /// 1. 只接收窗口中没有的值，批次内重复的值只接收一次，保持批次顺序
    /// 2. 追加到队尾
    /// 3. 超出容量时从队头淘汰最老的值
    pub fn merge(&mut self, batch: &[i64]) -> WindowUpdate {
        let prev = self.snapshot();

        let mut seen: HashSet<i64> = self.values.iter().copied().collect();
        let admitted: Vec<i64> = batch.iter().copied().filter(|n| seen.insert(*n)).collect();

        self.values.extend(admitted.iter().copied());
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }

        WindowUpdate { prev, curr: self.snapshot(), admitted }
    }
}
