use crate::domain::window::{SlidingWindow, WindowUpdate};
use crate::fetcher::FetchResult;
use avg_types::NumberType;
use dashmap::DashMap;

/// 进程内窗口存储，每种数字类型一个独立窗口
/// 更新在该类型的 entry 锁内完成，保证快照与修改的原子性
pub struct WindowStore {
    windows: DashMap<NumberType, SlidingWindow>,
    capacity: usize,
}

impl WindowStore {
    pub fn new(capacity: usize) -> Self {
        let windows = DashMap::with_capacity(NumberType::ALL.len());
        for number_type in NumberType::ALL {
            windows.insert(number_type, SlidingWindow::new(capacity));
        }
        Self { windows, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn update(&self, number_type: NumberType, batch: &FetchResult) -> WindowUpdate {
        let mut window = self
            .windows
            .entry(number_type)
            .or_insert_with(|| SlidingWindow::new(self.capacity));
        window.merge(&batch.numbers)
    }

    pub fn snapshot(&self, number_type: NumberType) -> Vec<i64> {
        self.windows.get(&number_type).map(|w| w.snapshot()).unwrap_or_default()
    }
}
