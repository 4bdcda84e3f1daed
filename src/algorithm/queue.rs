//! 索引优先队列
//!
//! 数组实现的二叉最小堆，另维护键到堆位置的索引，
//! 支持 O(log n) 的 decrease_key 和 O(1) 的成员判断。
//! 键为顶点下标。优先级相同时按入队顺序出队。

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct HeapEntry<P> {
    key: usize,
    priority: P,
    /// 入队序号，用于相同优先级时的稳定出队
    seq: u64,
}

/// 索引优先队列（最小堆）
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P> {
    heap: Vec<HeapEntry<P>>,
    /// 键 -> 堆中位置；None 表示不在队列中
    position: Vec<Option<usize>>,
    next_seq: u64,
}

impl<P: PartialOrd + Copy> IndexedPriorityQueue<P> {
    /// 创建空队列
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 创建可容纳 `capacity` 个键的队列，超出时自动扩展
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            next_seq: 0,
        }
    }

    /// 入队。键已存在时返回错误，队列不变。
    pub fn enqueue(&mut self, key: usize, priority: P) -> Result<()> {
        if self.contains_key(key) {
            return Err(Error::DuplicateKey(key));
        }
        if key >= self.position.len() {
            self.position.resize(key + 1, None);
        }

        let pos = self.heap.len();
        self.heap.push(HeapEntry {
            key,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.position[key] = Some(pos);
        self.sift_up(pos);

        Ok(())
    }

    /// 降低已有键的优先级。键不存在或新优先级更大时返回错误，队列不变。
    pub fn decrease_key(&mut self, key: usize, priority: P) -> Result<()> {
        let pos = self
            .position
            .get(key)
            .copied()
            .flatten()
            .ok_or(Error::UnknownKey(key))?;
        if priority > self.heap[pos].priority {
            return Err(Error::PriorityIncrease(key));
        }

        self.heap[pos].priority = priority;
        self.sift_up(pos);

        Ok(())
    }

    /// 取出优先级最小的键
    pub fn dequeue(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.position[entry.key] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((entry.key, entry.priority))
    }

    /// 查看优先级最小的键
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.first().map(|e| (e.key, e.priority))
    }

    /// 键是否在队列中
    pub fn contains_key(&self, key: usize) -> bool {
        matches!(self.position.get(key), Some(Some(_)))
    }

    /// 键的当前优先级
    pub fn priority(&self, key: usize) -> Option<P> {
        let pos = self.position.get(key).copied().flatten()?;
        Some(self.heap[pos].priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// 堆中 i 是否应排在 j 之前
    fn precedes(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.heap[i], &self.heap[j]);
        if a.priority < b.priority {
            true
        } else if b.priority < a.priority {
            false
        } else {
            a.seq < b.seq
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i].key] = Some(i);
        self.position[self.heap[j].key] = Some(j);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.precedes(left, smallest) {
                smallest = left;
            }
            if right < len && self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }

            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<P: PartialOrd + Copy> Default for IndexedPriorityQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}
