//! 边定义
//!
//! 有向带权边：head 为起点，tail 为终点

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（图内边数组的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 起点
    head: VertexId,
    /// 终点
    tail: VertexId,
    /// 权重；最大流中作为容量
    weight: f64,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, head: VertexId, tail: VertexId, weight: f64) -> Self {
        Self {
            id,
            head,
            tail,
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取起点
    pub fn head(&self) -> VertexId {
        self.head
    }

    /// 获取终点
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    /// 获取权重
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// 给定一个端点，返回另一个端点（按无向边处理）
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.head {
            Some(self.tail)
        } else if vertex == self.tail {
            Some(self.head)
        } else {
            None
        }
    }
}
