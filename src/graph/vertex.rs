//! 顶点定义

use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内顶点数组的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点名称（图内唯一）
    label: String,
    /// 画布坐标，A* 的欧氏启发函数使用
    position: Option<Point>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            position: None,
        }
    }

    /// 创建带坐标的顶点
    pub fn with_position(id: VertexId, label: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            label: label.into(),
            position: Some(position),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点名称
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 获取坐标
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }
}
