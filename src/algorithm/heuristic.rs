//! A* 启发函数

use crate::graph::{Graph, VertexId};
use crate::types::Point;

/// 顶点到目标剩余距离的下界估计。
///
/// 估计值必须有限且非负；要保证 A* 结果最优，还需可采纳（不高估）。
pub trait Heuristic {
    fn estimate(&self, vertex: VertexId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(VertexId) -> f64,
{
    fn estimate(&self, vertex: VertexId) -> f64 {
        self(vertex)
    }
}

/// 恒为 0 的启发函数，A* 退化为 Dijkstra
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _vertex: VertexId) -> f64 {
        0.0
    }
}

/// 画布坐标上的欧氏距离。
///
/// 只有当每条边的权重不小于其两端点的直线距离时才可采纳。
/// 缺少坐标的顶点估计为 0。
#[derive(Debug, Clone)]
pub struct Euclidean<'g> {
    graph: &'g Graph,
    target: Option<Point>,
}

impl<'g> Euclidean<'g> {
    pub fn new(graph: &'g Graph, target: VertexId) -> Self {
        Self {
            graph,
            target: graph.vertex(target).and_then(|v| v.position()),
        }
    }
}

impl Heuristic for Euclidean<'_> {
    fn estimate(&self, vertex: VertexId) -> f64 {
        let position = self.graph.vertex(vertex).and_then(|v| v.position());
        match (position, self.target) {
            (Some(p), Some(t)) => p.distance(&t),
            _ => 0.0,
        }
    }
}
