//! 路径重构
//!
//! 从目标顶点沿前驱指针回溯到源点，还原路径上的边序列

use super::scratch::Scratch;
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 路径上的边序列（源点到目标的顺序）
    pub edges: Vec<EdgeId>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: f64,
}

impl PathResult {
    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            length: 0,
            total_weight: 0.0,
        }
    }
}

/// 路径类算法的一次运行结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRun {
    /// 按检查顺序排列的边，用于回放
    pub trace: Vec<EdgeId>,
    /// 源点到目标的路径；不可达时为 None
    pub path: Option<PathResult>,
    /// 每个顶点的距离（BFS/DFS 为跳数），未到达为 None
    pub distances: Vec<Option<f64>>,
    /// 每个顶点的前驱
    pub predecessors: Vec<Option<VertexId>>,
}

impl PathRun {
    pub(crate) fn new(trace: Vec<EdgeId>, path: Option<PathResult>, scratch: Scratch) -> Self {
        let (distances, predecessors) = scratch.into_parts();
        Self {
            trace,
            path,
            distances: distances
                .into_iter()
                .map(|d| Some(d).filter(|d| d.is_finite()))
                .collect(),
            predecessors,
        }
    }

    /// 顶点的最终距离，不可达时为 None
    pub fn distance(&self, v: VertexId) -> Option<f64> {
        self.distances.get(v.index()).copied().flatten()
    }

    /// 顶点的前驱
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(v.index()).copied().flatten()
    }

    /// 是否找到路径
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// 重构源点到 target 的路径。
///
/// target 没有前驱（且不是源点）时返回 None。每一步在图中查找边 p -> curr，
/// 找不到时再查找 curr -> p（生成树按无向图处理）。
/// 前驱链超过顶点数仍未回到源点时视为成环，返回 None。
pub(crate) fn reconstruct(graph: &Graph, scratch: &Scratch, target: VertexId) -> Option<PathResult> {
    let source = scratch.source();
    if target == source {
        return Some(PathResult::with_start(source));
    }
    scratch.prev(target)?;

    let mut vertices = vec![target];
    let mut edges = Vec::new();
    let mut total_weight = 0.0;
    let mut curr = target;

    while let Some(p) = scratch.prev(curr) {
        if edges.len() >= graph.vertex_count() {
            warn!(%target, "前驱链未回到源点，可能存在负权环");
            return None;
        }
        let edge = graph.find_edge(p, curr).or_else(|| graph.find_edge(curr, p))?;
        edges.push(edge.id());
        vertices.push(p);
        total_weight += edge.weight();
        curr = p;
    }

    if curr != source {
        return None;
    }

    vertices.reverse();
    edges.reverse();

    Some(PathResult {
        length: edges.len(),
        vertices,
        edges,
        total_weight,
    })
}
