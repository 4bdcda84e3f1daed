//! 单次运行的临时状态
//!
//! dist / prev 不保存在顶点上，而是与顶点数组按下标平行的数组，
//! 每次运行重新创建。

use crate::graph::{EdgeId, VertexId};

/// 距离与前驱数组
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scratch {
    source: VertexId,
    dist: Vec<f64>,
    prev: Vec<Option<VertexId>>,
    prev_edge: Vec<Option<EdgeId>>,
}

impl Scratch {
    /// 所有顶点 dist = +∞、prev = None，源点 dist = 0
    pub fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut dist = vec![f64::INFINITY; vertex_count];
        dist[source.index()] = 0.0;
        Self {
            source,
            dist,
            prev: vec![None; vertex_count],
            prev_edge: vec![None; vertex_count],
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 越界顶点视为未到达
    pub fn dist(&self, v: VertexId) -> f64 {
        self.dist.get(v.index()).copied().unwrap_or(f64::INFINITY)
    }

    pub fn prev(&self, v: VertexId) -> Option<VertexId> {
        self.prev.get(v.index()).copied().flatten()
    }

    pub fn prev_edge(&self, v: VertexId) -> Option<EdgeId> {
        self.prev_edge.get(v.index()).copied().flatten()
    }

    /// 经 edge 从 u 到达 v，距离为 dist。源点的前驱始终为 None。
    pub fn update(&mut self, v: VertexId, dist: f64, u: VertexId, edge: EdgeId) -> bool {
        if v == self.source {
            return false;
        }
        self.dist[v.index()] = dist;
        self.prev[v.index()] = Some(u);
        self.prev_edge[v.index()] = Some(edge);
        true
    }

    /// 松弛：dist[u] + weight < dist[v] 时更新 v
    pub fn relax(&mut self, u: VertexId, v: VertexId, weight: f64, edge: EdgeId) -> bool {
        let candidate = self.dist(u) + weight;
        if candidate < self.dist(v) {
            self.update(v, candidate, u, edge)
        } else {
            false
        }
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<Option<VertexId>>) {
        (self.dist, self.prev)
    }
}
