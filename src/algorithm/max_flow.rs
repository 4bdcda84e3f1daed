//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）。
//! 在独立的残量图上计算，原图的边权（容量）只读。

use super::shortest_path::check_non_negative;
use super::RunConfig;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, trace};

/// 残量边
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualEdge {
    pub from: VertexId,
    pub to: VertexId,
    /// 剩余容量
    pub capacity: f64,
    /// 对应的原图边
    pub original: EdgeId,
    /// 是否为反向边（初始容量 0）
    pub is_reverse: bool,
}

/// 残量图
///
/// 原图第 i 条边对应残量边 2i（正向）和 2i+1（反向），互为配对：`i ^ 1`。
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    edges: Vec<ResidualEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl ResidualGraph {
    /// 由原图构建残量图
    pub fn new(graph: &Graph) -> Self {
        let mut edges = Vec::with_capacity(graph.edge_count() * 2);
        let mut adjacency = vec![Vec::new(); graph.vertex_count()];

        for edge in graph.edges() {
            let (u, v) = (edge.head(), edge.tail());
            adjacency[u.index()].push(edges.len());
            edges.push(ResidualEdge {
                from: u,
                to: v,
                capacity: edge.weight(),
                original: edge.id(),
                is_reverse: false,
            });
            adjacency[v.index()].push(edges.len());
            edges.push(ResidualEdge {
                from: v,
                to: u,
                capacity: 0.0,
                original: edge.id(),
                is_reverse: true,
            });
        }

        Self { edges, adjacency }
    }

    /// 所有残量边
    pub fn edges(&self) -> &[ResidualEdge] {
        &self.edges
    }

    /// 原图边的正向残量边
    pub fn forward(&self, original: EdgeId) -> &ResidualEdge {
        &self.edges[original.index() * 2]
    }

    /// 原图边的反向残量边
    pub fn reverse(&self, original: EdgeId) -> &ResidualEdge {
        &self.edges[original.index() * 2 + 1]
    }

    /// BFS 找增广路径，返回从源点到汇点的残量边下标
    fn find_augmenting_path(&self, source: VertexId, sink: VertexId) -> Option<Vec<usize>> {
        let mut parent: Vec<Option<usize>> = vec![None; self.adjacency.len()];
        let mut visited = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::from([source]);
        visited[source.index()] = true;

        while let Some(u) = queue.pop_front() {
            if u == sink {
                break;
            }
            for &i in &self.adjacency[u.index()] {
                let edge = &self.edges[i];
                if !visited[edge.to.index()] && edge.capacity > 0.0 {
                    visited[edge.to.index()] = true;
                    parent[edge.to.index()] = Some(i);
                    queue.push_back(edge.to);
                }
            }
        }

        if !visited[sink.index()] {
            return None;
        }

        let mut path = Vec::new();
        let mut current = sink;
        while current != source {
            let i = parent[current.index()]?;
            path.push(i);
            current = self.edges[i].from;
        }
        path.reverse();

        Some(path)
    }

    /// 沿路径增广 amount
    fn augment(&mut self, path: &[usize], amount: f64) {
        for &i in path {
            self.edges[i].capacity -= amount;
            self.edges[i ^ 1].capacity += amount;
        }
    }

    /// 残量图中从源点可达的顶点（最小割的源侧）
    fn reachable_from(&self, source: VertexId) -> BTreeSet<VertexId> {
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::from([source]);
        visited.insert(source);

        while let Some(u) = queue.pop_front() {
            for &i in &self.adjacency[u.index()] {
                let edge = &self.edges[i];
                if edge.capacity > 0.0 && visited.insert(edge.to) {
                    queue.push_back(edge.to);
                }
            }
        }

        visited
    }
}

/// 最大流 trace 的一步：原图边及该步之后的流量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowStep {
    pub edge: EdgeId,
    pub flow: f64,
}

/// 最大流结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: f64,
    /// 每条原图边上的流量（按边 ID 下标）
    pub flow: Vec<f64>,
    /// 最小割的源侧顶点集
    pub source_side: BTreeSet<VertexId>,
}

impl MaxFlow {
    /// 边上的流量
    pub fn flow_on(&self, edge: EdgeId) -> f64 {
        self.flow.get(edge.index()).copied().unwrap_or(0.0)
    }

    /// 流量等于容量的边（瓶颈边）
    pub fn saturated_edges(&self, graph: &Graph) -> Vec<EdgeId> {
        graph
            .edges()
            .iter()
            .filter(|e| e.weight() > 0.0 && self.flow_on(e.id()) >= e.weight())
            .map(|e| e.id())
            .collect()
    }

    /// 最小割上的边：从源侧指向汇侧
    pub fn cut_edges(&self, graph: &Graph) -> Vec<EdgeId> {
        graph
            .edges()
            .iter()
            .filter(|e| self.source_side.contains(&e.head()) && !self.source_side.contains(&e.tail()))
            .map(|e| e.id())
            .collect()
    }
}

/// 最大流的一次运行结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRun {
    /// 每条增广路径上的边及其新流量，按增广顺序、源点到汇点排列
    pub trace: Vec<FlowStep>,
    pub result: MaxFlow,
}

/// Edmonds-Karp 最大流算法
pub struct EdmondsKarp<'g> {
    graph: &'g Graph,
    config: RunConfig,
}

impl<'g> EdmondsKarp<'g> {
    /// 创建算法实例
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, RunConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: RunConfig) -> Self {
        Self { graph, config }
    }

    /// 计算从 source 到 sink 的最大流，边权作为容量
    pub fn max_flow(&self, source: VertexId, sink: VertexId) -> Result<FlowRun> {
        self.run(source, sink).map(|(run, _)| run)
    }

    fn run(&self, source: VertexId, sink: VertexId) -> Result<(FlowRun, ResidualGraph)> {
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(sink)?;
        if source == sink {
            return Err(Error::SourceIsSink(source));
        }
        check_non_negative(self.graph, &self.config, "fulkerson")?;
        debug!(algorithm = "fulkerson", %source, %sink, "开始运行");

        let mut residual = ResidualGraph::new(self.graph);
        let mut steps = Vec::new();
        let mut value = 0.0;
        let mut augmentations = 0usize;

        // Edmonds-Karp: 重复 BFS 找增广路径
        while let Some(path) = residual.find_augmenting_path(source, sink) {
            let bottleneck = path
                .iter()
                .map(|&i| residual.edges[i].capacity)
                .fold(f64::INFINITY, f64::min);

            residual.augment(&path, bottleneck);
            value += bottleneck;
            augmentations += 1;
            trace!(augmentations, bottleneck, path_len = path.len(), "增广");

            for &i in &path {
                let original = residual.edges[i].original;
                steps.push(FlowStep {
                    edge: original,
                    flow: self.flow_on(&residual, original),
                });
            }
        }

        let flow = self
            .graph
            .edges()
            .iter()
            .map(|e| self.flow_on(&residual, e.id()))
            .collect();
        let source_side = residual.reachable_from(source);

        debug!(algorithm = "fulkerson", value, augmentations, "运行结束");
        let run = FlowRun {
            trace: steps,
            result: MaxFlow {
                value,
                flow,
                source_side,
            },
        };
        Ok((run, residual))
    }

    /// 原图边上的流量 = 容量 - 正向剩余容量
    fn flow_on(&self, residual: &ResidualGraph, edge: EdgeId) -> f64 {
        let capacity = self.graph.edges()[edge.index()].weight();
        capacity - residual.forward(edge).capacity
    }
}
