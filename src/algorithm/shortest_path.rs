//! 最短路径算法
//!
//! Dijkstra、A*、Bellman-Ford。每次运行返回检查过的边序列（trace）和路径结果。

use super::heuristic::{Heuristic, Zero};
use super::path::{reconstruct, PathRun};
use super::queue::IndexedPriorityQueue;
use super::scratch::Scratch;
use super::RunConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use tracing::{debug, trace};

/// 路径查找器
pub struct PathFinder<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) config: RunConfig,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, RunConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: RunConfig) -> Self {
        Self { graph, config }
    }

    /// Dijkstra 最短路径
    ///
    /// 要求边权非负，否则返回 [`Error::NegativeWeight`]
    /// （`allow_negative_weights` 打开时不检查，结果无保证）。
    pub fn dijkstra(&self, source: VertexId, target: VertexId) -> Result<PathRun> {
        self.best_first("dijkstra", source, target, &Zero)
    }

    /// A* 最短路径
    ///
    /// 队列按 dist + heuristic 排序，松弛仍只比较 dist。
    /// 已出队的顶点不会重新入队，因此启发函数还应满足一致性。
    pub fn astar<H>(&self, source: VertexId, target: VertexId, heuristic: &H) -> Result<PathRun>
    where
        H: Heuristic + ?Sized,
    {
        self.best_first("a*", source, target, heuristic)
    }

    /// Bellman-Ford 最短路径
    ///
    /// 最多 |V|-1 轮全边松弛，某轮没有更新即提前结束。接受负权边，不检测负权环。
    pub fn bellman_ford(&self, source: VertexId, target: VertexId) -> Result<PathRun> {
        self.check_endpoints(source, target)?;
        debug!(algorithm = "bellman-ford", %source, %target, "开始运行");

        let n = self.graph.vertex_count();
        let mut scratch = Scratch::new(n, source);
        let mut traversed = Vec::new();

        for round in 0..n.saturating_sub(1) {
            let mut relaxed = 0usize;
            for edge in self.graph.edges() {
                traversed.push(edge.id());
                if scratch.relax(edge.head(), edge.tail(), edge.weight(), edge.id()) {
                    relaxed += 1;
                }
            }
            trace!(round, relaxed, "松弛轮次完成");
            if relaxed == 0 {
                break;
            }
        }

        let path = reconstruct(self.graph, &scratch, target);
        debug!(algorithm = "bellman-ford", trace_len = traversed.len(), found = path.is_some(), "运行结束");
        Ok(PathRun::new(traversed, path, scratch))
    }

    /// Dijkstra 与 A* 共用的最优优先搜索
    fn best_first<H>(
        &self,
        algorithm: &'static str,
        source: VertexId,
        target: VertexId,
        heuristic: &H,
    ) -> Result<PathRun>
    where
        H: Heuristic + ?Sized,
    {
        self.check_endpoints(source, target)?;
        self.check_non_negative(algorithm)?;
        debug!(algorithm, %source, %target, "开始运行");

        let n = self.graph.vertex_count();
        let mut scratch = Scratch::new(n, source);
        let mut settled = vec![false; n];
        let mut queue = IndexedPriorityQueue::with_capacity(n);
        let mut traversed = Vec::new();

        queue.enqueue(source.index(), estimate(heuristic, source)?)?;

        while let Some((u, _)) = queue.dequeue() {
            let u = VertexId::new(u);
            settled[u.index()] = true;

            // 目标的路径已确定，不再展开它的出边
            if self.config.early_exit && u == target {
                break;
            }

            for edge in self.graph.outgoing(u) {
                traversed.push(edge.id());
                let v = edge.tail();
                if !scratch.relax(u, v, edge.weight(), edge.id()) {
                    continue;
                }

                let priority = scratch.dist(v) + estimate(heuristic, v)?;
                if queue.contains_key(v.index()) {
                    queue.decrease_key(v.index(), priority)?;
                } else if !settled[v.index()] {
                    queue.enqueue(v.index(), priority)?;
                }
            }
        }

        let path = reconstruct(self.graph, &scratch, target);
        debug!(algorithm, trace_len = traversed.len(), found = path.is_some(), "运行结束");
        Ok(PathRun::new(traversed, path, scratch))
    }

    pub(crate) fn check_endpoints(&self, source: VertexId, target: VertexId) -> Result<()> {
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(target)?;
        Ok(())
    }

    fn check_non_negative(&self, algorithm: &'static str) -> Result<()> {
        check_non_negative(self.graph, &self.config, algorithm)
    }
}

/// 拒绝负权边，除非配置允许
pub(crate) fn check_non_negative(
    graph: &Graph,
    config: &RunConfig,
    algorithm: &'static str,
) -> Result<()> {
    if config.allow_negative_weights {
        return Ok(());
    }
    match graph.first_negative_edge() {
        Some(edge) => Err(Error::NegativeWeight {
            edge: edge.id(),
            weight: edge.weight(),
            algorithm,
        }),
        None => Ok(()),
    }
}

fn estimate<H: Heuristic + ?Sized>(heuristic: &H, vertex: VertexId) -> Result<f64> {
    let estimate = heuristic.estimate(vertex);
    if estimate.is_finite() && estimate >= 0.0 {
        Ok(estimate)
    } else {
        Err(Error::InvalidHeuristic { vertex, estimate })
    }
}
