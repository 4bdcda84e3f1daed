//! 无权遍历
//!
//! BFS（队列）和 DFS（栈）。顶点在出队/出栈时才算访问，此时确定前驱：
//! 在此之前发现它的最后一个顶点就是前驱。每访问一个新顶点，把到达它的边加入 trace。

use super::path::{reconstruct, PathRun};
use super::scratch::Scratch;
use super::shortest_path::PathFinder;
use crate::error::Result;
use crate::graph::{EdgeId, VertexId};
use std::collections::VecDeque;
use tracing::debug;

/// 遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    BreadthFirst,
    DepthFirst,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::BreadthFirst => "bfs",
            Order::DepthFirst => "dfs",
        }
    }
}

impl<'g> PathFinder<'g> {
    /// 广度优先搜索，忽略边权
    pub fn bfs(&self, source: VertexId, target: VertexId) -> Result<PathRun> {
        self.traverse(Order::BreadthFirst, source, target)
    }

    /// 深度优先搜索，忽略边权
    pub fn dfs(&self, source: VertexId, target: VertexId) -> Result<PathRun> {
        self.traverse(Order::DepthFirst, source, target)
    }

    fn traverse(&self, order: Order, source: VertexId, target: VertexId) -> Result<PathRun> {
        self.check_endpoints(source, target)?;
        debug!(algorithm = order.name(), %source, %target, "开始运行");

        let n = self.graph.vertex_count();
        let mut scratch = Scratch::new(n, source);
        let mut visited = vec![false; n];
        // 最近一次发现该顶点的 (顶点, 边)
        let mut discovered_by: Vec<Option<(VertexId, EdgeId)>> = vec![None; n];
        let mut frontier = VecDeque::from([source]);
        let mut traversed = Vec::new();

        loop {
            let node = match order {
                Order::BreadthFirst => frontier.pop_front(),
                Order::DepthFirst => frontier.pop_back(),
            };
            let Some(node) = node else { break };
            if visited[node.index()] {
                continue;
            }
            visited[node.index()] = true;

            if let Some((p, edge)) = discovered_by[node.index()] {
                let hops = scratch.dist(p) + 1.0;
                scratch.update(node, hops, p, edge);
                traversed.push(edge);
            }

            if self.config.early_exit && node == target {
                break;
            }

            for edge in self.graph.outgoing(node) {
                let v = edge.tail();
                if !visited[v.index()] {
                    discovered_by[v.index()] = Some((node, edge.id()));
                    frontier.push_back(v);
                }
            }
        }

        let path = reconstruct(self.graph, &scratch, target);
        debug!(algorithm = order.name(), trace_len = traversed.len(), found = path.is_some(), "运行结束");
        Ok(PathRun::new(traversed, path, scratch))
    }
}
