//! 图算法模块
//!
//! 包含最短路径、无权遍历、最小生成树和最大流算法。
//! 每个算法同步运行到结束，返回检查边的顺序（trace）和算法结果。

mod heuristic;
mod max_flow;
mod path;
mod queue;
mod runner;
mod scratch;
mod shortest_path;
mod spanning_tree;
mod traversal;
mod union_find;

use serde::{Deserialize, Serialize};

pub use heuristic::{Euclidean, Heuristic, Zero};
pub use max_flow::{EdmondsKarp, FlowRun, FlowStep, MaxFlow, ResidualEdge, ResidualGraph};
pub use path::{PathResult, PathRun};
pub use queue::IndexedPriorityQueue;
pub use runner::{run, AlgorithmKind, Category, RunOutput};
pub use shortest_path::PathFinder;
pub use spanning_tree::{SpanningTree, TreeFinder, TreeRun};
pub use union_find::UnionFind;

/// 算法运行配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// 目标顶点出队后立即停止（Dijkstra、A*、BFS、DFS）
    pub early_exit: bool,
    /// 不检查负权边。Dijkstra、A*、Prim、最大流在负权下结果无保证。
    pub allow_negative_weights: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            early_exit: true,
            allow_negative_weights: false,
        }
    }
}
