//! TraceGraph - 可回放的图算法
//!
//! 在可编辑的有向带权图上运行经典图算法，并记录检查边的顺序，支持：
//! - 最短路径：Dijkstra、A*、Bellman-Ford
//! - 无权遍历：BFS、DFS
//! - 最小生成树：Prim、Kruskal
//! - 最大流：Edmonds-Karp（Ford-Fulkerson 的 BFS 实现）
//!
//! 每次运行返回 trace（按检查顺序排列的边）和算法结果，由上层逐步回放。

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{run, AlgorithmKind, Category, RunConfig, RunOutput};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use types::Point;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
