//! 按名称分发算法
//!
//! 算法分三类：路径（需要目标顶点）、生成树、最大流（需要汇点）。

use super::heuristic::Euclidean;
use super::max_flow::{EdmondsKarp, FlowRun};
use super::path::PathRun;
use super::shortest_path::PathFinder;
use super::spanning_tree::{TreeFinder, TreeRun};
use super::RunConfig;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 算法类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Path,
    Tree,
    Flow,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Path => "path",
            Category::Tree => "tree",
            Category::Flow => "flow",
        }
    }

    /// 是否需要目标顶点（路径的终点或最大流的汇点）
    pub fn needs_target(self) -> bool {
        !matches!(self, Category::Tree)
    }
}

/// 可运行的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
    BellmanFord,
    Prim,
    Kruskal,
    FordFulkerson,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 8] = [
        AlgorithmKind::Dfs,
        AlgorithmKind::Bfs,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::AStar,
        AlgorithmKind::BellmanFord,
        AlgorithmKind::Prim,
        AlgorithmKind::Kruskal,
        AlgorithmKind::FordFulkerson,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::AStar => "a*",
            AlgorithmKind::BellmanFord => "bellman-ford",
            AlgorithmKind::Prim => "prim",
            AlgorithmKind::Kruskal => "kruskal",
            AlgorithmKind::FordFulkerson => "fulkerson",
        }
    }

    pub fn category(self) -> Category {
        match self {
            AlgorithmKind::Dfs
            | AlgorithmKind::Bfs
            | AlgorithmKind::Dijkstra
            | AlgorithmKind::AStar
            | AlgorithmKind::BellmanFord => Category::Path,
            AlgorithmKind::Prim | AlgorithmKind::Kruskal => Category::Tree,
            AlgorithmKind::FordFulkerson => Category::Flow,
        }
    }

    /// 某一类别下的算法
    pub fn in_category(category: Category) -> impl Iterator<Item = AlgorithmKind> {
        Self::ALL.into_iter().filter(move |k| k.category() == category)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        let kind = match name.as_str() {
            "dfs" => AlgorithmKind::Dfs,
            "bfs" => AlgorithmKind::Bfs,
            "dijkstra" => AlgorithmKind::Dijkstra,
            "a*" | "astar" => AlgorithmKind::AStar,
            "bellman-ford" | "bellman_ford" | "bellmanford" => AlgorithmKind::BellmanFord,
            "prim" => AlgorithmKind::Prim,
            "kruskal" => AlgorithmKind::Kruskal,
            "fulkerson" | "ford-fulkerson" | "edmonds-karp" | "max-flow" => {
                AlgorithmKind::FordFulkerson
            }
            _ => return Err(Error::UnknownAlgorithm(s.to_string())),
        };
        Ok(kind)
    }
}

/// 一次运行的输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum RunOutput {
    Path(PathRun),
    Tree(TreeRun),
    Flow(FlowRun),
}

impl RunOutput {
    pub fn category(&self) -> Category {
        match self {
            RunOutput::Path(_) => Category::Path,
            RunOutput::Tree(_) => Category::Tree,
            RunOutput::Flow(_) => Category::Flow,
        }
    }

    /// 回放用的边序列
    pub fn trace_edges(&self) -> Vec<EdgeId> {
        match self {
            RunOutput::Path(run) => run.trace.clone(),
            RunOutput::Tree(run) => run.trace.clone(),
            RunOutput::Flow(run) => run.trace.iter().map(|step| step.edge).collect(),
        }
    }

    /// 结果中需要高亮的边
    pub fn result_edges(&self) -> Vec<EdgeId> {
        match self {
            RunOutput::Path(run) => run.path.as_ref().map(|p| p.edges.clone()).unwrap_or_default(),
            RunOutput::Tree(run) => run.tree.edges.clone(),
            RunOutput::Flow(run) => run
                .result
                .flow
                .iter()
                .enumerate()
                .filter(|(_, &f)| f > 0.0)
                .map(|(i, _)| EdgeId::new(i))
                .collect(),
        }
    }

    /// 运行结束后显示的摘要
    pub fn summary(&self) -> String {
        match self {
            RunOutput::Path(run) => match &run.path {
                Some(path) => format!(
                    "完成; 路径 {} 条边, 总距离 {}",
                    path.length, path.total_weight
                ),
                None => "完成; 未找到路径".to_string(),
            },
            RunOutput::Tree(run) => format!(
                "完成; 生成树 {} 条边, 总权重 {}",
                run.tree.edges.len(),
                run.tree.total_weight
            ),
            RunOutput::Flow(run) => format!("完成; 最大流 {}", run.result.value),
        }
    }
}

/// 运行指定算法
///
/// 路径类和最大流需要 target；`a*` 使用指向 target 的欧氏启发函数。
pub fn run(
    graph: &Graph,
    kind: AlgorithmKind,
    source: VertexId,
    target: Option<VertexId>,
    config: RunConfig,
) -> Result<RunOutput> {
    graph.check_vertex(source)?;
    let target = || target.ok_or(Error::MissingTarget(kind.name()));

    let output = match kind {
        AlgorithmKind::Dfs => RunOutput::Path(PathFinder::with_config(graph, config).dfs(source, target()?)?),
        AlgorithmKind::Bfs => RunOutput::Path(PathFinder::with_config(graph, config).bfs(source, target()?)?),
        AlgorithmKind::Dijkstra => {
            RunOutput::Path(PathFinder::with_config(graph, config).dijkstra(source, target()?)?)
        }
        AlgorithmKind::AStar => {
            let target = target()?;
            let heuristic = Euclidean::new(graph, target);
            RunOutput::Path(PathFinder::with_config(graph, config).astar(source, target, &heuristic)?)
        }
        AlgorithmKind::BellmanFord => {
            RunOutput::Path(PathFinder::with_config(graph, config).bellman_ford(source, target()?)?)
        }
        AlgorithmKind::Prim => RunOutput::Tree(TreeFinder::with_config(graph, config).prim(source)?),
        AlgorithmKind::Kruskal => RunOutput::Tree(TreeFinder::with_config(graph, config).kruskal()?),
        AlgorithmKind::FordFulkerson => {
            RunOutput::Flow(EdmondsKarp::with_config(graph, config).max_flow(source, target()?)?)
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn create_test_graph() -> (Graph, VertexId, VertexId) {
        let mut graph = Graph::new();
        let s = graph.add_vertex_at("S", Point::new(0.0, 0.0)).unwrap();
        let a = graph.add_vertex_at("A", Point::new(1.0, 0.0)).unwrap();
        let b = graph.add_vertex_at("B", Point::new(0.0, 1.0)).unwrap();
        let t = graph.add_vertex_at("T", Point::new(1.0, 1.0)).unwrap();
        graph.add_edge(s, a, 3.0).unwrap();
        graph.add_edge(s, b, 2.0).unwrap();
        graph.add_edge(a, t, 2.0).unwrap();
        graph.add_edge(b, t, 3.0).unwrap();
        (graph, s, t)
    }

    #[test]
    fn test_parse_names() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.name().parse::<AlgorithmKind>().unwrap(), kind);
        }
        assert_eq!("A*".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::AStar);
        assert_eq!(" Kruskal ".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Kruskal);
        assert_eq!(
            "floyd".parse::<AlgorithmKind>().unwrap_err(),
            Error::UnknownAlgorithm("floyd".to_string())
        );
    }

    #[test]
    fn test_categories() {
        let path: Vec<&str> = AlgorithmKind::in_category(Category::Path)
            .map(|k| k.name())
            .collect();
        assert_eq!(path, vec!["dfs", "bfs", "dijkstra", "a*", "bellman-ford"]);

        let tree: Vec<&str> = AlgorithmKind::in_category(Category::Tree)
            .map(|k| k.name())
            .collect();
        assert_eq!(tree, vec!["prim", "kruskal"]);
        assert_eq!(AlgorithmKind::FordFulkerson.category(), Category::Flow);
        assert!(!Category::Tree.needs_target());
        assert!(Category::Flow.needs_target());
    }

    #[test]
    fn test_run_every_algorithm() {
        let (graph, s, t) = create_test_graph();

        for kind in AlgorithmKind::ALL {
            let output = run(&graph, kind, s, Some(t), RunConfig::default()).unwrap();
            assert_eq!(output.category(), kind.category());
            assert!(!output.trace_edges().is_empty(), "{} 没有 trace", kind);
            assert!(!output.result_edges().is_empty(), "{} 没有结果边", kind);
        }
    }

    #[test]
    fn test_summaries() {
        let (graph, s, t) = create_test_graph();
        let config = RunConfig::default();

        let dijkstra = run(&graph, AlgorithmKind::Dijkstra, s, Some(t), config).unwrap();
        assert_eq!(dijkstra.summary(), "完成; 路径 2 条边, 总距离 5");

        let kruskal = run(&graph, AlgorithmKind::Kruskal, s, None, config).unwrap();
        assert_eq!(kruskal.summary(), "完成; 生成树 3 条边, 总权重 7");

        let flow = run(&graph, AlgorithmKind::FordFulkerson, s, Some(t), config).unwrap();
        assert_eq!(flow.summary(), "完成; 最大流 4");

        let none = run(&graph, AlgorithmKind::Bfs, t, Some(s), config).unwrap();
        assert_eq!(none.summary(), "完成; 未找到路径");
    }

    #[test]
    fn test_missing_target() {
        let (graph, s, _) = create_test_graph();
        let err = run(&graph, AlgorithmKind::Dijkstra, s, None, RunConfig::default()).unwrap_err();
        assert_eq!(err, Error::MissingTarget("dijkstra"));

        let err = run(&graph, AlgorithmKind::FordFulkerson, s, None, RunConfig::default()).unwrap_err();
        assert_eq!(err, Error::MissingTarget("fulkerson"));

        assert!(run(&graph, AlgorithmKind::Prim, s, None, RunConfig::default()).is_ok());
    }

    #[test]
    fn test_output_serializes_with_category_tag() {
        let (graph, s, t) = create_test_graph();
        let output = run(&graph, AlgorithmKind::FordFulkerson, s, Some(t), RunConfig::default()).unwrap();

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["category"], "flow");
        assert_eq!(json["result"]["value"], 4.0);
        assert_eq!(json["trace"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_path_output_with_unreached_vertex_round_trips() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A").unwrap();
        let b = graph.add_vertex("B").unwrap();
        let output = run(&graph, AlgorithmKind::Dijkstra, a, Some(b), RunConfig::default()).unwrap();

        let json = serde_json::to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["distances"][0], 0.0);
        assert!(value["distances"][1].is_null());

        let restored: RunOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, output);
        match restored {
            RunOutput::Path(run) => {
                assert_eq!(run.distance(a), Some(0.0));
                assert_eq!(run.distance(b), None);
            }
            other => panic!("期望路径结果, 得到 {:?}", other.category()),
        }
    }
}
