//! 最小生成树算法
//!
//! Prim 和 Kruskal，生成树计算时把边当作无向边。

use super::queue::IndexedPriorityQueue;
use super::scratch::Scratch;
use super::shortest_path::check_non_negative;
use super::union_find::UnionFind;
use super::RunConfig;
use crate::error::Result;
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 生成树（图不连通时为生成森林或源点所在分量的生成树）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 树边，按加入顺序
    pub edges: Vec<EdgeId>,
    /// 树边总权重
    pub total_weight: f64,
}

impl SpanningTree {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn push(&mut self, edge: EdgeId, weight: f64) {
        self.edges.push(edge);
        self.total_weight += weight;
    }

    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }
}

/// 生成树类算法的一次运行结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRun {
    /// 按检查顺序排列的边
    pub trace: Vec<EdgeId>,
    pub tree: SpanningTree,
}

/// 最小生成树查找器
pub struct TreeFinder<'g> {
    graph: &'g Graph,
    config: RunConfig,
}

impl<'g> TreeFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, RunConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: RunConfig) -> Self {
        Self { graph, config }
    }

    /// Prim 算法，只覆盖 source 所在的连通分量
    ///
    /// 每个出队顶点的全部关联边都记入 trace，同一条边只记一次。
    pub fn prim(&self, source: VertexId) -> Result<TreeRun> {
        self.graph.check_vertex(source)?;
        check_non_negative(self.graph, &self.config, "prim")?;
        debug!(algorithm = "prim", %source, "开始运行");

        let n = self.graph.vertex_count();
        let mut scratch = Scratch::new(n, source);
        let mut in_tree = vec![false; n];
        let mut examined = vec![false; self.graph.edge_count()];
        let mut queue = IndexedPriorityQueue::with_capacity(n);
        let mut traversed = Vec::new();
        let mut tree = SpanningTree::new();

        queue.enqueue(source.index(), 0.0)?;

        while let Some((u, _)) = queue.dequeue() {
            let u = VertexId::new(u);
            in_tree[u.index()] = true;
            if let Some(edge) = scratch.prev_edge(u) {
                tree.push(edge, scratch.dist(u));
            }

            for edge in self.graph.incident(u) {
                if !examined[edge.id().index()] {
                    examined[edge.id().index()] = true;
                    traversed.push(edge.id());
                }

                let Some(v) = edge.opposite(u) else { continue };
                if in_tree[v.index()] || edge.weight() >= scratch.dist(v) {
                    continue;
                }

                scratch.update(v, edge.weight(), u, edge.id());
                if queue.contains_key(v.index()) {
                    queue.decrease_key(v.index(), edge.weight())?;
                } else {
                    queue.enqueue(v.index(), edge.weight())?;
                }
            }
        }

        debug!(algorithm = "prim", tree_edges = tree.edges.len(), total_weight = tree.total_weight, "运行结束");
        Ok(TreeRun {
            trace: traversed,
            tree,
        })
    }

    /// Kruskal 算法，图不连通时得到生成森林
    ///
    /// 按权重升序（同权按边 ID）扫描所有边，每条边无论是否接受都记入 trace。
    pub fn kruskal(&self) -> Result<TreeRun> {
        debug!(algorithm = "kruskal", edges = self.graph.edge_count(), "开始运行");

        let mut sorted: Vec<_> = self.graph.edges().iter().collect();
        sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

        let mut sets = UnionFind::new(self.graph.vertex_count());
        let mut traversed = Vec::with_capacity(sorted.len());
        let mut tree = SpanningTree::new();

        for edge in sorted {
            traversed.push(edge.id());
            if sets.union(edge.head().index(), edge.tail().index()) {
                tree.push(edge.id(), edge.weight());
            }
        }

        debug!(algorithm = "kruskal", tree_edges = tree.edges.len(), total_weight = tree.total_weight, "运行结束");
        Ok(TreeRun {
            trace: traversed,
            tree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// 4 个顶点的环，权重互不相同
    fn create_cycle() -> (Graph, Vec<VertexId>, Vec<EdgeId>) {
        let mut graph = Graph::new();
        let v: Vec<VertexId> = ["A", "B", "C", "D"]
            .iter()
            .map(|l| graph.add_vertex(*l).unwrap())
            .collect();
        let e = vec![
            graph.add_edge(v[0], v[1], 1.0).unwrap(),
            graph.add_edge(v[1], v[2], 4.0).unwrap(),
            graph.add_edge(v[2], v[3], 2.0).unwrap(),
            graph.add_edge(v[3], v[0], 3.0).unwrap(),
        ];
        (graph, v, e)
    }

    #[test]
    fn test_kruskal_excludes_heaviest_cycle_edge() {
        let (graph, _, e) = create_cycle();
        let run = TreeFinder::new(&graph).kruskal().unwrap();

        assert_eq!(run.tree.edges, vec![e[0], e[2], e[3]]);
        assert!(!run.tree.contains(e[1]));
        assert_eq!(run.tree.total_weight, 6.0);
        // 所有边按权重顺序出现在 trace 中
        assert_eq!(run.trace, vec![e[0], e[2], e[3], e[1]]);
    }

    #[test]
    fn test_prim_matches_kruskal_weight() {
        let (graph, v, e) = create_cycle();
        let run = TreeFinder::new(&graph).prim(v[0]).unwrap();

        assert_eq!(run.tree.total_weight, 6.0);
        assert_eq!(run.tree.edges.len(), 3);
        assert!(!run.tree.contains(e[1]));
    }

    #[test]
    fn test_prim_trace_records_each_edge_once() {
        let (graph, v, e) = create_cycle();
        let run = TreeFinder::new(&graph).prim(v[0]).unwrap();

        // A: A-B, D-A；B: B-C；D: C-D
        assert_eq!(run.trace, vec![e[0], e[3], e[1], e[2]]);
        assert_eq!(run.tree.edges, vec![e[0], e[3], e[2]]);
    }

    #[test]
    fn test_prim_ignores_edge_direction() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A").unwrap();
        let b = graph.add_vertex("B").unwrap();
        let c = graph.add_vertex("C").unwrap();
        // 全部指向 A
        let ba = graph.add_edge(b, a, 1.0).unwrap();
        let ca = graph.add_edge(c, a, 2.0).unwrap();

        let run = TreeFinder::new(&graph).prim(a).unwrap();
        assert_eq!(run.tree.edges, vec![ba, ca]);
    }

    #[test]
    fn test_disconnected_graph() {
        let mut graph = Graph::new();
        let v: Vec<VertexId> = (0..5)
            .map(|i| graph.add_vertex(i.to_string()).unwrap())
            .collect();
        let e01 = graph.add_edge(v[0], v[1], 1.0).unwrap();
        let e12 = graph.add_edge(v[1], v[2], 1.0).unwrap();
        let e34 = graph.add_edge(v[3], v[4], 1.0).unwrap();

        let prim = TreeFinder::new(&graph).prim(v[0]).unwrap();
        assert_eq!(prim.tree.edges, vec![e01, e12]);
        assert!(!prim.trace.contains(&e34));

        let kruskal = TreeFinder::new(&graph).kruskal().unwrap();
        assert_eq!(kruskal.tree.edges, vec![e01, e12, e34]);
    }

    #[test]
    fn test_prim_rejects_negative_weight() {
        let (mut graph, v, e) = create_cycle();
        graph.set_weight(e[2], -2.0).unwrap();

        let err = TreeFinder::new(&graph).prim(v[0]).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { algorithm: "prim", .. }));

        // Kruskal 接受负权边
        let run = TreeFinder::new(&graph).kruskal().unwrap();
        assert_eq!(run.tree.edges[0], e[2]);
    }

    #[test]
    fn test_single_vertex() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A").unwrap();
        graph.add_edge(a, a, 1.0).unwrap();

        let prim = TreeFinder::new(&graph).prim(a).unwrap();
        assert!(prim.tree.edges.is_empty());
        assert_eq!(prim.trace.len(), 1);

        let kruskal = TreeFinder::new(&graph).kruskal().unwrap();
        assert!(kruskal.tree.edges.is_empty());
    }
}
