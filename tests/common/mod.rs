//! 集成测试共用的随机图生成和参考实现

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;
use tracegraph::graph::{Graph, VertexId};
use tracegraph::types::Point;

/// 随机有向图：n 个顶点，尝试添加 m 条边（跳过自环和重复的有向边），整数权重
pub fn random_graph(rng: &mut StdRng, n: usize, m: usize, weights: std::ops::RangeInclusive<i32>) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex(format!("v{}", i)).unwrap();
    }
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let w = rng.gen_range(weights.clone()) as f64;
        let _ = graph.add_edge(VertexId::new(u), VertexId::new(v), w);
    }
    graph
}

/// 随机 DAG（只有 u < v 的边），允许负权
pub fn random_dag(rng: &mut StdRng, n: usize, m: usize, weights: std::ops::RangeInclusive<i32>) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex(format!("v{}", i)).unwrap();
    }
    for _ in 0..m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b {
            continue;
        }
        let (u, v) = (a.min(b), a.max(b));
        let w = rng.gen_range(weights.clone()) as f64;
        let _ = graph.add_edge(VertexId::new(u), VertexId::new(v), w);
    }
    graph
}

/// 带坐标的随机图，每条边的权重不小于两端点的直线距离
pub fn random_geometric_graph(rng: &mut StdRng, n: usize, m: usize) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        let p = Point::new(rng.gen_range(0..20) as f64, rng.gen_range(0..20) as f64);
        graph.add_vertex_at(format!("v{}", i), p).unwrap();
    }
    for _ in 0..m {
        let u = VertexId::new(rng.gen_range(0..n));
        let v = VertexId::new(rng.gen_range(0..n));
        if u == v {
            continue;
        }
        let pu = graph.vertex(u).unwrap().position().unwrap();
        let pv = graph.vertex(v).unwrap().position().unwrap();
        let w = pu.distance(&pv).ceil() + rng.gen_range(0..4) as f64;
        let _ = graph.add_edge(u, v, w);
    }
    graph
}

/// Floyd-Warshall 全源最短路径，不可达为 +∞
pub fn floyd_warshall(graph: &Graph) -> Vec<Vec<f64>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for e in graph.edges() {
        let (h, t) = (e.head().index(), e.tail().index());
        if e.weight() < dist[h][t] {
            dist[h][t] = e.weight();
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

/// 简单并查集，与库中的实现无关
pub struct Dsu {
    parent: Vec<usize>,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// 合并成功返回 true；已连通返回 false
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// 无向连通分量数
pub fn component_count(graph: &Graph) -> usize {
    let mut dsu = Dsu::new(graph.vertex_count());
    let mut count = graph.vertex_count();
    for e in graph.edges() {
        if dsu.union(e.head().index(), e.tail().index()) {
            count -= 1;
        }
    }
    count
}
