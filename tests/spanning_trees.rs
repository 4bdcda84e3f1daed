//! 最小生成树的随机图测试

mod common;

use common::{component_count, random_graph, Dsu};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracegraph::algorithm::TreeFinder;
use tracegraph::graph::{EdgeId, Graph, VertexId};

/// 枚举所有无环、大小为 n - 分量数 的边子集，返回最小总权重
fn brute_force_forest_weight(graph: &Graph) -> f64 {
    let m = graph.edge_count();
    let want = graph.vertex_count() - component_count(graph);
    let mut best = f64::INFINITY;

    for mask in 0u32..(1 << m) {
        if mask.count_ones() as usize != want {
            continue;
        }
        let mut dsu = Dsu::new(graph.vertex_count());
        let mut weight = 0.0;
        let mut acyclic = true;
        for (i, edge) in graph.edges().iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            if !dsu.union(edge.head().index(), edge.tail().index()) {
                acyclic = false;
                break;
            }
            weight += edge.weight();
        }
        if acyclic && weight < best {
            best = weight;
        }
    }
    best
}

fn assert_acyclic(graph: &Graph, edges: &[EdgeId]) {
    let mut dsu = Dsu::new(graph.vertex_count());
    for &id in edges {
        let edge = graph.edge(id).unwrap();
        assert!(dsu.union(edge.head().index(), edge.tail().index()), "{} 形成环", id);
    }
}

#[test]
fn test_kruskal_forest_is_minimal() {
    let mut rng = StdRng::seed_from_u64(53);

    for _ in 0..40 {
        let graph = random_graph(&mut rng, 7, 14, 1..=9);
        assert!(graph.edge_count() <= 14);
        let run = TreeFinder::new(&graph).kruskal().unwrap();

        assert_eq!(
            run.tree.edges.len(),
            graph.vertex_count() - component_count(&graph)
        );
        assert_acyclic(&graph, &run.tree.edges);
        assert_eq!(run.tree.total_weight, brute_force_forest_weight(&graph));
    }
}

#[test]
fn test_kruskal_trace_is_sorted_and_complete() {
    let mut rng = StdRng::seed_from_u64(59);

    for _ in 0..20 {
        let graph = random_graph(&mut rng, 15, 50, 1..=5);
        let run = TreeFinder::new(&graph).kruskal().unwrap();

        assert_eq!(run.trace.len(), graph.edge_count());
        let weights: Vec<f64> = run
            .trace
            .iter()
            .map(|&id| graph.edge(id).unwrap().weight())
            .collect();
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));

        // 同权按边 ID
        for pair in run.trace.windows(2) {
            if weights_equal(&graph, pair[0], pair[1]) {
                assert!(pair[0] < pair[1]);
            }
        }
    }
}

fn weights_equal(graph: &Graph, a: EdgeId, b: EdgeId) -> bool {
    graph.edge(a).unwrap().weight() == graph.edge(b).unwrap().weight()
}

#[test]
fn test_prim_spans_source_component() {
    let mut rng = StdRng::seed_from_u64(61);

    for _ in 0..40 {
        let graph = random_graph(&mut rng, 7, 10, 1..=9);
        let source = VertexId::new(0);
        let run = TreeFinder::new(&graph).prim(source).unwrap();

        let mut dsu = Dsu::new(graph.vertex_count());
        for e in graph.edges() {
            dsu.union(e.head().index(), e.tail().index());
        }
        let root = dsu.find(0);
        let component_size = (0..graph.vertex_count())
            .filter(|&v| dsu.find(v) == root)
            .count();

        assert_eq!(run.tree.edges.len(), component_size - 1);
        assert_acyclic(&graph, &run.tree.edges);

        // trace 中每条边只出现一次
        let mut seen = run.trace.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), run.trace.len());

        if component_count(&graph) == 1 {
            assert_eq!(run.tree.total_weight, brute_force_forest_weight(&graph));
        }
    }
}

#[test]
fn test_prim_and_kruskal_agree_on_connected_graphs() {
    let mut rng = StdRng::seed_from_u64(67);
    let mut checked = 0;

    while checked < 20 {
        let graph = random_graph(&mut rng, 20, 80, 1..=20);
        if component_count(&graph) != 1 {
            continue;
        }
        checked += 1;

        let finder = TreeFinder::new(&graph);
        let kruskal = finder.kruskal().unwrap();
        for s in [0, 7, 19] {
            let prim = finder.prim(VertexId::new(s)).unwrap();
            assert_eq!(prim.tree.total_weight, kruskal.tree.total_weight);
            assert_eq!(prim.tree.edges.len(), 19);
        }
    }
}
