//! 图描述文件加载
//!
//! JSON 格式：
//!
//! ```json
//! {
//!   "vertices": [{ "label": "A", "x": 0.0, "y": 0.0 }, { "label": "B" }],
//!   "edges": [{ "head": "A", "tail": "B", "weight": 1.5 }]
//! }
//! ```

use crate::graph::Graph;
use crate::types::Point;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// 顶点描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexSpec {
    pub label: String,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

/// 边描述，端点用标签引用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub head: String,
    pub tail: String,
    pub weight: f64,
}

/// 整个图的描述
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub vertices: Vec<VertexSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphFile {
    /// 从 JSON 文件读取
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("无法打开图文件 {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("图文件格式错误 {}", path.display()))
    }

    /// 从 JSON 字符串读取
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("图描述格式错误")
    }

    /// 构建图
    ///
    /// 顶点按出现顺序编号；边引用了未声明的标签时报错。
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new();

        for vertex in &self.vertices {
            let id = match (vertex.x, vertex.y) {
                (Some(x), Some(y)) => graph.add_vertex_at(vertex.label.as_str(), Point::new(x, y)),
                (None, None) => graph.add_vertex(vertex.label.as_str()),
                _ => bail!("顶点 {} 的坐标不完整", vertex.label),
            };
            id.with_context(|| format!("无法添加顶点 {}", vertex.label))?;
        }

        for (i, edge) in self.edges.iter().enumerate() {
            let head = graph
                .vertex_by_label(&edge.head)
                .map(|v| v.id())
                .with_context(|| format!("第 {} 条边的起点 {} 未声明", i + 1, edge.head))?;
            let tail = graph
                .vertex_by_label(&edge.tail)
                .map(|v| v.id())
                .with_context(|| format!("第 {} 条边的终点 {} 未声明", i + 1, edge.tail))?;
            graph
                .add_edge(head, tail, edge.weight)
                .with_context(|| format!("无法添加边 {} -> {}", edge.head, edge.tail))?;
        }

        debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "图已加载");
        Ok(graph)
    }
}
