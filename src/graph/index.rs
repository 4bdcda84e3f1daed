//! 图索引
//!
//! 顶点名称索引和边邻接索引，支持快速查找

use crate::graph::edge::EdgeId;
use crate::graph::vertex::VertexId;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::collections::HashMap;

/// 邻接表，大多数画布上的顶点度数很小
pub type Adjacency = SmallVec<[EdgeId; 4]>;

/// 顶点索引
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    /// 名称到顶点 ID 的映射（保持插入顺序）
    label_to_id: IndexMap<String, VertexId>,
}

impl VertexIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加名称索引，名称已存在时返回 false
    pub fn add_label(&mut self, label: &str, vertex_id: VertexId) -> bool {
        if self.label_to_id.contains_key(label) {
            return false;
        }
        self.label_to_id.insert(label.to_string(), vertex_id);
        true
    }

    /// 通过名称查找顶点
    pub fn get_by_label(&self, label: &str) -> Option<VertexId> {
        self.label_to_id.get(label).copied()
    }
}

/// 边索引
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    /// 每个顶点的出边（按添加顺序）
    outgoing: Vec<Adjacency>,
    /// 每个顶点的入边（按添加顺序）
    incoming: Vec<Adjacency>,
    /// (head, tail) 到边 ID 的映射
    pair_to_edge: HashMap<(VertexId, VertexId), EdgeId>,
}

impl EdgeIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 为新顶点分配邻接表
    pub fn add_vertex(&mut self) {
        self.outgoing.push(Adjacency::new());
        self.incoming.push(Adjacency::new());
    }

    /// 添加边索引
    pub fn add_edge(&mut self, edge_id: EdgeId, head: VertexId, tail: VertexId) {
        self.outgoing[head.index()].push(edge_id);
        self.incoming[tail.index()].push(edge_id);
        self.pair_to_edge.insert((head, tail), edge_id);
    }

    /// 获取出边
    pub fn get_outgoing(&self, vertex_id: VertexId) -> &[EdgeId] {
        self.outgoing
            .get(vertex_id.index())
            .map(|adj| adj.as_slice())
            .unwrap_or(&[])
    }

    /// 获取入边
    pub fn get_incoming(&self, vertex_id: VertexId) -> &[EdgeId] {
        self.incoming
            .get(vertex_id.index())
            .map(|adj| adj.as_slice())
            .unwrap_or(&[])
    }

    /// 查找 head -> tail 的边
    pub fn get_edge_between(&self, head: VertexId, tail: VertexId) -> Option<EdgeId> {
        self.pair_to_edge.get(&(head, tail)).copied()
    }

    /// 获取出度
    pub fn out_degree(&self, vertex_id: VertexId) -> usize {
        self.get_outgoing(vertex_id).len()
    }

    /// 获取入度
    pub fn in_degree(&self, vertex_id: VertexId) -> usize {
        self.get_incoming(vertex_id).len()
    }
}
