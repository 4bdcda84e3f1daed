//! 图数据结构
//!
//! 画布编辑的有向带权图。顶点和边保存在数组中，ID 即下标，
//! 在图的生命周期内保持稳定。

use super::edge::{Edge, EdgeId};
use super::index::{EdgeIndex, VertexIndex};
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::Point;

/// 图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点数组
    vertices: Vec<Vertex>,
    /// 边数组
    edges: Vec<Edge>,
    /// 顶点索引
    vertex_index: VertexIndex,
    /// 边索引
    edge_index: EdgeIndex,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<VertexId> {
        let label = label.into();
        let id = VertexId::new(self.vertices.len());
        if !self.vertex_index.add_label(&label, id) {
            return Err(Error::VertexAlreadyExists(label));
        }

        self.vertices.push(Vertex::new(id, label));
        self.edge_index.add_vertex();

        Ok(id)
    }

    /// 添加带坐标的顶点
    pub fn add_vertex_at(&mut self, label: impl Into<String>, position: Point) -> Result<VertexId> {
        let id = self.add_vertex(label)?;
        self.vertices[id.index()].set_position(position);
        Ok(id)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// 通过名称获取顶点
    pub fn vertex_by_label(&self, label: &str) -> Option<&Vertex> {
        let id = self.vertex_index.get_by_label(label)?;
        self.vertex(id)
    }

    /// 校验顶点存在
    pub fn check_vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertex(id)
            .ok_or_else(|| Error::VertexNotFound(id.to_string()))
    }

    /// 更新顶点坐标
    pub fn set_position(&mut self, id: VertexId, position: Point) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(id.index())
            .ok_or_else(|| Error::VertexNotFound(id.to_string()))?;
        vertex.set_position(position);
        Ok(())
    }

    /// 所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// 所有顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边
    pub fn add_edge(&mut self, head: VertexId, tail: VertexId, weight: f64) -> Result<EdgeId> {
        self.check_vertex(head)?;
        self.check_vertex(tail)?;
        check_weight(weight)?;
        if self.edge_index.get_edge_between(head, tail).is_some() {
            return Err(Error::EdgeAlreadyExists { head, tail });
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(id, head, tail, weight));
        self.edge_index.add_edge(id, head, tail);

        Ok(id)
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// 更新边权重
    pub fn set_weight(&mut self, id: EdgeId, weight: f64) -> Result<()> {
        check_weight(weight)?;
        let edge = self
            .edges
            .get_mut(id.index())
            .ok_or(Error::EdgeNotFound(id))?;
        edge.set_weight(weight);
        Ok(())
    }

    /// 查找 head -> tail 的边
    pub fn find_edge(&self, head: VertexId, tail: VertexId) -> Option<&Edge> {
        let id = self.edge_index.get_edge_between(head, tail)?;
        self.edge(id)
    }

    /// 所有边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的所有出边
    pub fn outgoing(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_index
            .get_outgoing(vertex_id)
            .iter()
            .map(move |id| &self.edges[id.index()])
    }

    /// 获取顶点的所有入边
    pub fn incoming(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_index
            .get_incoming(vertex_id)
            .iter()
            .map(move |id| &self.edges[id.index()])
    }

    /// 获取与顶点相连的所有边（出边在前，入边在后）
    pub fn incident(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing(vertex_id).chain(self.incoming(vertex_id))
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex_id: VertexId) -> usize {
        self.edge_index.out_degree(vertex_id)
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, vertex_id: VertexId) -> usize {
        self.edge_index.in_degree(vertex_id)
    }

    /// 返回第一条负权边，供不接受负权重的算法拒绝输入
    pub fn first_negative_edge(&self) -> Option<&Edge> {
        self.edges.iter().find(|e| e.weight() < 0.0)
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidWeight(weight))
    }
}
