//! 错误类型定义

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(EdgeId),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("边已存在: {head} -> {tail}")]
    EdgeAlreadyExists { head: VertexId, tail: VertexId },

    #[error("无效的权重: {0}")]
    InvalidWeight(f64),

    #[error("{algorithm} 不接受负权重: 边 {edge} 的权重为 {weight}")]
    NegativeWeight {
        edge: EdgeId,
        weight: f64,
        algorithm: &'static str,
    },

    #[error("无效的启发值: 顶点 {vertex} 的估计为 {estimate}")]
    InvalidHeuristic { vertex: VertexId, estimate: f64 },

    #[error("{0} 需要指定目标顶点")]
    MissingTarget(&'static str),

    #[error("源点和汇点不能相同: {0}")]
    SourceIsSink(VertexId),

    #[error("未知算法: {0}")]
    UnknownAlgorithm(String),

    #[error("优先队列中不存在键: {0}")]
    UnknownKey(usize),

    #[error("优先队列中已存在键: {0}")]
    DuplicateKey(usize),

    #[error("decrease_key 不能增大优先级: 键 {0}")]
    PriorityIncrease(usize),
}
