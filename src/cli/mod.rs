//! 命令行支持
//!
//! 图描述文件加载、结果打印和日志过滤

mod loader;
mod logging;
mod printer;

pub use loader::{EdgeSpec, GraphFile, VertexSpec};
pub use logging::{log_directive, log_filter};
pub use printer::{PrintMode, Printer};
