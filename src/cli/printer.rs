//! 结果打印器
//!
//! 把算法的 trace 和结果格式化为表格或垂直格式

use crate::algorithm::RunOutput;
use crate::graph::{EdgeId, Graph, VertexId};
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer<'g> {
    graph: &'g Graph,
    mode: PrintMode,
}

impl<'g> Printer<'g> {
    pub fn new(graph: &'g Graph, mode: PrintMode) -> Self {
        Self { graph, mode }
    }

    /// 打印 trace，每一步一行
    pub fn print_trace(&self, output: &RunOutput) -> String {
        let rows: Vec<EdgeRow> = match output {
            RunOutput::Flow(run) => run
                .trace
                .iter()
                .enumerate()
                .map(|(i, step)| EdgeRow {
                    flow: Some(step.flow),
                    ..self.edge_row(i + 1, step.edge)
                })
                .collect(),
            _ => output
                .trace_edges()
                .into_iter()
                .enumerate()
                .map(|(i, edge)| self.edge_row(i + 1, edge))
                .collect(),
        };

        if rows.is_empty() {
            return "trace 为空\n".to_string();
        }
        format!("{}\n{} 步\n", self.render(&rows), rows.len())
    }

    /// 打印结果边（路径、树边或有流量的边）。最大流的权重列为 流量/容量。
    pub fn print_result(&self, output: &RunOutput) -> String {
        let rows: Vec<EdgeRow> = output
            .result_edges()
            .into_iter()
            .enumerate()
            .map(|(i, edge)| {
                let mut row = self.edge_row(i + 1, edge);
                if let RunOutput::Flow(run) = output {
                    row.weight = format!("{}/{}", run.result.flow_on(edge), row.weight);
                }
                row
            })
            .collect();

        if rows.is_empty() {
            return String::new();
        }
        self.render(&rows)
    }

    /// 摘要行，成功为绿色，未找到路径为黄色
    pub fn print_summary(&self, output: &RunOutput) -> String {
        let summary = output.summary();
        let found = match output {
            RunOutput::Path(run) => run.found(),
            _ => true,
        };
        if found {
            summary.green().bold().to_string()
        } else {
            summary.yellow().bold().to_string()
        }
    }

    /// 打印图统计信息
    pub fn print_stats(&self) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["属性", "值"]);
        table.add_row(row!["顶点数", self.graph.vertex_count().to_string()]);
        table.add_row(row!["边数", self.graph.edge_count().to_string()]);
        table.to_string()
    }

    fn edge_row(&self, step: usize, edge: EdgeId) -> EdgeRow {
        let label = |v: VertexId| {
            self.graph
                .vertex(v)
                .map(|v| v.label().to_string())
                .unwrap_or_else(|| v.to_string())
        };
        let (head, tail, weight) = match self.graph.edge(edge) {
            Some(e) => (label(e.head()), label(e.tail()), e.weight().to_string()),
            None => ("?".into(), "?".into(), "?".into()),
        };
        EdgeRow {
            step,
            edge,
            head,
            tail,
            weight,
            flow: None,
        }
    }

    /// 表格模式每行一步，垂直模式每步一段
    fn render(&self, rows: &[EdgeRow]) -> String {
        match self.mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                if let Some(first) = rows.first() {
                    let mut titles = vec![Cell::new("#")];
                    titles.extend(first.fields().iter().map(|(name, _)| Cell::new(name)));
                    table.set_titles(Row::new(titles));
                }
                for row in rows {
                    let mut cells = vec![Cell::new(&row.step.to_string())];
                    cells.extend(row.fields().iter().map(|(_, value)| Cell::new(value)));
                    table.add_row(Row::new(cells));
                }
                table.to_string()
            }
            PrintMode::Vertical => {
                let mut output = String::new();
                for row in rows {
                    let fields = row.fields();
                    let width = fields.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
                    output.push_str(&format!("---- 第 {} 步: {} ----\n", row.step, row.edge));
                    for (name, value) in &fields {
                        output.push_str(&format!("{:>width$}: {}\n", name, value, width = width));
                    }
                }
                output
            }
        }
    }
}

/// 一条边在输出中的一行
struct EdgeRow {
    step: usize,
    edge: EdgeId,
    head: String,
    tail: String,
    weight: String,
    /// 只有最大流的 trace 有此列
    flow: Option<f64>,
}

impl EdgeRow {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("边", self.edge.to_string()),
            ("起点", self.head.clone()),
            ("终点", self.tail.clone()),
            ("权重", self.weight.clone()),
        ];
        if let Some(flow) = self.flow {
            fields.push(("流量", flow.to_string()));
        }
        fields
    }
}
