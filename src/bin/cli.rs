//! TraceGraph CLI 工具
//!
//! 从 JSON 文件加载图，运行指定算法并打印 trace

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracegraph::algorithm::{run, AlgorithmKind, RunConfig};
use tracegraph::cli::{log_filter, GraphFile, PrintMode, Printer};
use tracegraph::graph::{Graph, VertexId};

#[derive(Parser, Debug)]
#[command(name = "tracegraph-cli")]
#[command(about = "TraceGraph 命令行工具", version = tracegraph::VERSION)]
struct Args {
    /// 图描述文件 (JSON)
    graph: PathBuf,

    /// 算法: dfs, bfs, dijkstra, a*, bellman-ford, prim, kruskal, fulkerson
    algorithm: String,

    /// 起点（最大流的源点）标签
    #[arg(short, long)]
    source: String,

    /// 终点（最大流的汇点）标签
    #[arg(short, long)]
    target: Option<String>,

    /// 以 JSON 输出完整结果
    #[arg(long)]
    json: bool,

    /// 垂直格式输出
    #[arg(short = 'G', long)]
    vertical: bool,

    /// 允许负权边
    #[arg(long)]
    allow_negative: bool,

    /// 目标出队后继续运行
    #[arg(long)]
    no_early_exit: bool,

    /// 输出调试日志（可重复: -vv）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let graph = GraphFile::open(&args.graph)?.build()?;
    let kind: AlgorithmKind = args.algorithm.parse()?;
    let source = lookup(&graph, &args.source)?;
    let target = match &args.target {
        Some(label) => Some(lookup(&graph, label)?),
        None if kind.category().needs_target() => {
            bail!("{} 需要 --target", kind)
        }
        None => None,
    };

    let config = RunConfig {
        early_exit: !args.no_early_exit,
        allow_negative_weights: args.allow_negative,
    };

    let output = run(&graph, kind, source, target, config)
        .with_context(|| format!("运行 {} 失败", kind))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mode = if args.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(&graph, mode);

    println!("TraceGraph - {}", kind);
    println!("{}", printer.print_stats());
    println!("Trace:");
    print!("{}", printer.print_trace(&output));

    let result = printer.print_result(&output);
    if !result.is_empty() {
        println!("\n结果:");
        println!("{}", result);
    }
    println!("{}", printer.print_summary(&output));

    Ok(())
}

fn lookup(graph: &Graph, label: &str) -> Result<VertexId> {
    graph
        .vertex_by_label(label)
        .map(|v| v.id())
        .with_context(|| format!("顶点不存在: {}", label))
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}
