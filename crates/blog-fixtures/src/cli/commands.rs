//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 各子命令对应夹具的只读视图：列表、单条详情、标签统计、导出。

use clap::{ArgGroup, Parser, Subcommand};

/// 博客文章夹具命令行工具
///
/// 查看和导出测试用的博客文章夹具。
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "blog-fixtures")]
#[command(version, about = "博客文章测试夹具工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，未指定时使用配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 列出夹具文章
    List {
        /// 只列出带有该标签的文章
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// 显示单篇文章
    ///
    /// 按永久链接 ID 或位置（从 1 开始）查找，二者必须且只能指定一个。
    #[command(group(ArgGroup::new("selector").required(true).args(["permalink", "position"])))]
    Show {
        /// 永久链接 ID
        #[arg(short, long)]
        permalink: Option<String>,

        /// 位置（1-5）
        #[arg(short = 'n', long)]
        position: Option<usize>,
    },

    /// 列出所有标签及使用次数
    Tags,

    /// 导出全部夹具
    ///
    /// 未指定输出文件时写到标准输出。
    Export {
        /// 导出格式（json / yaml），未指定时使用配置文件
        #[arg(short, long)]
        format: Option<String>,

        /// 输出文件路径
        #[arg(short, long)]
        output: Option<String>,

        /// 紧凑 JSON（不换行缩进）
        #[arg(long)]
        compact: bool,
    },
}

// ============================================================================
// 单元测试
// ============================================================================
