//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `list` - 列出夹具文章（可按标签过滤）
//! - `show` - 按永久链接或位置显示单篇文章
//! - `tags` - 列出所有标签及使用次数
//! - `export` - 导出为 JSON / YAML
//!
//! # 使用示例
//!
//! ```bash
//! blog-fixtures list --tag css
//! blog-fixtures show -n 3
//! blog-fixtures export -f yaml -o posts.yaml
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
