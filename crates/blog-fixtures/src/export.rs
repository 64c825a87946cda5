//! 夹具导出
//!
//! 将夹具序列化为 JSON 或 YAML，供进程外的测试工具使用。

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use blog_shared::{FixtureError, Result};
use tracing::info;

use crate::models::Post;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FixtureError::InvalidArgument {
                field: "format".to_string(),
                message: format!("不支持的导出格式 '{}'，可选 json / yaml", other),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 渲染文章列表
///
/// YAML 没有紧凑格式，`pretty` 只影响 JSON
pub fn render(posts: &[Post], format: ExportFormat, pretty: bool) -> Result<String> {
    let output = match format {
        ExportFormat::Json if pretty => serde_json::to_string_pretty(posts)?,
        ExportFormat::Json => serde_json::to_string(posts)?,
        ExportFormat::Yaml => serde_yaml::to_string(posts)?,
    };
    Ok(output)
}

/// 渲染并写入文件
pub fn write_to(path: &Path, posts: &[Post], format: ExportFormat, pretty: bool) -> Result<()> {
    let output = render(posts, format, pretty)?;
    fs::write(path, output)?;

    info!(path = %path.display(), count = posts.len(), %format, "夹具已导出");
    Ok(())
}
