//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。
//! 输出写入调用方传入的 writer，main 传 stdout，测试传内存缓冲区。

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use blog_shared::config::AppConfig;
use tracing::info;

use crate::catalog;
use crate::data::posts;
use crate::export::{self, ExportFormat};
use crate::models::Post;

/// 命令执行器
///
/// 持有加载好的应用配置，为未显式指定的参数提供默认值。
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行 list 命令
    pub fn run_list<W: Write>(&self, tag: Option<&str>, out: &mut W) -> Result<()> {
        let selected: Vec<(usize, &Post)> = posts()
            .iter()
            .enumerate()
            .filter(|(_, post)| tag.is_none_or(|t| post.has_tag(t)))
            .map(|(idx, post)| (idx + 1, post))
            .collect();

        info!(tag = ?tag, count = selected.len(), "列出夹具文章");

        for (position, post) in selected {
            writeln!(out, "{:>2}  {:<58}  {}", position, post.permalink_id(), post.title())?;
        }
        Ok(())
    }

    /// 执行 show 命令
    ///
    /// 永久链接和位置必须且只能指定一个，与命令行参数组的约束一致
    pub fn run_show<W: Write>(
        &self,
        permalink: Option<&str>,
        position: Option<usize>,
        out: &mut W,
    ) -> Result<()> {
        let post = match (permalink, position) {
            (Some(_), Some(_)) => anyhow::bail!("--permalink 与 --position 不能同时指定"),
            (Some(id), None) => catalog::find_by_permalink(id)?,
            (None, Some(n)) => catalog::post_at(n)?,
            (None, None) => anyhow::bail!("必须指定 --permalink 或 --position"),
        };

        writeln!(out, "标题: {}", post.title())?;
        writeln!(out, "永久链接: {}", post.permalink_id())?;
        match post.tags() {
            Some(tags) => writeln!(out, "标签: {}", tags.join(", "))?,
            None => writeln!(out, "标签: (无)")?,
        }
        Ok(())
    }

    /// 执行 tags 命令
    pub fn run_tags<W: Write>(&self, out: &mut W) -> Result<()> {
        for (tag, count) in catalog::tag_counts() {
            writeln!(out, "{:<16} {}", tag, count)?;
        }
        Ok(())
    }

    /// 执行 export 命令
    ///
    /// 格式和缩进未指定时使用配置中的默认值
    pub fn run_export<W: Write>(
        &self,
        format: Option<&str>,
        output: Option<&str>,
        compact: bool,
        out: &mut W,
    ) -> Result<()> {
        let format: ExportFormat = format
            .unwrap_or(self.config.export.format.as_str())
            .parse()
            .context("解析导出格式失败")?;
        let pretty = !compact && self.config.export.pretty;

        match output {
            Some(path) => {
                export::write_to(Path::new(path), posts(), format, pretty)
                    .with_context(|| format!("导出到 {} 失败", path))?;
            }
            None => {
                let rendered = export::render(posts(), format, pretty)?;
                writeln!(out, "{}", rendered.trim_end())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&CommandRunner, &mut Vec<u8>) -> Result<()>,
    {
        let runner = CommandRunner::new(AppConfig::default());
        let mut buf = Vec::new();
        f(&runner, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_list_all() {
        let output = run(|r, out| r.run_list(None, out));
        assert_eq!(output.lines().count(), 5);
        assert!(output.lines().next().unwrap().contains("hello-world"));
    }

    #[test]
    fn test_run_list_by_tag() {
        let output = run(|r, out| r.run_list(Some("tdd"), out));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].trim_start().starts_with('4'));
    }

    #[test]
    fn test_run_show_untagged() {
        let output = run(|r, out| r.run_show(None, Some(1), out));
        assert!(output.contains("Hello World"));
        assert!(output.contains("标签: (无)"));
    }

    #[test]
    fn test_run_show_unknown_permalink() {
        let runner = CommandRunner::new(AppConfig::default());
        let mut buf = Vec::new();
        let err = runner
            .run_show(Some("no-such-post"), None, &mut buf)
            .unwrap_err();
        assert!(err.to_string().contains("no-such-post"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_run_show_rejects_both_selectors() {
        let runner = CommandRunner::new(AppConfig::default());
        let mut buf = Vec::new();
        let err = runner
            .run_show(Some("hello-world"), Some(1), &mut buf)
            .unwrap_err();
        assert!(err.to_string().contains("不能同时指定"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_run_show_requires_selector() {
        let runner = CommandRunner::new(AppConfig::default());
        let mut buf = Vec::new();
        assert!(runner.run_show(None, None, &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_run_tags() {
        let output = run(|r, out| r.run_tags(out));
        assert_eq!(output.lines().count(), 11);
        assert!(output.starts_with("php-uk"));
    }

    #[test]
    fn test_run_export_stdout_uses_config_default() {
        let output = run(|r, out| r.run_export(None, None, true, out));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_run_export_rejects_unknown_format() {
        let runner = CommandRunner::new(AppConfig::default());
        let mut buf = Vec::new();
        assert!(runner.run_export(Some("xml"), None, false, &mut buf).is_err());
    }

    #[test]
    fn test_run_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.yaml");
        let path_str = path.to_str().unwrap();

        let output = run(|r, out| r.run_export(Some("yaml"), Some(path_str), false, out));
        assert!(output.is_empty());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("permalinkId: hello-world"));
    }
}
