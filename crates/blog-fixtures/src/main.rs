//! Blog Fixtures CLI
//!
//! 夹具工具的命令行入口点。

use std::io;

use anyhow::Context;
use blog_fixtures::cli::{Cli, CommandRunner, Commands};
use blog_shared::config::AppConfig;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // .env 不存在时忽略
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("加载配置失败")?;
    // 命令行参数优先于配置文件，RUST_LOG 优先于两者
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    blog_shared::observability::init(&config.logging)?;

    let runner = CommandRunner::new(config);
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::List { tag } => runner.run_list(tag.as_deref(), &mut out)?,
        Commands::Show {
            permalink,
            position,
        } => runner.run_show(permalink.as_deref(), position, &mut out)?,
        Commands::Tags => runner.run_tags(&mut out)?,
        Commands::Export {
            format,
            output,
            compact,
        } => runner.run_export(format.as_deref(), output.as_deref(), compact, &mut out)?,
    }

    Ok(())
}
