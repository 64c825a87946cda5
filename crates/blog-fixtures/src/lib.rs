//! Blog Fixtures
//!
//! 测试用的博客文章夹具数据。
//!
//! # 主要模块
//!
//! - `data`: 固定的文章列表（[`posts()`]）
//! - `models`: 文章模型
//! - `catalog`: 按位置、永久链接、标签的只读查询
//! - `export`: JSON / YAML 导出
//!
//! # 使用示例
//!
//! ```rust
//! use blog_fixtures::{catalog, posts};
//!
//! assert_eq!(posts().len(), 5);
//! assert!(posts()[0].tags().is_none());
//!
//! let post = catalog::post_at(3).unwrap();
//! assert_eq!(post.tags(), Some(&["font-awesome", "css"][..]));
//! ```

pub mod catalog;
pub mod cli;
pub mod data;
pub mod export;
pub mod models;

pub use data::{POST_COUNT, posts};
pub use models::{OwnedPost, Post};
