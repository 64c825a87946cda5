//! 夹具数据模型

pub mod post;

pub use post::{OwnedPost, Post};
