//! 博客文章模型
//!
//! 夹具中的单条文章记录。所有字段都是 `'static` 借用，记录可以在编译期构造，
//! 构造后不可修改。

use serde::Serialize;

/// 博客文章
///
/// 标签是可选的：`None` 表示记录根本没有标签字段，与 `Some(&[])`（空标签列表）
/// 是两种不同的状态，序列化时分别输出 `null` 和 `[]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    title: &'static str,
    permalink_id: &'static str,
    tags: Option<&'static [&'static str]>,
}

impl Post {
    /// 创建带标签的文章
    pub const fn new(
        title: &'static str,
        permalink_id: &'static str,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            title,
            permalink_id,
            tags: Some(tags),
        }
    }

    /// 创建没有标签字段的文章
    pub const fn untagged(title: &'static str, permalink_id: &'static str) -> Self {
        Self {
            title,
            permalink_id,
            tags: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn permalink_id(&self) -> &'static str {
        self.permalink_id
    }

    /// 标签列表，没有标签字段时返回 None
    pub fn tags(&self) -> Option<&'static [&'static str]> {
        self.tags
    }

    /// 是否带有指定标签
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.is_some_and(|tags| tags.iter().any(|t| *t == tag))
    }

    /// 转换为自有数据的副本，供需要修改数据的测试使用
    pub fn to_owned_record(&self) -> OwnedPost {
        OwnedPost {
            title: self.title.to_string(),
            permalink_id: self.permalink_id.to_string(),
            tags: self
                .tags
                .map(|tags| tags.iter().map(|t| t.to_string()).collect()),
        }
    }
}

/// 文章的自有副本
///
/// 修改副本不会影响夹具本身
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedPost {
    pub title: String,
    pub permalink_id: String,
    pub tags: Option<Vec<String>>,
}
