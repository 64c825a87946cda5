//! 夹具查询
//!
//! 在 [`posts()`](crate::data::posts) 之上提供按位置、按永久链接、按标签的只读查询。
//! 永久链接索引在首次使用时构建一次，之后不再修改。

use std::collections::HashMap;
use std::sync::OnceLock;

use blog_shared::{FixtureError, Result};
use tracing::{debug, warn};

use crate::data::{POST_COUNT, posts};
use crate::models::Post;

static PERMALINK_INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

fn permalink_index() -> &'static HashMap<&'static str, usize> {
    PERMALINK_INDEX.get_or_init(|| {
        posts()
            .iter()
            .enumerate()
            .map(|(idx, post)| (post.permalink_id(), idx))
            .collect()
    })
}

/// 按位置获取文章
///
/// 位置从 1 开始，与夹具声明顺序一致
pub fn post_at(position: usize) -> Result<&'static Post> {
    position
        .checked_sub(1)
        .and_then(|idx| posts().get(idx))
        .ok_or(FixtureError::PositionOutOfRange {
            position,
            len: POST_COUNT,
        })
}

/// 按永久链接 ID 精确查找文章
pub fn find_by_permalink(permalink_id: &str) -> Result<&'static Post> {
    match permalink_index().get(permalink_id) {
        Some(&idx) => {
            debug!(permalink_id, position = idx + 1, "找到夹具文章");
            Ok(&posts()[idx])
        }
        None => {
            warn!(permalink_id, "夹具中不存在该永久链接");
            Err(FixtureError::NotFound {
                entity: "Post".to_string(),
                id: permalink_id.to_string(),
            })
        }
    }
}

/// 获取带有指定标签的文章，保持夹具顺序
///
/// 没有标签字段的文章永远不会匹配
pub fn tagged(tag: &str) -> Vec<&'static Post> {
    posts().iter().filter(|post| post.has_tag(tag)).collect()
}

/// 获取没有标签字段的文章
pub fn untagged() -> Vec<&'static Post> {
    posts().iter().filter(|post| post.tags().is_none()).collect()
}

/// 所有标签，按首次出现顺序去重
pub fn distinct_tags() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for tag in posts().iter().filter_map(Post::tags).flatten() {
        if !seen.contains(tag) {
            seen.push(*tag);
        }
    }
    seen
}

/// 标签使用次数，按首次出现顺序排列
pub fn tag_counts() -> Vec<(&'static str, usize)> {
    distinct_tags()
        .into_iter()
        .map(|tag| (tag, tagged(tag).len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_at_bounds() {
        assert_eq!(post_at(1).unwrap().permalink_id(), "hello-world");
        assert_eq!(
            post_at(5).unwrap().permalink_id(),
            "demystifying-aspnet-mvc-5-error-pages-and-error-logging"
        );

        let err = post_at(0).unwrap_err();
        assert_eq!(err.code(), "POSITION_OUT_OF_RANGE");
        assert!(matches!(
            post_at(6),
            Err(FixtureError::PositionOutOfRange {
                position: 6,
                len: 5
            })
        ));
    }

    #[test]
    fn test_find_by_permalink() {
        let post = find_by_permalink("php-uk-conference-2015").unwrap();
        assert_eq!(post.title(), "PHP UK Conference 2015");

        let err = find_by_permalink("Hello-World").unwrap_err();
        assert!(matches!(err, FixtureError::NotFound { ref id, .. } if id == "Hello-World"));
    }

    #[test]
    fn test_tagged() {
        let css: Vec<_> = tagged("css").iter().map(|p| p.permalink_id()).collect();
        assert_eq!(
            css,
            vec!["making-font-awesome-awesome-using-icons-without-i-tags"]
        );
        assert!(tagged("rust").is_empty());
        assert!(tagged("").is_empty());
    }

    #[test]
    fn test_untagged() {
        let posts = untagged();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title(), "Hello World");
    }

    #[test]
    fn test_distinct_tags_order() {
        let tags = distinct_tags();
        assert_eq!(tags.len(), 11);
        assert_eq!(&tags[..3], &["php-uk", "versioning", "hhvm"]);
        assert_eq!(tags.last(), Some(&"error-logging"));
    }

    #[test]
    fn test_tag_counts() {
        let counts = tag_counts();
        assert!(counts.iter().all(|(_, count)| *count == 1));
        assert_eq!(counts[0], ("php-uk", 1));
    }
}
