//! 博客文章夹具数据
//!
//! 固定的五条文章记录，顺序即声明顺序，测试可以依赖位置做确定性断言。

use crate::models::Post;

/// 夹具记录数量
pub const POST_COUNT: usize = 5;

static POSTS: [Post; POST_COUNT] = [
    Post::untagged("Hello World", "hello-world"),
    Post::new(
        "PHP UK Conference 2015",
        "php-uk-conference-2015",
        &["php-uk", "versioning", "hhvm"],
    ),
    Post::new(
        "Making Font Awesome awesome - Using icons without i-tags",
        "making-font-awesome-awesome-using-icons-without-i-tags",
        &["font-awesome", "css"],
    ),
    Post::new(
        "Guard clauses without test coverage, a common TDD pitfall",
        "guard-clauses-without-test-coverage-a-common-tdd-pitfall",
        &["tdd", "guard-clauses"],
    ),
    Post::new(
        "Demystifying ASP.NET MVC 5 Error Pages and Error Logging",
        "demystifying-aspnet-mvc-5-error-pages-and-error-logging",
        &["asp-net", "mvc", "error-pages", "error-logging"],
    ),
];

/// 获取全部夹具文章
///
/// 每次调用返回同一个静态切片，调用方只能读取
pub fn posts() -> &'static [Post] {
    &POSTS
}
