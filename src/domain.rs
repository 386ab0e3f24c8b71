//! 域名标准化模块
//!
//! 将用户输入的原始域名（可能带协议前缀、路径等）规范化为
//! 用于规则匹配的标准形式。

/// 标准化一个域名字符串
///
/// 依次执行：全部转为小写、去掉开头的 `http://` 前缀、
/// 去掉开头的 `https://` 前缀、截断第一个 `/` 之后的所有内容
/// （路径、查询参数、片段）。
///
/// 两个协议前缀独立检查，互不依赖；没有域名时传入空字符串，
/// 返回值也是空字符串。该函数永不失败。
///
/// # Arguments
///
/// * `domain` - 原始域名字符串
///
/// # Returns
///
/// 返回标准化后的域名
///
/// # Example
///
/// ```rust
/// use saltpass::domain::standardize_domain;
///
/// assert_eq!(standardize_domain("HTTP://Foo.com/login"), "foo.com");
/// assert_eq!(standardize_domain("https://bar.org"), "bar.org");
/// assert_eq!(standardize_domain(""), "");
/// ```
pub fn standardize_domain(domain: &str) -> String {
    // 先转小写，协议前缀匹配因此总是对小写串进行
    let mut dom = domain.to_lowercase();

    if let Some(rest) = dom.strip_prefix("http://") {
        dom = rest.to_string();
    }

    if let Some(rest) = dom.strip_prefix("https://") {
        dom = rest.to_string();
    }

    // 去掉第一个斜杠之后的所有内容
    if let Some(pos) = dom.find('/') {
        dom.truncate(pos);
    }

    dom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_input() {
        assert_eq!(standardize_domain("FOO.com"), "foo.com");
        assert_eq!(standardize_domain("FOO.cOm"), "foo.com");
    }

    #[test]
    fn test_strips_http_prefix() {
        assert_eq!(standardize_domain("http://foo.com"), "foo.com");
        assert_eq!(standardize_domain("HTTP://foo.com"), "foo.com");
    }

    #[test]
    fn test_strips_https_prefix() {
        assert_eq!(standardize_domain("https://foo.com"), "foo.com");
        assert_eq!(standardize_domain("HTTPS://foo.com"), "foo.com");
    }

    #[test]
    fn test_strips_both_prefixes_independently() {
        // 两个前缀独立检查：先去掉 http://，剩下的串再去掉 https://
        assert_eq!(standardize_domain("http://https://foo.com"), "foo.com");
    }

    #[test]
    fn test_truncates_at_first_slash() {
        assert_eq!(standardize_domain("foo.com/"), "foo.com");
        assert_eq!(standardize_domain("foo.com/path"), "foo.com");
        assert_eq!(standardize_domain("foo.com/path?q=1#frag"), "foo.com");
        assert_eq!(standardize_domain("http://foo.com/a/b/c"), "foo.com");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(standardize_domain(""), "");
    }

    #[test]
    fn test_subdomains_preserved() {
        assert_eq!(standardize_domain("a.foo.com"), "a.foo.com");
        assert_eq!(standardize_domain("https://a.foo.com/x"), "a.foo.com");
    }

    #[test]
    fn test_prefix_only_in_leading_position() {
        assert_eq!(standardize_domain("foo.com/http://bar.com"), "foo.com");
    }
}
