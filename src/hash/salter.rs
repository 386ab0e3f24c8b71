//! 加盐密码派生实现
//!
//! 把主密码、域名与可选短语拼接后做摘要，
//! 再编码为无填充的 base64url 字符串。

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::hash::algorithm::HashAlgorithm;

/// 加盐密码派生器
///
/// 持有选定的哈希算法，对短语执行摘要加编码管线。
/// 派生是纯函数：相同输入永远产生相同输出。
///
/// # Example
///
/// ```rust
/// use saltpass::hash::{HashAlgorithm, PasswordSalter};
///
/// let salter = PasswordSalter::new(HashAlgorithm::Md5);
/// let salted = salter.salt("test", "test", "").unwrap();
/// assert_eq!(salted, "BaZxxmrv6hJMwIt26m0wuw");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PasswordSalter {
    /// 使用的哈希算法
    algorithm: HashAlgorithm,
}

impl PasswordSalter {
    /// 创建新的派生器
    ///
    /// # Arguments
    ///
    /// * `algorithm` - 要使用的哈希算法
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// 获取当前配置的算法
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// 对短语做摘要并编码
    ///
    /// # Arguments
    ///
    /// * `phrase` - 要哈希的短语
    ///
    /// # Returns
    ///
    /// 空短语返回 `None`，否则返回无填充 base64url 编码的摘要，
    /// 长度等于算法的 [`HashAlgorithm::encoded_length`]
    pub fn hash(&self, phrase: &str) -> Option<String> {
        if phrase.is_empty() {
            return None;
        }

        let digest = self.algorithm.digest(phrase.as_bytes());
        Some(encode_base64url(&digest))
    }

    /// 派生一个站点密码
    ///
    /// 将主密码、域名与域名短语直接拼接（无分隔符）后哈希。
    /// 无分隔符是有意的：任一输入改变一个字符，输出即完全不同。
    ///
    /// # Arguments
    ///
    /// * `master_password` - 主密码
    /// * `domain_name` - 域名
    /// * `domain_phrase` - 域名短语，没有时传空字符串
    ///
    /// # Returns
    ///
    /// 三个输入全为空时返回 `None`
    pub fn salt(
        &self,
        master_password: &str,
        domain_name: &str,
        domain_phrase: &str,
    ) -> Option<String> {
        let phrase = format!("{}{}{}", master_password, domain_name, domain_phrase);
        self.hash(&phrase)
    }
}

// ============================================================================
// 按名称调用的便捷函数
// ============================================================================

/// 按算法名称对短语做摘要并编码
///
/// # Arguments
///
/// * `hash_name` - 算法名称，如 `"md5"`
/// * `phrase` - 要哈希的短语
///
/// # Returns
///
/// 名称未注册或短语为空时返回 `None`
///
/// # Example
///
/// ```rust
/// use saltpass::hash::hash;
///
/// assert_eq!(
///     hash("sha1", "testtest").as_deref(),
///     Some("Uau5Y2B43vv4iNhFenx2-FyPEUw")
/// );
/// assert_eq!(hash("DOES NOT EXIST", "testtest"), None);
/// assert_eq!(hash("md5", ""), None);
/// ```
pub fn hash(hash_name: &str, phrase: &str) -> Option<String> {
    let algorithm = HashAlgorithm::from_name(hash_name)?;
    PasswordSalter::new(algorithm).hash(phrase)
}

/// 按算法名称派生一个站点密码
///
/// # Arguments
///
/// * `hash_name` - 算法名称
/// * `master_password` - 主密码
/// * `domain_name` - 域名
/// * `domain_phrase` - 域名短语，没有时传空字符串
///
/// # Returns
///
/// 名称未注册或拼接结果为空时返回 `None`
///
/// # Example
///
/// ```rust
/// use saltpass::hash::salt_the_pass;
///
/// let salted = salt_the_pass("md5", "test", "test", "").unwrap();
/// assert_eq!(salted, "BaZxxmrv6hJMwIt26m0wuw");
/// ```
pub fn salt_the_pass(
    hash_name: &str,
    master_password: &str,
    domain_name: &str,
    domain_phrase: &str,
) -> Option<String> {
    let algorithm = HashAlgorithm::from_name(hash_name)?;
    PasswordSalter::new(algorithm).salt(master_password, domain_name, domain_phrase)
}

/// 将摘要编码为无填充的 base64url
///
/// 先按标准字母表编码，去掉末尾全部 `=` 填充，
/// 再把 `+` 替换为 `-`、`/` 替换为 `_`（RFC 4648 base64url 变体）。
/// 按字符替换而非重新编码，与历史输出保持逐位一致。
fn encode_base64url(digest: &[u8]) -> String {
    let encoded = STANDARD.encode(digest);
    let stripped = encoded.trim_end_matches('=');
    stripped.replace('+', "-").replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_md5_value() {
        let salter = PasswordSalter::new(HashAlgorithm::Md5);
        assert_eq!(salter.hash("testtest").unwrap(), "BaZxxmrv6hJMwIt26m0wuw");
    }

    #[test]
    fn test_empty_phrase_returns_none() {
        let salter = PasswordSalter::new(HashAlgorithm::Md5);
        assert_eq!(salter.hash(""), None);
        assert_eq!(salter.salt("", "", ""), None);
    }

    #[test]
    fn test_salt_concatenates_without_separator() {
        let salter = PasswordSalter::new(HashAlgorithm::Md5);
        assert_eq!(
            salter.salt("test", "test", ""),
            salter.hash("testtest")
        );
        assert_eq!(
            salter.salt("te", "stte", "st"),
            salter.hash("testtest")
        );
    }

    #[test]
    fn test_unknown_hash_name() {
        assert_eq!(hash("DOES NOT EXIST", "testtest"), None);
        assert_eq!(salt_the_pass("DOES NOT EXIST", "a", "b", "c"), None);
    }

    #[test]
    fn test_no_padding_in_output() {
        // md5 摘要 16 字节，标准 base64 会带两个 = 填充
        let salted = hash("md5", "testtest").unwrap();
        assert!(!salted.ends_with('='));
        assert_eq!(salted.len(), 22);
    }

    #[test]
    fn test_url_safe_alphabet() {
        for name in ["md5", "sha1", "sha2", "sha3", "ripemd160"] {
            let salted = hash(name, "testtest").unwrap();
            assert!(!salted.contains('+'));
            assert!(!salted.contains('/'));
        }
    }

    #[test]
    fn test_encode_base64url_substitution() {
        // 0xfb 0xef 编码为 "++8="，替换后应为 "--8"
        assert_eq!(encode_base64url(&[0xfb, 0xef]), "--8");
        // 0xff 0xff 编码为 "//8="，替换后应为 "__8"
        assert_eq!(encode_base64url(&[0xff, 0xff]), "__8");
    }
}
