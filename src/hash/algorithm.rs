//! 哈希算法注册表
//!
//! 五种固定注册的摘要算法及其属性。注册表在编译期即完整确定，
//! 不存在运行期初始化或环境探测。

use digest::Digest;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::Sha512;
use sha3::Keccak512;

/// 摘要函数签名：输入任意字节，输出定长摘要
pub type DigestFn = fn(&[u8]) -> Vec<u8>;

/// 注册的哈希算法
///
/// 按注册顺序排列：md5、sha1、sha2、sha3、ripemd160。
///
/// 名称沿用历史叫法而非精确的算法名：`Sha2` 实际为 SHA-512；
/// `Sha3` 为标准化前的 Keccak-512（填充字节 0x01），
/// 与 NIST SHA3-512 输出不同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5（16 字节摘要）
    Md5,
    /// SHA-1（20 字节摘要）
    Sha1,
    /// SHA-512（64 字节摘要）
    Sha2,
    /// Keccak-512（64 字节摘要）
    Sha3,
    /// RIPEMD-160（20 字节摘要）
    Ripemd160,
}

impl HashAlgorithm {
    /// 全部注册算法，按注册顺序
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha2,
        HashAlgorithm::Sha3,
        HashAlgorithm::Ripemd160,
    ];

    /// 按名称查找算法
    ///
    /// 名称区分大小写，必须与注册名完全一致。
    ///
    /// # Arguments
    ///
    /// * `name` - 算法名称，如 `"md5"`
    ///
    /// # Returns
    ///
    /// 未注册的名称返回 `None`
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::hash::HashAlgorithm;
    ///
    /// assert_eq!(HashAlgorithm::from_name("md5"), Some(HashAlgorithm::Md5));
    /// assert_eq!(HashAlgorithm::from_name("DOES NOT EXIST"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "md5" => Some(HashAlgorithm::Md5),
            "sha1" => Some(HashAlgorithm::Sha1),
            "sha2" => Some(HashAlgorithm::Sha2),
            "sha3" => Some(HashAlgorithm::Sha3),
            "ripemd160" => Some(HashAlgorithm::Ripemd160),
            _ => None,
        }
    }

    /// 获取算法的注册名称
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha2 => "sha2",
            HashAlgorithm::Sha3 => "sha3",
            HashAlgorithm::Ripemd160 => "ripemd160",
        }
    }

    /// 获取编码后的输出长度（字符数）
    ///
    /// 即摘要经无填充 base64url 编码后的长度。
    pub fn encoded_length(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 22,
            HashAlgorithm::Sha1 => 27,
            HashAlgorithm::Sha2 => 86,
            HashAlgorithm::Sha3 => 86,
            HashAlgorithm::Ripemd160 => 27,
        }
    }

    /// 计算输入的原始摘要字节
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::hash::HashAlgorithm;
    ///
    /// let digest = HashAlgorithm::Md5.digest(b"testtest");
    /// assert_eq!(digest.len(), 16);
    /// ```
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        (self.digest_fn())(data)
    }

    /// 获取算法的摘要函数
    pub fn digest_fn(self) -> DigestFn {
        match self {
            HashAlgorithm::Md5 => digest_bytes::<Md5>,
            HashAlgorithm::Sha1 => digest_bytes::<Sha1>,
            HashAlgorithm::Sha2 => digest_bytes::<Sha512>,
            HashAlgorithm::Sha3 => digest_bytes::<Keccak512>,
            HashAlgorithm::Ripemd160 => digest_bytes::<Ripemd160>,
        }
    }
}

fn digest_bytes<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

// ============================================================================
// 按名称查询的便捷函数
// ============================================================================

/// 获取全部注册的哈希名称，按注册顺序
///
/// # Example
///
/// ```rust
/// use saltpass::hash::hash_names;
///
/// assert_eq!(hash_names(), ["md5", "sha1", "sha2", "sha3", "ripemd160"]);
/// ```
pub fn hash_names() -> [&'static str; 5] {
    [
        HashAlgorithm::Md5.name(),
        HashAlgorithm::Sha1.name(),
        HashAlgorithm::Sha2.name(),
        HashAlgorithm::Sha3.name(),
        HashAlgorithm::Ripemd160.name(),
    ]
}

/// 按名称获取摘要函数
///
/// # Arguments
///
/// * `name` - 算法名称
///
/// # Returns
///
/// 未注册的名称返回 `None`
pub fn hash_fn(name: &str) -> Option<DigestFn> {
    HashAlgorithm::from_name(name).map(HashAlgorithm::digest_fn)
}

/// 按名称获取编码后的输出长度
///
/// # Arguments
///
/// * `name` - 算法名称
///
/// # Returns
///
/// 未注册的名称返回 `0`（长度是数值，`0` 明确表示"不是有效长度"）
///
/// # Example
///
/// ```rust
/// use saltpass::hash::hash_length;
///
/// assert_eq!(hash_length("md5"), 22);
/// assert_eq!(hash_length("DOES NOT EXIST"), 0);
/// ```
pub fn hash_length(name: &str) -> usize {
    match HashAlgorithm::from_name(name) {
        Some(algorithm) => algorithm.encoded_length(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_registration_order() {
        let names: Vec<&str> = HashAlgorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["md5", "sha1", "sha2", "sha3", "ripemd160"]);
    }

    #[test]
    fn test_from_name_round_trip() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::from_name(algorithm.name()), Some(algorithm));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(HashAlgorithm::from_name("MD5"), None);
        assert_eq!(HashAlgorithm::from_name("Sha1"), None);
    }

    #[test]
    fn test_digest_sizes() {
        assert_eq!(HashAlgorithm::Md5.digest(b"x").len(), 16);
        assert_eq!(HashAlgorithm::Sha1.digest(b"x").len(), 20);
        assert_eq!(HashAlgorithm::Sha2.digest(b"x").len(), 64);
        assert_eq!(HashAlgorithm::Sha3.digest(b"x").len(), 64);
        assert_eq!(HashAlgorithm::Ripemd160.digest(b"x").len(), 20);
    }

    #[test]
    fn test_encoded_length_matches_digest_size() {
        // 无填充 base64 长度 = (4 * n + 2) / 3
        for algorithm in HashAlgorithm::ALL {
            let digest_size = algorithm.digest(b"x").len();
            assert_eq!(algorithm.encoded_length(), (4 * digest_size + 2) / 3);
        }
    }

    #[test]
    fn test_hash_length_sentinel() {
        assert_eq!(hash_length("DOES NOT EXIST"), 0);
        assert_eq!(hash_length(""), 0);
        assert_eq!(hash_length("sha2"), 86);
    }

    #[test]
    fn test_hash_fn_lookup() {
        assert!(hash_fn("DOES NOT EXIST").is_none());

        let md5 = hash_fn("md5").unwrap();
        assert_eq!(md5(b"foo"), HashAlgorithm::Md5.digest(b"foo"));
    }

    #[test]
    fn test_digest_deterministic() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.digest(b"testtest"), algorithm.digest(b"testtest"));
        }
    }
}
