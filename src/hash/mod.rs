//! 加盐密码派生模块
//!
//! 提供确定性的站点密码派生：把主密码、域名与可选短语拼接后
//! 做摘要，并编码为无填充的 base64url 字符串。
//!
//! ## 支持的算法
//!
//! 注册表固定为五种算法（按注册顺序）：
//!
//! - **md5** - 编码后 22 字符
//! - **sha1** - 编码后 27 字符
//! - **sha2** - SHA-512，编码后 86 字符
//! - **sha3** - Keccak-512（标准化前的填充方案），编码后 86 字符
//! - **ripemd160** - 编码后 27 字符
//!
//! ## 示例
//!
//! ### 按名称派生
//!
//! ```rust
//! use saltpass::hash::salt_the_pass;
//!
//! let salted = salt_the_pass("md5", "test", "test", "").unwrap();
//! assert_eq!(salted, "BaZxxmrv6hJMwIt26m0wuw");
//! ```
//!
//! ### 使用类型化的派生器
//!
//! ```rust
//! use saltpass::hash::{HashAlgorithm, PasswordSalter};
//!
//! let salter = PasswordSalter::new(HashAlgorithm::Sha1);
//! let salted = salter.salt("master", "example.com", "").unwrap();
//! assert_eq!(salted.len(), HashAlgorithm::Sha1.encoded_length());
//! ```

mod algorithm;
mod salter;

pub use algorithm::{DigestFn, HashAlgorithm, hash_fn, hash_length, hash_names};
pub use salter::{PasswordSalter, hash, salt_the_pass};
