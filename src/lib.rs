//! # SaltPass
//!
//! 确定性的站点密码派生库，附带站点密码规则引擎。
//!
//! ## 功能特性
//!
//! - **加盐派生**: 把主密码、域名与可选短语拼接后哈希，
//!   编码为无填充的 base64url 字符串
//! - **哈希注册表**: 固定五种算法（md5 / sha1 / sha2 / sha3 / ripemd160），
//!   可按名称查询函数与输出长度
//! - **域名标准化**: 统一小写、去协议前缀、截断路径
//! - **规则引擎**: 按域名匹配站点密码策略，校验并自动重写
//!   不符合策略的密码
//!
//! 派生与规则是两条独立的管线：规则不参与哈希，由调用方自行组合
//! （先派生，再用目标站点的规则重写）。所有操作同步、纯函数、
//! 无共享可变状态，规则构造后不可变，可跨线程无锁并发读取。
//!
//! ## Features
//!
//! - `cli` - 启用 `saltpass` 命令行工具（默认启用）
//!
//! ## 派生示例
//!
//! ```rust
//! use saltpass::salt_the_pass;
//!
//! let salted = salt_the_pass("md5", "test", "test", "").unwrap();
//! assert_eq!(salted, "BaZxxmrv6hJMwIt26m0wuw");
//!
//! // 未注册的算法返回 None，而不是错误
//! assert_eq!(salt_the_pass("DOES NOT EXIST", "a", "b", ""), None);
//! ```
//!
//! ## 规则引擎示例
//!
//! ```rust
//! use saltpass::{DomainRule, RuleSet, salt_the_pass};
//!
//! let mut rules = RuleSet::new();
//! rules.add(
//!     DomainRule::new("example.com")
//!         .with_max(20)
//!         .with_validregex("A-Za-z0-9"),
//! );
//!
//! let salted = salt_the_pass("sha1", "master", "example.com", "").unwrap();
//!
//! if let Some(rule) = rules.find("https://example.com/login") {
//!     let fitted = rule.rewrite(&salted).unwrap();
//!     assert!(rule.is_valid(&fitted));
//! }
//! ```

pub mod domain;
pub mod error;
pub mod hash;
pub mod rule;

pub use error::{Error, Result};

// ============================================================================
// 域名标准化导出
// ============================================================================

pub use domain::standardize_domain;

// ============================================================================
// 哈希派生相关导出
// ============================================================================

pub use hash::{
    DigestFn, HashAlgorithm, PasswordSalter, hash, hash_fn, hash_length, hash_names,
    salt_the_pass,
};

// ============================================================================
// 规则引擎相关导出
// ============================================================================

pub use rule::{DomainRule, NO_MAX, RuleSet};
