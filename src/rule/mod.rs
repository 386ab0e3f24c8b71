//! 站点密码规则模块
//!
//! 用规则描述各站点的密码策略，并据此校验或重写生成的密码。
//!
//! ## 规则的六个侧面
//!
//! - **min / max**: 长度上下限
//! - **required**: 至少出现一个的字符
//! - **invalid**: 任何位置都不允许的字符
//! - **regex**: 自定义校验正则，按原样应用
//! - **validregex**: 合法字符类，每个字符都必须属于该类
//!
//! `regex` 与 `validregex` 是两个独立共存的可选侧面；
//! 重写只修复长度与字符约束，从不尝试满足 `regex`。
//!
//! ## 示例
//!
//! ```rust
//! use saltpass::rule::{DomainRule, RuleSet};
//!
//! let mut rules = RuleSet::new();
//! rules.add(
//!     DomainRule::new("foo.com")
//!         .with_min(3)
//!         .with_max(10)
//!         .with_required(['a', '-'])
//!         .with_invalid(['!']),
//! );
//!
//! let rule = rules.find("https://foo.com/signup").unwrap();
//! assert!(!rule.is_valid("pass!"));
//! assert_eq!(rule.rewrite("pass!").as_deref(), Some("pass"));
//! ```

mod domain_rule;
mod set;

pub use domain_rule::{DomainRule, NO_MAX};
pub use set::RuleSet;
