//! 规则集合实现
//!
//! 持有一组 [`DomainRule`] 并按域名查找，支持从 JSON 规则表加载。

use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::rule::domain_rule::DomainRule;

/// 站点规则集合
///
/// 规则按加入顺序保存；[`RuleSet::find`] 做顺序扫描，
/// 第一个匹配的规则胜出。
///
/// # Example
///
/// ```rust
/// use saltpass::rule::{DomainRule, RuleSet};
///
/// let mut rules = RuleSet::new();
/// rules.add(DomainRule::new("foo.com").with_max(10));
///
/// let rule = rules.find("HTTP://foo.com/login").unwrap();
/// assert_eq!(rule.max(), 10);
/// assert!(rules.find("bar.com").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// 规则列表，查找时按此顺序扫描
    rules: Vec<DomainRule>,
}

impl RuleSet {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 从现有规则列表创建集合
    pub fn from_rules(rules: Vec<DomainRule>) -> Self {
        Self { rules }
    }

    /// 从 JSON 规则表加载集合
    ///
    /// 输入是规则对象数组，字段与规则字段同名：`domain`（必填）、
    /// `aliases`、`description`、`min`、`max`、`invalid`、`required`、
    /// `regex`、`validregex`。`invalid` 与 `required` 既接受字符串
    /// （逐字符展开），也接受单字符字符串的数组。
    ///
    /// # Arguments
    ///
    /// * `json` - JSON 文本
    ///
    /// # Returns
    ///
    /// 解析失败或出现多字符的列表项时返回错误
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::rule::RuleSet;
    ///
    /// let rules = RuleSet::from_json(
    ///     r#"[{"domain": "foo.com", "min": 3, "required": ["a", "-"]}]"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(rules.len(), 1);
    /// assert!(rules.find("foo.com").is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let configs: Vec<DomainRuleConfig> =
            serde_json::from_str(json).map_err(|e| Error::parse(e.to_string()))?;

        let mut rules = Vec::with_capacity(configs.len());
        for config in configs {
            rules.push(config.into_rule()?);
        }

        Ok(Self { rules })
    }

    /// 追加一条规则
    pub fn add(&mut self, rule: DomainRule) {
        self.rules.push(rule);
    }

    /// 查找匹配指定域名的规则
    ///
    /// 输入域名经 [`crate::domain::standardize_domain`] 标准化后
    /// 与各规则比较；顺序扫描，第一个匹配的规则胜出。
    ///
    /// # Arguments
    ///
    /// * `domain` - 目标域名，可带协议前缀和路径
    pub fn find(&self, domain: &str) -> Option<&DomainRule> {
        self.rules.iter().find(|rule| rule.matches(domain))
    }

    /// 遍历全部规则
    pub fn iter(&self) -> impl Iterator<Item = &DomainRule> {
        self.rules.iter()
    }

    /// 规则数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 集合是否为空
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ============================================================================
// JSON 规则表记录
// ============================================================================

/// 规则表中的一条记录
///
/// 与 [`DomainRule`] 分离，让序列化格式与带缓存的规则本体解耦。
#[derive(Debug, Clone, Deserialize)]
struct DomainRuleConfig {
    domain: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    min: Option<usize>,
    #[serde(default)]
    max: Option<usize>,
    #[serde(default)]
    invalid: Option<CharList>,
    #[serde(default)]
    required: Option<CharList>,
    #[serde(default)]
    regex: Option<String>,
    #[serde(default)]
    validregex: Option<String>,
}

impl DomainRuleConfig {
    /// 把记录转换为不可变规则
    fn into_rule(self) -> Result<DomainRule> {
        let mut rule = DomainRule::new(self.domain).with_aliases(self.aliases);

        if let Some(description) = self.description {
            rule = rule.with_description(description);
        }

        if let Some(min) = self.min {
            rule = rule.with_min(min);
        }

        if let Some(max) = self.max {
            rule = rule.with_max(max);
        }

        if let Some(invalid) = self.invalid {
            rule = rule.with_invalid(invalid.into_chars("invalid")?);
        }

        if let Some(required) = self.required {
            rule = rule.with_required(required.into_chars("required")?);
        }

        if let Some(regex) = self.regex {
            rule = rule.with_regex(regex);
        }

        if let Some(validregex) = self.validregex {
            rule = rule.with_validregex(validregex);
        }

        Ok(rule)
    }
}

/// 字符列表的两种书写形式
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CharList {
    /// 一个字符串，逐字符展开
    Text(String),
    /// 单字符字符串的数组
    List(Vec<String>),
}

impl CharList {
    /// 展开为字符序列
    ///
    /// 数组形式中的每一项必须恰好是一个字符。
    fn into_chars(self, key: &str) -> Result<Vec<char>> {
        match self {
            CharList::Text(text) => Ok(text.chars().collect()),
            CharList::List(items) => {
                let mut chars = Vec::with_capacity(items.len());

                for item in items {
                    let mut iter = item.chars();
                    match (iter.next(), iter.next()) {
                        (Some(c), None) => chars.push(c),
                        _ => {
                            return Err(Error::Config(ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("expected a single character, got {:?}", item),
                            }));
                        }
                    }
                }

                Ok(chars)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_match_wins() {
        let rules = RuleSet::from_rules(vec![
            DomainRule::new("foo.com").with_min(3),
            DomainRule::new("foo.com").with_min(8),
        ]);

        assert_eq!(rules.find("foo.com").unwrap().min(), 3);
    }

    #[test]
    fn test_find_standardizes_input() {
        let mut rules = RuleSet::new();
        rules.add(DomainRule::new("foo.com"));

        assert!(rules.find("HTTPS://Foo.com/login").is_some());
        assert!(rules.find("afoo.com").is_none());
    }

    #[test]
    fn test_from_json_string_form() {
        let rules = RuleSet::from_json(
            r#"[{"domain": "foo.com", "min": 3, "max": 10, "invalid": "!?", "required": "a-"}]"#,
        )
        .unwrap();

        let rule = rules.find("foo.com").unwrap();
        assert_eq!(rule.invalid(), ['!', '?']);
        assert_eq!(rule.required(), ['a', '-']);
    }

    #[test]
    fn test_from_json_list_form() {
        let rules = RuleSet::from_json(
            r#"[{"domain": "foo.com", "required": ["a", "-"], "aliases": ["moo.com"]}]"#,
        )
        .unwrap();

        let rule = rules.find("moo.com").unwrap();
        assert_eq!(rule.required(), ['a', '-']);
    }

    #[test]
    fn test_from_json_rejects_multichar_entry() {
        let result = RuleSet::from_json(r#"[{"domain": "foo.com", "required": ["ab"]}]"#);

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_from_json_parse_failure() {
        let result = RuleSet::from_json("not json");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseFailed(_)))
        ));
    }

    #[test]
    fn test_empty_set() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert_eq!(rules.len(), 0);
        assert!(rules.find("foo.com").is_none());
    }
}
