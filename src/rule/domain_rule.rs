//! 站点密码规则实现
//!
//! 封装单个站点的密码策略：长度上下限、必需/禁止字符、
//! 自定义正则与合法字符类，并提供匹配、校验与重写能力。

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::standardize_domain;

/// "无最大长度限制"的哨兵值
pub const NO_MAX: usize = usize::MAX;

/// 站点密码规则
///
/// 从静态策略数据构造一次，之后不可变；不持有共享可变状态，
/// 可以在多线程间无锁并发读取。
///
/// 构造采用链式 builder，未设置的字段取默认值：
/// `min = 0`（无下限）、`max = NO_MAX`（无上限）、
/// 必需/禁止字符为空、两个正则字段为 `None`。
/// 规则不强制 `min <= max`：`min > max` 的规则永远无法通过校验，
/// 这被视为合法的"无法满足"规则而非构造错误。
///
/// # Example
///
/// ```rust
/// use saltpass::rule::DomainRule;
///
/// let rule = DomainRule::new("foo.com")
///     .with_aliases(["moo.com"])
///     .with_min(3)
///     .with_max(10)
///     .with_required(['a', '-'])
///     .with_invalid(['!']);
///
/// assert!(rule.matches("HTTP://foo.com/login"));
/// assert!(rule.is_valid("aaa"));
/// assert_eq!(rule.rewrite("bb").as_deref(), Some("abb"));
/// ```
#[derive(Debug, Clone)]
pub struct DomainRule {
    /// 标准化后的主域名
    domain: String,
    /// 等价域名，构造时即应为标准化形式
    aliases: Vec<String>,
    /// 规则说明（如版本备注）
    description: Option<String>,
    /// 最小长度，0 表示无下限
    min: usize,
    /// 最大长度，[`NO_MAX`] 表示无上限
    max: usize,
    /// 密码中任何位置都不允许出现的字符
    invalid: Vec<char>,
    /// 至少要出现一个的字符集合
    required: Vec<char>,
    /// 自定义校验正则，按原样应用（不强制锚定）
    regex: Option<String>,
    /// 合法字符类：密码的每个字符都必须属于该类
    validregex: Option<String>,

    // 惰性编译缓存，首次使用时填充
    compiled_regex: OnceLock<Option<Regex>>,
    compiled_valid: OnceLock<Option<Regex>>,
    compiled_strip: OnceLock<Option<Regex>>,
}

impl DomainRule {
    /// 创建指定主域名的规则
    ///
    /// # Arguments
    ///
    /// * `domain` - 标准化形式的主域名
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            aliases: Vec::new(),
            description: None,
            min: 0,
            max: NO_MAX,
            invalid: Vec::new(),
            required: Vec::new(),
            regex: None,
            validregex: None,
            compiled_regex: OnceLock::new(),
            compiled_valid: OnceLock::new(),
            compiled_strip: OnceLock::new(),
        }
    }

    /// 设置等价域名列表
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// 设置规则说明
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 设置最小长度
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// 设置最大长度
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    /// 设置禁止字符列表
    pub fn with_invalid(mut self, invalid: impl IntoIterator<Item = char>) -> Self {
        self.invalid = invalid.into_iter().collect();
        self
    }

    /// 设置必需字符列表
    ///
    /// 密码只需包含其中任意一个；重写时注入列表的第一个字符。
    pub fn with_required(mut self, required: impl IntoIterator<Item = char>) -> Self {
        self.required = required.into_iter().collect();
        self
    }

    /// 设置自定义校验正则
    pub fn with_regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = Some(pattern.into());
        // 模式变更后丢弃已编译缓存
        self.compiled_regex = OnceLock::new();
        self
    }

    /// 设置合法字符类
    ///
    /// 校验时编译为锚定模式 `^[<类>]+$`，大小写敏感性完全由
    /// 类本身决定；重写时用其补集 `[^<类>]` 剥离类外字符。
    pub fn with_validregex(mut self, class: impl Into<String>) -> Self {
        self.validregex = Some(class.into());
        self.compiled_valid = OnceLock::new();
        self.compiled_strip = OnceLock::new();
        self
    }

    // ========================================================================
    // 字段访问
    // ========================================================================

    /// 获取主域名
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// 获取等价域名列表
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// 获取规则说明
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// 获取最小长度
    pub fn min(&self) -> usize {
        self.min
    }

    /// 获取最大长度
    pub fn max(&self) -> usize {
        self.max
    }

    /// 获取禁止字符列表
    pub fn invalid(&self) -> &[char] {
        &self.invalid
    }

    /// 获取必需字符列表
    pub fn required(&self) -> &[char] {
        &self.required
    }

    /// 获取自定义校验正则
    pub fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    /// 获取合法字符类
    pub fn validregex(&self) -> Option<&str> {
        self.validregex.as_deref()
    }

    /// 是否设置了最小长度
    pub fn has_min(&self) -> bool {
        self.min != 0
    }

    /// 是否设置了最大长度
    pub fn has_max(&self) -> bool {
        self.max != NO_MAX
    }

    /// 是否设置了必需字符
    pub fn has_required(&self) -> bool {
        !self.required.is_empty()
    }

    /// 是否设置了禁止字符
    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// 是否设置了自定义校验正则
    pub fn has_regex(&self) -> bool {
        self.regex.is_some()
    }

    /// 是否设置了合法字符类
    pub fn has_validregex(&self) -> bool {
        self.validregex.is_some()
    }

    // ========================================================================
    // 域名匹配
    // ========================================================================

    /// 判断输入域名是否匹配本规则
    ///
    /// 输入先经标准化，再与主域名及各等价域名做全等比较；
    /// 不做子串或后缀匹配（`"afoo.com"` 不匹配 `"foo.com"` 的规则）。
    ///
    /// # Arguments
    ///
    /// * `domain` - 待检查的域名，可带协议前缀和路径
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::rule::DomainRule;
    ///
    /// let rule = DomainRule::new("foo.com").with_aliases(["moo.com"]);
    ///
    /// assert!(rule.matches("HTTP://foo.com"));
    /// assert!(rule.matches("foo.com/path"));
    /// assert!(rule.matches("moo.com"));
    /// assert!(!rule.matches("afoo.com"));
    /// ```
    pub fn matches(&self, domain: &str) -> bool {
        let dom = standardize_domain(domain);

        if dom == self.domain {
            return true;
        }

        self.aliases.iter().any(|alias| *alias == dom)
    }

    // ========================================================================
    // 密码校验
    // ========================================================================

    /// 判断密码是否满足本规则的全部约束
    ///
    /// 六个侧面按序短路求值：最小长度、最大长度、必需字符、
    /// 禁止字符、自定义正则、合法字符类。校验是纯合取，
    /// 求值顺序只影响性能，不影响结果。
    ///
    /// # Arguments
    ///
    /// * `password` - 待校验的密码
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::rule::DomainRule;
    ///
    /// let rule = DomainRule::new("foo.com").with_validregex("A-Z0-9");
    ///
    /// assert!(rule.is_valid("PASS01"));
    /// assert!(!rule.is_valid("aA9"));
    /// ```
    pub fn is_valid(&self, password: &str) -> bool {
        if !self.is_valid_min(password) {
            return false;
        }

        if !self.is_valid_max(password) {
            return false;
        }

        if !self.is_valid_required(password) {
            return false;
        }

        if !self.is_valid_invalid(password) {
            return false;
        }

        if !self.is_valid_regex(password) {
            return false;
        }

        if !self.is_valid_validregex(password) {
            return false;
        }

        true
    }

    /// 密码是否达到最小长度
    fn is_valid_min(&self, password: &str) -> bool {
        password.chars().count() >= self.min
    }

    /// 密码是否未超出最大长度
    fn is_valid_max(&self, password: &str) -> bool {
        password.chars().count() <= self.max
    }

    /// 密码是否含有至少一个必需字符
    fn is_valid_required(&self, password: &str) -> bool {
        if self.required.is_empty() {
            return true;
        }

        self.required.iter().any(|c| password.contains(*c))
    }

    /// 密码是否不含任何禁止字符
    fn is_valid_invalid(&self, password: &str) -> bool {
        if self.invalid.is_empty() {
            return true;
        }

        !self.invalid.iter().any(|c| password.contains(*c))
    }

    /// 密码是否匹配自定义正则
    ///
    /// 设置了模式但编译失败时，该侧面视为无法满足。
    fn is_valid_regex(&self, password: &str) -> bool {
        if self.regex.is_none() {
            return true;
        }

        match self.custom_regex() {
            Some(re) => re.is_match(password),
            None => false,
        }
    }

    /// 密码的每个字符是否都属于合法字符类
    fn is_valid_validregex(&self, password: &str) -> bool {
        if self.validregex.is_none() {
            return true;
        }

        match self.valid_class_regex() {
            Some(re) => re.is_match(password),
            None => false,
        }
    }

    // ========================================================================
    // 密码重写
    // ========================================================================

    /// 尝试把密码重写为满足本规则的形式
    ///
    /// 按固定顺序执行最小破坏性的变换：
    ///
    /// 1. 已合法则原样返回；
    /// 2. 逐个删除全部禁止字符（每个字符删尽后再处理下一个）；
    /// 3. 设置了合法字符类且尚不完全匹配时，一次性剥离类外字符；
    /// 4. 截断到最大长度；
    /// 5. 缺少必需字符时，把必需列表的第一个字符加到开头
    ///    （加在开头是因为截断保留字符串前部，保证注入的字符
    ///    不会被随后的截断切掉）；
    /// 6. 再次截断到最大长度；
    /// 7. 终校验，仍不合法（如剥离后过短、自定义正则不满足）
    ///    则返回 `None`。
    ///
    /// 重写只修复长度与字符约束，从不尝试满足自定义正则。
    ///
    /// # Arguments
    ///
    /// * `password` - 输入密码
    ///
    /// # Returns
    ///
    /// 重写后的合法密码，无法重写时返回 `None`
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::rule::DomainRule;
    ///
    /// let rule = DomainRule::new("foo.com")
    ///     .with_min(3)
    ///     .with_max(10)
    ///     .with_required(['a', '-'])
    ///     .with_invalid(['!']);
    ///
    /// assert_eq!(rule.rewrite("pass!").as_deref(), Some("pass"));
    /// assert_eq!(rule.rewrite("bb").as_deref(), Some("abb"));
    /// assert_eq!(rule.rewrite("!!!!!!!!!!!"), None);
    /// ```
    pub fn rewrite(&self, password: &str) -> Option<String> {
        // 已合法则不做任何改动
        if self.is_valid(password) {
            return Some(password.to_string());
        }

        let mut new_pass = password.to_string();

        // 逐个删除禁止字符
        for invalid_char in &self.invalid {
            new_pass.retain(|c| c != *invalid_char);
        }

        // 剥离合法字符类之外的字符
        if self.has_validregex() {
            let already_valid = self
                .valid_class_regex()
                .is_some_and(|re| re.is_match(&new_pass));

            if !already_valid
                && let Some(strip) = self.strip_regex()
            {
                new_pass = strip.replace_all(&new_pass, "").into_owned();
            }
        }

        // 截断、按需注入必需字符、再截断
        new_pass = self.trim_to_max(new_pass);
        new_pass = self.add_required_char(new_pass);
        new_pass = self.trim_to_max(new_pass);

        // 终校验
        if !self.is_valid(&new_pass) {
            return None;
        }

        Some(new_pass)
    }

    /// 把密码截断到最大长度，保留前部
    fn trim_to_max(&self, password: String) -> String {
        if password.chars().count() > self.max {
            password.chars().take(self.max).collect()
        } else {
            password
        }
    }

    /// 缺少必需字符时，把第一个必需字符加到密码开头
    fn add_required_char(&self, password: String) -> String {
        if self.required.is_empty() {
            return password;
        }

        if self.required.iter().any(|c| password.contains(*c)) {
            return password;
        }

        let mut with_required = String::with_capacity(password.len() + 4);
        with_required.push(self.required[0]);
        with_required.push_str(&password);
        with_required
    }

    // ========================================================================
    // 惰性正则编译
    // ========================================================================

    /// 获取编译后的自定义正则；未设置或编译失败时为 `None`
    fn custom_regex(&self) -> Option<&Regex> {
        self.compiled_regex
            .get_or_init(|| self.regex.as_deref().and_then(|p| Regex::new(p).ok()))
            .as_ref()
    }

    /// 获取编译后的合法字符类模式（锚定的 `^[<类>]+$`）
    fn valid_class_regex(&self) -> Option<&Regex> {
        self.compiled_valid
            .get_or_init(|| {
                self.validregex
                    .as_deref()
                    .and_then(|class| Regex::new(&format!("^[{}]+$", class)).ok())
            })
            .as_ref()
    }

    /// 获取编译后的补集模式（`[^<类>]`），用于剥离类外字符
    fn strip_regex(&self) -> Option<&Regex> {
        self.compiled_strip
            .get_or_init(|| {
                self.validregex
                    .as_deref()
                    .and_then(|class| Regex::new(&format!("[^{}]", class)).ok())
            })
            .as_ref()
    }
}
