//! 站点规则示例
//!
//! 展示如何加载规则表、按域名匹配规则，以及把派生的密码
//! 重写为符合站点策略的形式。
//!
//! 运行: cargo run --example domain_rules

use saltpass::{RuleSet, salt_the_pass};

/// 示例规则表（实际应用中通常来自配置文件）
const RULE_TABLE: &str = r#"[
    {
        "domain": "legacybank.example",
        "description": "只接受大写字母和数字, 最长 12 位",
        "max": 12,
        "validregex": "A-Z0-9"
    },
    {
        "domain": "forum.example",
        "aliases": ["forum-login.example"],
        "min": 3,
        "max": 10,
        "required": ["a", "-"],
        "invalid": ["!"]
    }
]"#;

fn main() {
    println!("=== SaltPass 站点规则示例 ===\n");

    // 1. 加载规则表
    let rules = match RuleSet::from_json(RULE_TABLE) {
        Ok(rules) => rules,
        Err(e) => {
            println!("❌ 规则表加载失败: {}", e);
            return;
        }
    };
    println!("✅ 加载了 {} 条规则\n", rules.len());

    // 2. 按域名匹配规则（输入自动标准化）
    println!("🔍 域名匹配:");
    for input in [
        "legacybank.example",
        "HTTPS://forum.example/login",
        "forum-login.example",
        "unknown.example",
    ] {
        match rules.find(input) {
            Some(rule) => println!("   {:<32} -> 规则 {}", input, rule.domain()),
            None => println!("   {:<32} -> 无匹配规则", input),
        }
    }
    println!();

    // 3. 派生密码并按站点规则重写
    let master = "my-master-password";
    let domain = "legacybank.example";
    let salted = salt_the_pass("sha1", master, domain, "").unwrap();
    println!("🔑 派生结果: {}", salted);

    let rule = rules.find(domain).unwrap();
    if let Some(description) = rule.description() {
        println!("   站点策略: {}", description);
    }
    println!("   直接合法? {}", rule.is_valid(&salted));

    match rule.rewrite(&salted) {
        Some(fitted) => {
            println!("   重写结果: {}", fitted);
            println!("   重写后合法? {}", rule.is_valid(&fitted));
        }
        None => println!("   ❌ 无法重写为合法形式"),
    }
    println!();

    // 4. 重写的几种典型情形
    let rule = rules.find("forum.example").unwrap();
    println!("📝 forum.example 的重写行为:");
    for password in ["pass", "pass!", "bb", "bbbbbbbbbbbbbbbbbb", "!!!!!!!!!!!"] {
        match rule.rewrite(password) {
            Some(rewritten) => println!("   {:<20} -> {:?}", format!("{:?}", password), rewritten),
            None => println!("   {:<20} -> 无法重写", format!("{:?}", password)),
        }
    }

    println!("\n=== 示例结束 ===");
}
