//! 密码派生示例
//!
//! 展示哈希注册表的查询接口和站点密码的派生流程。
//!
//! 运行: cargo run --example derive_password

use saltpass::{HashAlgorithm, hash_length, hash_names, salt_the_pass};

fn main() {
    println!("=== SaltPass 密码派生示例 ===\n");

    // 1. 列出注册的哈希算法
    println!("📋 注册的哈希算法:");
    for name in hash_names() {
        println!("   {:<10} -> 输出 {} 字符", name, hash_length(name));
    }
    println!();

    // 2. 为同一主密码派生不同站点的密码
    let master = "my-master-password";
    println!("🔑 主密码: {}", master);
    println!();

    for domain in ["example.com", "bank.example.org", "mail.example.net"] {
        let salted = salt_the_pass("sha1", master, domain, "").unwrap();
        println!("   {:<20} -> {}", domain, salted);
    }
    println!();

    // 3. 域名短语让同一站点可以派生多个版本
    println!("🔄 使用域名短语轮换密码:");
    for phrase in ["", "2025", "2026"] {
        let salted = salt_the_pass("sha1", master, "example.com", phrase).unwrap();
        println!("   短语 {:<6} -> {}", format!("{:?}", phrase), salted);
    }
    println!();

    // 4. 任一输入的微小变化都会彻底改变输出
    println!("⚡ 输入敏感性:");
    let base = salt_the_pass("md5", "test", "test", "").unwrap();
    let changed = salt_the_pass("md5", "tesT", "test", "").unwrap();
    println!("   (\"test\", \"test\") -> {}", base);
    println!("   (\"tesT\", \"test\") -> {}", changed);
    println!();

    // 5. 未注册的算法名返回 None 而不是错误
    match salt_the_pass("DOES NOT EXIST", "test", "test", "") {
        Some(_) => println!("❌ 不应该到达这里"),
        None => println!("✅ 未注册的算法返回 None"),
    }

    // 6. 类型化入口
    let algorithm = HashAlgorithm::from_name("ripemd160").unwrap();
    println!(
        "✅ {} 的摘要长度为 {} 字节",
        algorithm.name(),
        algorithm.digest(b"testtest").len()
    );

    println!("\n=== 示例结束 ===");
}
