//! saltpass 命令行工具
//!
//! 从主密码、域名与可选短语派生站点密码并打印到标准输出。
//! 可选地加载 JSON 规则表，对派生结果应用匹配站点的规则重写。
//!
//! 运行: cargo run --bin saltpass -- -p master -d example.com

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use saltpass::{RuleSet, salt_the_pass};

/// 确定性的站点密码派生
#[derive(Parser, Debug)]
#[command(name = "saltpass", version, about)]
struct Args {
    /// 哈希算法名称
    #[arg(
        short = 'H',
        long,
        default_value = "md5",
        value_parser = ["md5", "sha1", "sha2", "sha3", "ripemd160"],
    )]
    hash: String,

    /// 主密码
    #[arg(short, long)]
    password: String,

    /// 域名
    #[arg(short, long)]
    domain: String,

    /// 域名短语（可选）
    #[arg(short = 'r', long)]
    phrase: Option<String>,

    /// JSON 规则表文件，派生结果将按匹配的站点规则重写（可选）
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let phrase = args.phrase.as_deref().unwrap_or("");
    let Some(salted) = salt_the_pass(&args.hash, &args.password, &args.domain, phrase) else {
        eprintln!("saltpass: failed to derive a password with hash '{}'", args.hash);
        return ExitCode::FAILURE;
    };

    let output = match &args.rules {
        None => salted,
        Some(path) => match apply_rules(path, &args.domain, &salted) {
            Ok(rewritten) => rewritten,
            Err(message) => {
                eprintln!("saltpass: {}", message);
                return ExitCode::FAILURE;
            }
        },
    };

    println!("{}", output);
    ExitCode::SUCCESS
}

/// 加载规则表并对派生结果应用匹配站点的规则
///
/// 没有匹配的规则时原样返回派生结果。
fn apply_rules(path: &Path, domain: &str, salted: &str) -> Result<String, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;

    let rules = RuleSet::from_json(&json).map_err(|e| e.to_string())?;

    match rules.find(domain) {
        None => Ok(salted.to_string()),
        Some(rule) => rule.rewrite(salted).ok_or_else(|| {
            format!(
                "the derived password cannot be rewritten to satisfy the rules for '{}'",
                domain
            )
        }),
    }
}
