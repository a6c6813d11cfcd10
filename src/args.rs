// src/args.rs
use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirloc",
    version = crate::VERSION,
    about = "统计各目录下代码文件行数，按行数降序排列"
)]
pub struct Args {
    /// 扫描的根目录
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// 输出格式
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// 日志详细程度（可重复: -v, -vv, -vvv）
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
