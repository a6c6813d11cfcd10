// src/presentation.rs
use crate::args::OutputFormat;
use crate::error::Result;
use dirloc_engine::report::Report;
use std::fmt::Write as _;
use std::io::Write;

const BANNER_WIDTH: usize = 60;
const FILES_TITLE: &str = "文件行数统计（降序）";
const DIRS_TITLE: &str = "目录汇总（降序）";

fn push_banner(out: &mut String, title: &str) {
    let banner = "=".repeat(BANNER_WIDTH);
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{banner}");
}

/// Plain-text report: files, then directories, then the grand total.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    push_banner(&mut out, FILES_TITLE);
    for file in &report.files {
        let _ = writeln!(out, "{:>6} 行  {}", file.lines, file.path);
    }

    out.push('\n');
    push_banner(&mut out, DIRS_TITLE);
    for dir in &report.directories {
        let _ = writeln!(out, "{:>6} 行  {}/", dir.lines, dir.dir);
    }

    let _ = writeln!(out, "\n总计: {} 行", report.total);
    out
}

/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// # Errors
/// Returns an error if rendering or writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render_text(report).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_json(report)?)?,
    }
    out.flush()?;
    Ok(())
}
