use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn write(root: &Path, rel: &str, lines: usize) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "line\n".repeat(lines)).unwrap();
}

fn run_in(root: &Path, extra: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_dirloc"))
        .current_dir(root)
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/// Parse `{count:>6} 行  {name}` rows out of one report section.
fn rows(section: &str) -> Vec<(usize, String)> {
    section
        .lines()
        .filter_map(|line| {
            let (count, name) = line.split_once(" 行  ")?;
            Some((count.trim().parse().ok()?, name.to_string()))
        })
        .collect()
}

fn sections(stdout: &str) -> (String, String) {
    let (files, dirs) = stdout.split_once("目录汇总（降序）").unwrap();
    (files.to_string(), dirs.to_string())
}

#[test]
fn mixed_tree_text_report() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.ts", 10);
    write(dir.path(), "b.js", 5);
    write(dir.path(), "README.md", 3);
    write(dir.path(), "node_modules/c.js", 100);

    let stdout = run_in(dir.path(), &[]);
    let (files, dirs) = sections(&stdout);

    assert_eq!(
        rows(&files),
        vec![(10, "a.ts".to_string()), (5, "b.js".to_string())]
    );
    assert_eq!(rows(&dirs), vec![(15, "./".to_string())]);
    assert!(stdout.ends_with("\n总计: 15 行\n"));
}

#[test]
fn empty_tree_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "notes.txt", 4);

    let stdout = run_in(dir.path(), &[]);
    let (files, dirs) = sections(&stdout);

    assert!(rows(&files).is_empty());
    assert!(rows(&dirs).is_empty());
    assert!(stdout.ends_with("总计: 0 行\n"));
}

#[test]
fn rows_are_descending_and_totals_agree() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/app.ts", 30);
    write(dir.path(), "src/util.ts", 12);
    write(dir.path(), "src/ui/Button.svelte", 50);
    write(dir.path(), "styles/main.css", 7);
    write(dir.path(), "web/node_modules/pkg/deep/x.js", 999);
    write(dir.path(), "target/debug/build.rs", 999);
    write(dir.path(), "index.html", 2);

    let stdout = run_in(dir.path(), &[]);
    let (files, dirs) = sections(&stdout);
    let file_rows = rows(&files);
    let dir_rows = rows(&dirs);

    assert!(file_rows.windows(2).all(|w| w[0].0 >= w[1].0));
    assert!(dir_rows.windows(2).all(|w| w[0].0 >= w[1].0));
    assert!(file_rows.iter().all(|(_, p)| !p.contains("node_modules") && !p.starts_with("target")));

    let file_sum: usize = file_rows.iter().map(|(n, _)| n).sum();
    let dir_sum: usize = dir_rows.iter().map(|(n, _)| n).sum();
    assert_eq!(file_sum, 101);
    assert_eq!(dir_sum, file_sum);
    assert!(stdout.ends_with("总计: 101 行\n"));
    assert_eq!(dir_rows[0], (50, "src/ui/".to_string()));
}

#[test]
fn json_format() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.ts", 10);
    write(dir.path(), "lib/b.rs", 4);

    let stdout = run_in(dir.path(), &["--format", "json"]);
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["total"], 14);
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert_eq!(json["files"][0]["path"], "a.ts");
    assert_eq!(json["directories"][1]["dir"], "lib");
}
