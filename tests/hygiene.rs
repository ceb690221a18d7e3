//! Hygiene: enforces coding standards at test time.
//!
//! Scans the production sources under `src/` (sibling `_test.rs` files are
//! skipped) for antipatterns. Every budget is zero; if one has to grow, fix
//! an existing hit first.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget {
        pattern: ".unwrap()",
        max: 0,
        why: "crashes the host",
    },
    Budget {
        pattern: ".expect(",
        max: 0,
        why: "crashes the host",
    },
    Budget {
        pattern: "panic!(",
        max: 0,
        why: "crashes the host",
    },
    Budget {
        pattern: "unreachable!(",
        max: 0,
        why: "crashes the host",
    },
    Budget {
        pattern: "todo!(",
        max: 0,
        why: "stub left in place",
    },
    Budget {
        pattern: "unimplemented!(",
        max: 0,
        why: "stub left in place",
    },
    // Silent loss.
    Budget {
        pattern: "let _ =",
        max: 0,
        why: "discards a result unseen",
    },
    Budget {
        pattern: ".ok()",
        max: 0,
        why: "discards an error unseen",
    },
    // Structure.
    Budget {
        pattern: "#[allow(dead_code)]",
        max: 0,
        why: "hides unused code",
    },
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile {
                    path: path_str,
                    content,
                });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("engine.rs")),
        "src/ not scanned; run from the crate root"
    );
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` ({}) budget exceeded: found {count}, max {}.\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

/// Library modules report through `tracing`; only the binary prints.
#[test]
fn library_does_not_print() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !f.path.ends_with("main.rs"))
        .collect();
    for pattern in ["println!(", "eprintln!(", "dbg!("] {
        let found = hits(&files, pattern);
        assert!(
            found.is_empty(),
            "`{pattern}` in library code:\n{}",
            format_hits(&found)
        );
    }
}
