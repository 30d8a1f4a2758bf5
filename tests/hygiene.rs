//! Source rules checked at test time.
//!
//! Production code under `src/` runs inside one page; a panic there takes the
//! whole page script down with it. The rules below keep the tree free of
//! panicking shortcuts, keep leaked closures in the few places that own them,
//! and keep markup edits away from raw HTML strings. `*_test.rs` files are
//! exempt.

use std::fs;
use std::path::{Path, PathBuf};

/// Patterns that must not appear in production code at all.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "propagate the error or log and fall back"),
    (".expect(", "propagate the error or log and fall back"),
    ("panic!(", "return an error instead"),
    ("unreachable!(", "make the state unrepresentable instead"),
    ("todo!(", "finish the code path"),
    ("unimplemented!(", "finish the code path"),
    ("#[allow(dead_code)]", "delete the item or use it"),
    ("set_inner_html", "build nodes; cards must keep their listeners"),
];

/// Files allowed to leak a JS closure or mount handle for the page's lifetime.
const FORGET_OWNERS: &[&str] = &["src/app.rs", "src/util/dom.rs", "src/util/reveal.rs"];

/// `let _ =` only silences unused bindings in native no-op branches.
const DISCARD_MARKER: &str = "cfg(not(feature = \"csr\"))";
const DISCARD_WINDOW: usize = 3;

struct Source {
    rel: String,
    text: String,
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn sources() -> Vec<Source> {
    let root = manifest_dir();
    let mut out = Vec::new();
    walk(&root.join("src"), &root, &mut out);
    assert!(!out.is_empty(), "no sources under {}", root.display());
    out
}

fn walk(dir: &Path, root: &Path, out: &mut Vec<Source>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, root, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.file_name().is_some_and(|n| n.to_string_lossy().ends_with("_test.rs"));
        if !is_rs || is_test {
            continue;
        }
        if let Ok(text) = fs::read_to_string(&path) {
            let rel = path.strip_prefix(root).unwrap_or(&path).to_string_lossy().replace('\\', "/");
            out.push(Source { rel, text });
        }
    }
}

/// `path:line` for every line containing `pattern`.
fn locate(sources: &[Source], pattern: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|s| {
            s.text
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(i, _)| format!("{}:{}", s.rel, i + 1))
        })
        .collect()
}

#[test]
fn forbidden_patterns_are_absent() {
    let sources = sources();
    let violations: Vec<String> = FORBIDDEN
        .iter()
        .flat_map(|(pattern, fix)| {
            locate(&sources, pattern)
                .into_iter()
                .map(move |at| format!("  {at}: `{pattern}` ({fix})"))
        })
        .collect();
    assert!(violations.is_empty(), "forbidden patterns found:\n{}", violations.join("\n"));
}

#[test]
fn forget_stays_with_its_owners() {
    let sources = sources();
    let strays: Vec<String> = sources
        .iter()
        .filter(|s| !FORGET_OWNERS.contains(&s.rel.as_str()))
        .flat_map(|s| locate(std::slice::from_ref(s), ".forget()"))
        .collect();
    assert!(
        strays.is_empty(),
        "`.forget()` outside {FORGET_OWNERS:?}:\n  {}",
        strays.join("\n  ")
    );
}

#[test]
fn forget_owners_exist() {
    let root = manifest_dir();
    for owner in FORGET_OWNERS {
        assert!(root.join(owner).is_file(), "{owner} is listed as a closure owner but is missing");
    }
}

#[test]
fn discards_sit_in_native_branches() {
    let mut loose = Vec::new();
    for source in sources() {
        let lines: Vec<&str> = source.text.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            if !line.contains("let _ =") {
                continue;
            }
            let from = i.saturating_sub(DISCARD_WINDOW);
            if !lines[from..i].iter().any(|l| l.contains(DISCARD_MARKER)) {
                loose.push(format!("{}:{}", source.rel, i + 1));
            }
        }
    }
    assert!(
        loose.is_empty(),
        "`let _ =` outside a `{DISCARD_MARKER}` branch:\n  {}",
        loose.join("\n  ")
    );
}
