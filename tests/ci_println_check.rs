//! CI validation tests for println! usage
//!
//! The TUI owns the terminal, so its modules must never print directly.
//! Library modules report through `log` and the controls.

use std::fs;
use std::path::Path;

fn printing_lines(content: &str) -> Vec<usize> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            (line.contains("println!") || line.contains("eprintln!"))
                && !line.trim_start().starts_with("//")
        })
        .map(|(n, _)| n + 1)
        .collect()
}

/// Test that TUI components don't contain println! or eprintln! statements
#[test]
fn test_no_println_in_tui_components() {
    let tui_files = [
        "src/cli/tui/mod.rs",
        "src/cli/tui/event_loop.rs",
        "src/cli/tui/app.rs",
        "src/cli/tui/ui.rs",
    ];

    for file_path in &tui_files {
        if Path::new(file_path).exists() {
            let content = fs::read_to_string(file_path)
                .unwrap_or_else(|_| panic!("Failed to read {}", file_path));

            let lines = printing_lines(&content);
            if !lines.is_empty() {
                panic!(
                    "Found println!/eprintln! statements in TUI file {}: lines {:?}\n\
                     TUI components must not write to the terminal directly.\n\
                     Use log macros or a notice on the session controls instead.",
                    file_path, lines
                );
            }
        }
    }
}

/// Test that library modules use logging instead of printing
#[test]
fn test_no_println_in_library_modules() {
    let library_dirs = ["src/client", "src/session", "src/models", "src/config", "src/errors"];

    fn check_dir(dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                check_dir(&path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let content = fs::read_to_string(&path).unwrap_or_default();
                let lines = printing_lines(&content);
                assert!(
                    lines.is_empty(),
                    "Found println!/eprintln! statements in {}: lines {:?}",
                    path.display(),
                    lines
                );
            }
        }
    }

    for dir in &library_dirs {
        check_dir(Path::new(dir));
    }
}

/// Test that entry points initialize logging
#[test]
fn test_proper_logging_patterns() {
    let path = Path::new("src/cli/mod.rs");
    if !path.exists() {
        return;
    }

    let content = fs::read_to_string(path).expect("Failed to read src/cli/mod.rs");
    assert!(
        content.contains("init_cli_logging"),
        "The CLI runner should initialize logging"
    );
}
