use std::path::{Path, PathBuf};

use endoscope_core::error::Result;
use endoscope_core::{Endpoint, extract_endpoints};
use endoscope_java::JavaParser;
use ignore::WalkBuilder;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

/// Endpoint report for one source file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: PathBuf,
    package: Option<String>,
    endpoints: Vec<Endpoint>,
}

struct SourceFile {
    path: PathBuf,
    /// Named on the command line, as opposed to discovered by a walk.
    /// Explicit files fail loud; discovered files are skipped with a warning.
    explicit: bool,
}

pub fn run(paths: &[PathBuf], json: bool) -> Result<()> {
    let files = collect_java_files(paths);
    if files.is_empty() {
        warn!("no Java files found under the given paths");
    } else {
        info!("scanning {} Java file(s)", files.len());
    }

    let parser = JavaParser::new();
    let results: Vec<Result<Option<FileReport>>> = files
        .par_iter()
        .map(|file| scan_file(&parser, file))
        .collect();

    let mut reports = Vec::new();
    for result in results {
        if let Some(report) = result? {
            reports.push(report);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_text(&reports);
    }
    Ok(())
}

/// Expands the given paths into a sorted list of `.java` files. Directories
/// are walked gitignore-aware; walk errors are reported and skipped.
fn collect_java_files(paths: &[PathBuf]) -> Vec<SourceFile> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(SourceFile {
                path: path.clone(),
                explicit: true,
            });
            continue;
        }
        for entry in WalkBuilder::new(path).build() {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if is_file && entry.path().extension().is_some_and(|ext| ext == "java") {
                        files.push(SourceFile {
                            path: entry.into_path(),
                            explicit: false,
                        });
                    }
                }
                Err(err) => warn!("walk error under {}: {}", path.display(), err),
            }
        }
    }
    // Report order is deterministic regardless of walk order.
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn scan_file(parser: &JavaParser, file: &SourceFile) -> Result<Option<FileReport>> {
    match try_scan(parser, &file.path) {
        Ok(report) => Ok(Some(report)),
        Err(err) if !file.explicit => {
            warn!("skipping {}: {}", file.path.display(), err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn try_scan(parser: &JavaParser, path: &Path) -> Result<FileReport> {
    let source = std::fs::read_to_string(path)?;
    let unit = parser.parse(&source)?;
    let endpoints = extract_endpoints(&unit);
    Ok(FileReport {
        file: path.to_path_buf(),
        package: unit.package,
        endpoints,
    })
}

fn print_text(reports: &[FileReport]) {
    // The single-file invocation prints bare endpoint lines; multi-file
    // output carries the file for context.
    let multiple = reports.len() > 1;
    for report in reports {
        for endpoint in &report.endpoints {
            if multiple {
                println!("{}: {}", report.file.display(), endpoint);
            } else {
                println!("{endpoint}");
            }
        }
    }
}
