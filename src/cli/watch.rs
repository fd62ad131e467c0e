//! Watch command implementation.
//!
//! Exports once, then re-exports a project file each time it changes on
//! disk. Exports still run one at a time on this thread.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, RecursiveMode, Watcher};

use crate::config::ExportConfig;
use crate::error::{DrawioError, Result};
use crate::export::finish;
use crate::output::{display_path, plural, Printer};

use super::export::{export_inputs, ExportArgs};

/// Quiet period after a change before exporting. Editors often save in
/// several writes.
const DEBOUNCE: Duration = Duration::from_millis(300);

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.resolve_config()?;
    let inputs = args.input.project_files(&config)?;
    let targets: Vec<(PathBuf, PathBuf)> = inputs
        .iter()
        .map(|input| (resolve_target(input), input.clone()))
        .collect();

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;

    let dirs: BTreeSet<PathBuf> = targets.iter().map(|(path, _)| watch_dir(path)).collect();
    for dir in &dirs {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(watch_error)?;
    }

    export_and_report(&config, &inputs, args.dry_run, printer);
    printer.info(
        "Watching",
        &format!("{} (Ctrl-C to stop)", plural(inputs.len(), "file", "files")),
    );

    while let Ok(first) = rx.recv() {
        let mut changed = BTreeSet::new();
        collect_changes(first, &targets, &mut changed, printer);
        while let Ok(more) = rx.recv_timeout(DEBOUNCE) {
            collect_changes(more, &targets, &mut changed, printer);
        }

        if changed.is_empty() {
            continue;
        }

        let changed: Vec<PathBuf> = changed.into_iter().collect();
        for input in &changed {
            printer.info("Changed", &display_path(input));
        }
        export_and_report(&config, &changed, args.dry_run, printer);
    }

    Ok(())
}

fn collect_changes(
    event: notify::Result<Event>,
    targets: &[(PathBuf, PathBuf)],
    changed: &mut BTreeSet<PathBuf>,
    printer: &Printer,
) {
    match event {
        Ok(event) => changed.extend(changed_inputs(&event, targets)),
        Err(e) => printer.warning("Watch", &e.to_string()),
    }
}

/// Inputs touched by a create or modify event.
///
/// `targets` pairs each input's canonical path with the path as given.
pub fn changed_inputs(event: &Event, targets: &[(PathBuf, PathBuf)]) -> Vec<PathBuf> {
    if !(event.kind.is_modify() || event.kind.is_create()) {
        return Vec::new();
    }

    let touched: Vec<PathBuf> = event.paths.iter().map(|p| resolve_target(p)).collect();
    targets
        .iter()
        .filter(|(path, _)| touched.contains(path))
        .map(|(_, input)| input.clone())
        .collect()
}

fn export_and_report(config: &ExportConfig, inputs: &[PathBuf], dry_run: bool, printer: &Printer) {
    let result = export_inputs(config, inputs, dry_run, printer)
        .and_then(|report| finish(&report, printer));
    if let Err(e) = result {
        printer.error("Error", &e.to_string());
    }
}

/// Absolute, symlink-free form of `path`, whether or not it exists yet.
///
/// A file that is missing resolves through its directory, so it still
/// matches the event paths once it is created.
fn resolve_target(path: &Path) -> PathBuf {
    if let Ok(path) = fs::canonicalize(path) {
        return path;
    }

    let dir = watch_dir(path);
    let dir = fs::canonicalize(&dir).unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(&dir))
            .unwrap_or(dir)
    });
    match path.file_name() {
        Some(name) => dir.join(name),
        None => dir,
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn watch_error(e: notify::Error) -> DrawioError {
    DrawioError::Watch {
        message: e.to_string(),
    }
}
