//! Directory-scoped command runner.
//!
//! Commands receive their working directory and module-lookup path as
//! per-child settings (`Command::current_dir`, child-only `PYTHONPATH`);
//! nothing process-global is touched, so parallel test threads cannot
//! observe each other's directories.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Output};

use thiserror::Error;

/// All errors that can arise from running a command in a directory.
#[derive(Debug, Error)]
pub enum RunError {
    /// The command string could not be split into words.
    #[error("cannot parse command '{command}': {source}")]
    Parse {
        command: String,
        #[source]
        source: shell_words::ParseError,
    },

    /// The command string was empty.
    #[error("empty command")]
    Empty,

    /// The process could not be spawned.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero (the loud variant).
    #[error("command '{command}' failed with {status}\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

/// Captured output of a completed command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    fn from_output(output: Output) -> Self {
        CommandOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// `PYTHONPATH` for a child running inside `dir`: `<dir>/src` prepended to
/// whatever the parent already carries.
fn python_path_for(dir: &Path) -> OsString {
    let src = dir.join("src");
    let mut paths = vec![src];
    if let Some(existing) = std::env::var_os("PYTHONPATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).unwrap_or_else(|_| dir.join("src").into_os_string())
}

fn spawn_in_dir(command: &str, dir: &Path) -> Result<CommandOutput, RunError> {
    let words = shell_words::split(command).map_err(|e| RunError::Parse {
        command: command.to_string(),
        source: e,
    })?;
    let (program, args) = words.split_first().ok_or(RunError::Empty)?;

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .env("PYTHONPATH", python_path_for(dir))
        .output()
        .map_err(|e| RunError::Spawn {
            command: command.to_string(),
            source: e,
        })?;
    Ok(CommandOutput::from_output(output))
}

/// Run a command inside `dir`; non-zero exit is an error carrying the
/// captured output.
pub fn run_in_dir(command: &str, dir: &Path) -> Result<(), RunError> {
    let output = spawn_in_dir(command, dir)?;
    if !output.status.success() {
        return Err(RunError::Failed {
            command: command.to_string(),
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }
    Ok(())
}

/// Run a command inside `dir`, returning the captured output; the caller
/// inspects `status` itself.
pub fn output_in_dir(command: &str, dir: &Path) -> Result<CommandOutput, RunError> {
    spawn_in_dir(command, dir)
}

// ---------------------------------------------------------------------------
// Interpreter probes
// ---------------------------------------------------------------------------

/// Locate a usable Python 3 interpreter, if any.
///
/// Acceptance tests that drive generated Python skip themselves when this
/// returns `None` instead of failing on a machine without an interpreter.
pub fn python3() -> Option<String> {
    for candidate in ["python3", "python"] {
        let probe = Command::new(candidate).arg("--version").output();
        if let Ok(output) = probe {
            if output.status.success() {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

/// Whether `interpreter` can import `module`.
pub fn python_module(interpreter: &str, module: &str) -> bool {
    Command::new(interpreter)
        .args(["-c", &format!("import {module}")])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn run_in_dir_uses_the_given_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "here").unwrap();
        run_in_dir("ls marker.txt", dir.path()).expect("marker visible from dir");
    }

    #[test]
    fn run_in_dir_fails_loudly_on_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let err = run_in_dir("ls definitely_missing_file", dir.path()).unwrap_err();
        assert!(matches!(err, RunError::Failed { .. }));
    }

    #[test]
    fn output_in_dir_returns_status_to_the_caller() {
        let dir = TempDir::new().unwrap();
        let output = output_in_dir("ls definitely_missing_file", dir.path()).unwrap();
        assert!(!output.status.success(), "caller sees the failure itself");
    }

    #[test]
    fn empty_command_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(run_in_dir("", dir.path()), Err(RunError::Empty)));
    }

    #[test]
    fn quoted_arguments_survive_splitting() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a b.txt"), "spaced").unwrap();
        run_in_dir("ls 'a b.txt'", dir.path()).expect("quoted filename resolves");
    }

    #[test]
    fn child_pythonpath_points_at_src() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        let Some(python) = python3() else {
            eprintln!("skipping: no python3 on PATH");
            return;
        };
        let output = output_in_dir(
            &format!("{python} -c \"import os; print(os.environ['PYTHONPATH'])\""),
            dir.path(),
        )
        .unwrap();
        assert!(output.status.success());
        assert!(
            output.stdout.contains("src"),
            "PYTHONPATH should contain the project src dir: {}",
            output.stdout
        );
    }
}
