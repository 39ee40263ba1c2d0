//! Module probe for asking a Python interpreter what it can import.
//!
//! A Rust process cannot import Python modules itself, so each check is a
//! short-lived interpreter run. The interpreter executes a tiny script that
//! imports one module and prints a single JSON line describing the result:
//!
//! ```text
//! {"status": "ok", "version": "2.2.1"}
//! {"status": "missing", "message": "No module named 'scipy'"}
//! {"status": "error", "message": "numpy.core.multiarray failed to import"}
//! ```
//!
//! Anything else (spawn failure, crash, garbage on stdout) is reported as
//! [`ImportOutcome::Failed`], never as an absence. An interpreter that
//! cannot start at all is caught up front by [`PythonProbe::verify`].
//!
//! # Example
//!
//! ```no_run
//! use libcheck::requirements::probe::{ModuleProbe, PythonProbe};
//!
//! let probe = PythonProbe::new("/usr/bin/python3");
//! let outcome = probe.import("numpy");
//! println!("{:?}", outcome);
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde::Deserialize;

use crate::error::{CheckError, Result};
use crate::requirements::status::ImportOutcome;

/// Imports `sys.argv[1]` and reports the outcome as one JSON line.
const IMPORT_SCRIPT: &str = r#"import json, sys
name = sys.argv[1]
try:
    mod = __import__(name)
    version = getattr(mod, "__version__", None)
except ImportError as e:
    out = {"status": "missing", "message": str(e)}
except Exception as e:
    out = {"status": "error", "message": str(e)}
else:
    out = {"status": "ok", "version": None if version is None else str(version)}
print(json.dumps(out))
"#;

/// Prints the Tcl/Tk patch level through the toolkit module `sys.argv[1]`.
const TK_SCRIPT: &str = r#"import sys
tk = __import__(sys.argv[1])
print(tk.Tcl().eval("info patchlevel"))
"#;

/// Capability to resolve Python modules by name.
///
/// This trait allows substituting the interpreter in tests.
pub trait ModuleProbe {
    /// Attempt to import `module`.
    fn import(&self, module: &str) -> ImportOutcome;

    /// Query the Tcl/Tk patch level through the GUI toolkit `module`.
    fn tk_patchlevel(&self, module: &str) -> Result<String>;
}

/// Probe backed by a real Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonProbe {
    interpreter: PathBuf,
}

impl PythonProbe {
    /// Create a probe that runs the given interpreter.
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Confirm the interpreter starts and runs a trivial script.
    ///
    /// Call before any import. Spawn failures after this point become
    /// per-module warnings, not a top-level error.
    pub fn verify(&self) -> Result<()> {
        let output = Command::new(&self.interpreter)
            .arg("-c")
            .arg("import sys")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CheckError::ProbeSpawn {
                interpreter: self.interpreter.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(CheckError::InterpreterUnusable {
            interpreter: self.interpreter.clone(),
            message: last_line(&stderr)
                .map_or_else(|| output.status.to_string(), str::to_string),
        })
    }

    fn run_script(&self, script: &str, module: &str) -> Result<Output> {
        tracing::debug!(
            interpreter = %self.interpreter.display(),
            module,
            "Running probe script"
        );

        Command::new(&self.interpreter)
            .arg("-c")
            .arg(script)
            .arg(module)
            .env("PYTHONIOENCODING", "utf-8")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CheckError::ProbeSpawn {
                interpreter: self.interpreter.clone(),
                source,
            })
    }
}

impl ModuleProbe for PythonProbe {
    fn import(&self, module: &str) -> ImportOutcome {
        match self.run_script(IMPORT_SCRIPT, module) {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                classify_output(module, &stdout, &stderr, output.status.success())
            }
            Err(e) => ImportOutcome::Failed {
                message: e.to_string(),
            },
        }
    }

    fn tk_patchlevel(&self, module: &str) -> Result<String> {
        let output = self.run_script(TK_SCRIPT, module)?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        match last_line(&stdout) {
            Some(level) if output.status.success() => Ok(level.to_string()),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(CheckError::TkUnavailable {
                    message: last_line(&stderr)
                        .unwrap_or("no output from interpreter")
                        .to_string(),
                })
            }
        }
    }
}

/// One line of probe output.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ProbeLine {
    Ok {
        #[serde(default)]
        version: Option<String>,
    },
    Missing {
        #[serde(default)]
        message: Option<String>,
    },
    Error {
        message: String,
    },
}

fn parse_probe_line(module: &str, line: &str) -> Result<ProbeLine> {
    serde_json::from_str(line).map_err(|e| CheckError::ProbeOutput {
        module: module.to_string(),
        message: e.to_string(),
    })
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rfind(|l| !l.is_empty())
}

/// Turn raw interpreter output into an [`ImportOutcome`].
///
/// Only the last non-empty stdout line is considered, since importing a
/// module may print on its own.
pub fn classify_output(module: &str, stdout: &str, stderr: &str, success: bool) -> ImportOutcome {
    let Some(line) = last_line(stdout) else {
        let message = if success {
            "interpreter produced no output".to_string()
        } else {
            last_line(stderr)
                .unwrap_or("interpreter exited with an error")
                .to_string()
        };
        return ImportOutcome::Failed { message };
    };

    match parse_probe_line(module, line) {
        Ok(ProbeLine::Ok { version }) => ImportOutcome::Loaded { version },
        Ok(ProbeLine::Missing { message }) => {
            if let Some(message) = message {
                tracing::debug!(module, %message, "Module not importable");
            }
            ImportOutcome::NotFound
        }
        Ok(ProbeLine::Error { message }) => ImportOutcome::Failed { message },
        Err(e) => {
            let message = if success {
                e.to_string()
            } else {
                last_line(stderr).map_or_else(|| e.to_string(), str::to_string)
            };
            ImportOutcome::Failed { message }
        }
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Platform file name for a tool (adds `.exe` on Windows).
pub fn executable_name(tool: &str) -> String {
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        format!("{}.exe", tool)
    } else {
        tool.to_string()
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let file_name = executable_name(tool);
    for dir in path_entries {
        let candidate = dir.join(&file_name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path, body: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn classify_ok_with_version() {
        let stdout = "{\"status\": \"ok\", \"version\": \"1.26.4\"}\n";
        let outcome = classify_output("numpy", stdout, "", true);
        assert_eq!(
            outcome,
            ImportOutcome::Loaded {
                version: Some("1.26.4".to_string())
            }
        );
    }

    #[test]
    fn classify_ok_without_version() {
        let stdout = "{\"status\": \"ok\", \"version\": null}";
        let outcome = classify_output("tkinter", stdout, "", true);
        assert_eq!(outcome, ImportOutcome::Loaded { version: None });
    }

    #[test]
    fn classify_missing() {
        let outcome = classify_output(
            "scipy",
            "{\"status\": \"missing\", \"message\": \"No module named 'scipy'\"}",
            "",
            true,
        );
        assert_eq!(outcome, ImportOutcome::NotFound);
    }

    #[test]
    fn classify_error_carries_message() {
        let outcome = classify_output(
            "pandas",
            "{\"status\": \"error\", \"message\": \"numpy.dtype size changed\"}",
            "",
            true,
        );
        assert_eq!(
            outcome,
            ImportOutcome::Failed {
                message: "numpy.dtype size changed".to_string()
            }
        );
    }

    #[test]
    fn classify_uses_last_line_after_module_chatter() {
        let stdout = "loading plugins...\n\n{\"status\": \"ok\", \"version\": \"3.8.0\"}\n";
        let outcome = classify_output("matplotlib", stdout, "", true);
        assert!(outcome.is_loaded());
    }

    #[test]
    fn classify_garbage_is_failure_not_absence() {
        let outcome = classify_output("numpy", "hello world", "", true);
        assert!(matches!(outcome, ImportOutcome::Failed { .. }));
    }

    #[test]
    fn classify_empty_output_on_crash_uses_stderr() {
        let outcome = classify_output("numpy", "", "Traceback...\nSegmentation fault\n", false);
        assert_eq!(
            outcome,
            ImportOutcome::Failed {
                message: "Segmentation fault".to_string()
            }
        );
    }

    #[test]
    fn classify_empty_output_on_success_is_failure() {
        let outcome = classify_output("numpy", "", "", true);
        assert!(matches!(outcome, ImportOutcome::Failed { .. }));
    }

    #[test]
    fn import_script_handles_both_import_errors_and_other_exceptions() {
        assert!(IMPORT_SCRIPT.contains("except ImportError"));
        assert!(IMPORT_SCRIPT.contains("except Exception"));
        assert!(IMPORT_SCRIPT.contains("__version__"));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let result = resolve_tool_path("python3", &[temp.path().to_path_buf()]);
        assert!(result.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("python3"), "exit 0");
        create_fake_binary(&dir_b.join("python3"), "exit 0");

        let result = resolve_tool_path("python3", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("python3")));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("python3"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("python3"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("python3"), "exit 0");

        let result = resolve_tool_path("python3", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/python")));
    }

    #[cfg(unix)]
    #[test]
    fn python_probe_reads_interpreter_json() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        create_fake_binary(
            &python,
            r#"echo '{"status": "ok", "version": "2.2.1"}'"#,
        );

        let probe = PythonProbe::new(&python);
        assert_eq!(
            probe.import("pandas"),
            ImportOutcome::Loaded {
                version: Some("2.2.1".to_string())
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn python_probe_passes_module_name_as_argument() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        // $1 is -c, $2 the script, $3 the module
        create_fake_binary(
            &python,
            r#"if [ "$3" = "scipy" ]; then echo '{"status": "missing"}'; else echo '{"status": "ok"}'; fi"#,
        );

        let probe = PythonProbe::new(&python);
        assert_eq!(probe.import("scipy"), ImportOutcome::NotFound);
        assert!(probe.import("numpy").is_loaded());
    }

    #[test]
    fn python_probe_spawn_failure_is_failed_outcome() {
        let probe = PythonProbe::new("/nonexistent/bin/python3");
        let outcome = probe.import("numpy");
        match outcome {
            ImportOutcome::Failed { message } => {
                assert!(message.contains("/nonexistent/bin/python3"))
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn tk_patchlevel_reads_stdout() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        create_fake_binary(&python, "echo 8.6.13");

        let probe = PythonProbe::new(&python);
        assert_eq!(probe.tk_patchlevel("tkinter").unwrap(), "8.6.13");
    }

    #[cfg(unix)]
    #[test]
    fn tk_patchlevel_failure_reports_stderr() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        create_fake_binary(&python, "echo 'TclError: no display name' >&2; exit 1");

        let probe = PythonProbe::new(&python);
        let err = probe.tk_patchlevel("tkinter").unwrap_err();
        assert!(matches!(err, CheckError::TkUnavailable { .. }));
        assert!(err.to_string().contains("no display name"));
    }

    #[cfg(unix)]
    #[test]
    fn verify_accepts_working_interpreter() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        create_fake_binary(&python, "exit 0");

        assert!(PythonProbe::new(&python).verify().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn verify_rejects_dangling_shebang() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        fs::write(&python, "#!/nonexistent/interp\n").unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let err = PythonProbe::new(&python).verify().unwrap_err();
        assert!(matches!(err, CheckError::ProbeSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn verify_rejects_interpreter_that_exits_with_error() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        create_fake_binary(
            &python,
            "echo \"pyenv: version '3.12.1' is not installed\" >&2; exit 127",
        );

        let err = PythonProbe::new(&python).verify().unwrap_err();
        assert!(matches!(err, CheckError::InterpreterUnusable { .. }));
        assert!(err.to_string().contains("is not installed"));
    }

    #[test]
    fn verify_rejects_missing_interpreter() {
        let err = PythonProbe::new("/nonexistent/bin/python3")
            .verify()
            .unwrap_err();
        assert!(matches!(err, CheckError::ProbeSpawn { .. }));
    }
}
