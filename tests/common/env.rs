//! Test environment builder for isolated vendorsync runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{BUILTIN_SOURCES, DOM_READY_SOURCE};

/// Result of running the vendorsync binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory with a fake `node_modules/`.
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run vendorsync from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run vendorsync from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("RUST_LOG")
            .env_remove("RUST_BACKTRACE")
            .env_remove("RUST_LIB_BACKTRACE")
            .env_remove("VENDORSYNC_JOBS")
            .env_remove("VENDORSYNC_OUTPUT_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute vendorsync");
        output_to_result(output)
    }

    /// Read a project file as bytes
    pub fn read_bytes(&self, relative_path: &str) -> Vec<u8> {
        std::fs::read(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Read a project file as a string
    pub fn read(&self, relative_path: &str) -> String {
        String::from_utf8(self.read_bytes(relative_path)).expect("utf-8 file")
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Remove a project file
    pub fn remove_file(&self, relative_path: &str) {
        std::fs::remove_file(self.project_path(relative_path)).expect("Failed to remove file");
    }

    /// Name -> content of every file directly under `relative_dir`
    pub fn snapshot_dir(&self, relative_dir: &str) -> BTreeMap<String, Vec<u8>> {
        snapshot(&self.project_path(relative_dir))
    }
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            let entry = entry.expect("dir entry");
            (
                entry.file_name().to_string_lossy().to_string(),
                std::fs::read(entry.path()).expect("Failed to read file"),
            )
        })
        .collect()
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    builtin_fixtures: bool,
    files: Vec<(String, String)>,
    dirs: Vec<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            builtin_fixtures: false,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Lay out every source of the built-in table plus `js/` and `assets/`
    pub fn with_builtin_fixtures(mut self) -> Self {
        self.builtin_fixtures = true;
        self
    }

    pub fn with_file(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    pub fn with_dir(mut self, relative_path: &str) -> Self {
        self.dirs.push(relative_path.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_vendorsync")),
        };

        if self.builtin_fixtures {
            for (source, _) in BUILTIN_SOURCES {
                env.write_file(source, &fixture_content(source));
            }
            env.write_file(DOM_READY_SOURCE, &fixture_content(DOM_READY_SOURCE));
            std::fs::create_dir_all(env.project_path("js")).expect("js dir");
            std::fs::create_dir_all(env.project_path("assets")).expect("assets dir");
        }

        for dir in &self.dirs {
            std::fs::create_dir_all(env.project_path(dir)).expect("Failed to create dir");
        }
        for (path, content) in &self.files {
            env.write_file(path, content);
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic, per-file fixture content
pub fn fixture_content(source: &str) -> String {
    format!("/* {} */\nmodule.exports = {:?};\n", source, source)
}
