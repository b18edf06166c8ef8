//! Shared testing utilities for agent-bootstrap CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::io::{Cursor, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Closed local port: connections are refused immediately.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Files a usable source tree ships with.
pub const SOURCE_FILES: &[(&str, &str)] = &[
    ("me.py", "echo '=== SYSTEM TEST ==='\n"),
    ("daemon.py", "echo started > daemon-started.txt\n"),
    ("config.example.py", "VOICE = 'default'\n"),
];

/// Testing harness providing an isolated environment for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI is invoked from.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default install target used by the tests.
    pub fn target(&self) -> PathBuf {
        self.work_dir.join("agent")
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("agent-bootstrap").expect("Failed to locate agent-bootstrap binary");
        cmd.current_dir(&self.work_dir).env_remove("AGENT_BOOTSTRAP_LOG");
        cmd
    }

    /// Shell script standing in for Python: answers `--version`, logs pip calls,
    /// and runs scripts with `sh`.
    pub fn fake_interpreter(&self, version: &str) -> PathBuf {
        let bin = self.root().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join("fake-python");
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then echo \"Python {version}\"; exit 0; fi\n\
             if [ \"$1\" = \"-m\" ]; then echo \"$@\" >> \"{log}\"; exit 0; fi\n\
             exec /bin/sh \"$@\"\n",
            version = version,
            log = self.pip_log().display()
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Arguments the fake interpreter received for `-m pip ...`.
    pub fn pip_log(&self) -> PathBuf {
        self.root().join("pip.log")
    }

    /// Create a local git repository holding `files` to act as the clone remote.
    pub fn git_remote(&self, files: &[(&str, &str)]) -> PathBuf {
        let remote = self.root().join("remote");
        fs::create_dir_all(&remote).unwrap();
        git(&remote, &["init", "--initial-branch=main"]);
        self.commit_to_remote(files);
        remote
    }

    /// Add files to the remote created by [`git_remote`](Self::git_remote).
    pub fn commit_to_remote(&self, files: &[(&str, &str)]) {
        let remote = self.root().join("remote");
        for (name, content) in files {
            fs::write(remote.join(name), content).unwrap();
        }
        git(&remote, &["add", "."]);
        git(
            &remote,
            &[
                "-c",
                "user.name=Test User",
                "-c",
                "user.email=test@example.com",
                "commit",
                "-m",
                "update",
            ],
        );
    }

    /// Write an installer config override and return its path.
    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.root().join("bootstrap.toml");
        fs::write(&path, body).unwrap();
        path
    }

    /// Config pointing every collaborator at local fixtures.
    pub fn config_for(&self, interpreter: &Path, repo_url: &str, archive_url: &str) -> PathBuf {
        self.write_config(&format!(
            r#"
default_dir = "agent"

[source]
repo_url = "{repo_url}"
archive_url = "{archive_url}"

[runtime]
interpreter = "{interpreter}"
smoke_timeout_secs = 5

[service]
url = "{UNREACHABLE}/api/tags"
timeout_secs = 1
"#,
            interpreter = interpreter.display(),
        ))
    }

    /// Config for a host without git.
    pub fn config_without_git(&self, interpreter: &Path, archive_url: &str) -> PathBuf {
        let path = self.config_for(interpreter, "https://example.invalid/repo", archive_url);
        let mut body = fs::read_to_string(&path).unwrap();
        body = body.replace("[source]\n", "[source]\ngit_program = \"no-such-git-binary\"\n");
        fs::write(&path, body).unwrap();
        path
    }

    pub fn assert_layout_exists(&self) {
        let target = self.target();
        for dir in ["vault", "vault/Daemon Thoughts", "outbox", "memory", "snapshots"] {
            assert!(target.join(dir).is_dir(), "{} should exist", dir);
        }
    }
}

/// Zip snapshot shaped like a GitHub branch archive.
pub fn snapshot_zip(root: &str, files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.add_directory(format!("{}/", root), SimpleFileOptions::default()).unwrap();
    for (name, content) in files {
        writer.start_file(format!("{}/{}", root, name), SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn git(dir: &Path, args: &[&str]) {
    let output = process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
