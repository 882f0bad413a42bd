//! Common test utilities for schemadump integration tests
//!
//! Provides a scripted process runner standing in for `mysqldump`/`mysql`,
//! a recording console and temp-dir fixtures.

#![allow(dead_code)]

use schemadump::{
    CommandKind, CommandLine, ConnectionParams, Console, DumpConfig, Error, ProcessRunner,
    Result, SchemaManager,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Dump Fixtures
// =============================================================================

/// What `mysqldump --no-data --routines` prints for a small Laravel-style app
pub const SCHEMA_SQL: &str = "\
CREATE TABLE `migrations` (
  `id` int unsigned NOT NULL AUTO_INCREMENT,
  `migration` varchar(255) NOT NULL,
  `batch` int NOT NULL,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB AUTO_INCREMENT=4 DEFAULT CHARSET=utf8mb4;
CREATE TABLE `users` (
  `id` bigint unsigned NOT NULL AUTO_INCREMENT,
  `email` varchar(255) NOT NULL,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB AUTO_INCREMENT=1289 DEFAULT CHARSET=utf8mb4;
";

/// `SCHEMA_SQL` after normalization
pub const NORMALIZED_SCHEMA_SQL: &str = "\
CREATE TABLE `migrations` (
  `id` int unsigned NOT NULL AUTO_INCREMENT,
  `migration` varchar(255) NOT NULL,
  `batch` int NOT NULL,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
CREATE TABLE `users` (
  `id` bigint unsigned NOT NULL AUTO_INCREMENT,
  `email` varchar(255) NOT NULL,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
";

/// What `mysqldump --tables migrations --no-create-info --compact` prints
pub const MIGRATIONS_SQL: &str = "INSERT INTO `migrations` VALUES \
(1,'2014_10_12_000000_create_users_table',1),\
(2,'2019_08_19_000000_create_failed_jobs_table',1),\
(3,'2024_01_01_000000_add_email_index',2);\n";

/// `MIGRATIONS_SQL` one row per line
pub const FORMATTED_MIGRATIONS_SQL: &str = "INSERT INTO `migrations` VALUES \n    \
(1,'2014_10_12_000000_create_users_table',1),\n    \
(2,'2019_08_19_000000_create_failed_jobs_table',1),\n    \
(3,'2024_01_01_000000_add_email_index',2);\n";

pub fn expected_artifact() -> String {
    format!("{NORMALIZED_SCHEMA_SQL}\n{FORMATTED_MIGRATIONS_SQL}")
}

pub fn test_connection() -> ConnectionParams {
    ConnectionParams::new("127.0.0.1", "3306", "root", "s3cret", "shop")
}

// =============================================================================
// Scripted Runner
// =============================================================================

/// Emulates the dump and restore utilities and records every invocation
pub struct ScriptedRunner {
    pub schema_sql: String,
    pub data_sql: String,
    pub fail_on: Option<CommandKind>,
    /// Skip writing the `--result-file` (a utility that "succeeds" without output)
    pub skip_result_file: bool,
    /// Unix mode the result file is given after it is written
    pub result_mode: Option<u32>,
    calls: RefCell<Vec<CommandLine>>,
    restored: RefCell<Option<String>>,
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self {
            schema_sql: SCHEMA_SQL.to_string(),
            data_sql: MIGRATIONS_SQL.to_string(),
            fail_on: None,
            skip_result_file: false,
            result_mode: None,
            calls: RefCell::new(Vec::new()),
            restored: RefCell::new(None),
        }
    }
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(kind: CommandKind) -> Self {
        Self {
            fail_on: Some(kind),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls.borrow().clone()
    }

    pub fn call_kinds(&self) -> Vec<CommandKind> {
        self.calls.borrow().iter().map(CommandLine::kind).collect()
    }

    /// Contents fed to the restore utility, if it ran
    pub fn restored(&self) -> Option<String> {
        self.restored.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, command: &CommandLine) -> Result<String> {
        self.calls.borrow_mut().push(command.clone());

        if self.fail_on == Some(command.kind()) {
            return Err(Error::ProcessFailed {
                command: command.to_string(),
                code: Some(2),
                stderr: "Got error: 1045: Access denied for user 'root'@'localhost'".into(),
            });
        }

        match command.kind() {
            CommandKind::SchemaDump => {
                if !self.skip_result_file {
                    let path = command
                        .flag_value("--result-file")
                        .expect("schema dump writes to a result file");
                    std::fs::write(path, &self.schema_sql).expect("write result file");
                    if let Some(mode) = self.result_mode {
                        set_mode(Path::new(path), mode);
                    }
                }
                Ok(String::new())
            }
            CommandKind::DataDump => Ok(self.data_sql.clone()),
            CommandKind::Restore => {
                let input = command.stdin_path().expect("restore reads from a file");
                match std::fs::read_to_string(input) {
                    Ok(sql) => {
                        *self.restored.borrow_mut() = Some(sql);
                        Ok(String::new())
                    }
                    // What the shell reports when the `<` redirection target is missing
                    Err(e) => Err(Error::ProcessFailed {
                        command: command.to_string(),
                        code: Some(1),
                        stderr: format!("sh: {}: {e}", input.display()),
                    }),
                }
            }
        }
    }
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).expect("chmod");
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) {}

// =============================================================================
// Test Fixtures
// =============================================================================

/// Temp schema directory plus a manager wired to a [`ScriptedRunner`]
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub manager: SchemaManager<ScriptedRunner>,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_runner(ScriptedRunner::new())
    }

    pub fn with_runner(runner: ScriptedRunner) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = DumpConfig::builder()
            .schema_dir(temp_dir.path().join("database"))
            .build();
        let manager = SchemaManager::with_runner(config, test_connection(), runner)
            .expect("Failed to create manager");

        Self { temp_dir, manager }
    }

    /// Default artifact path (`<tmp>/database/schema.sql`)
    pub fn artifact_path(&self) -> PathBuf {
        self.manager.config().artifact_path()
    }

    pub fn runner(&self) -> &ScriptedRunner {
        self.manager.runner()
    }

    /// Write an artifact by hand so load tests don't depend on dump
    pub fn write_artifact(&self, contents: &str) -> PathBuf {
        let path = self.artifact_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Recording Console
// =============================================================================

/// Console that records output and answers every question the same way
pub struct RecordingConsole {
    answer: bool,
    messages: RefCell<Vec<String>>,
    questions: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            messages: RefCell::new(Vec::new()),
            questions: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Console for RecordingConsole {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, question: &str) -> bool {
        self.questions.borrow_mut().push(question.to_string());
        self.answer
    }
}

/// Route `log` output to the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
