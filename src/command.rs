//! Command lines for the external dump and restore utilities
//!
//! Everything here is pure: building a [`CommandLine`] never touches the
//! filesystem or spawns anything. The structured form is kept so that a runner
//! can choose between a shell line ([`CommandLine::to_shell`]) and an argument
//! vector without callers noticing.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{ConnectionParams, DumpConfig};
use crate::driver::{Driver, DriverRegistry};
use crate::error::Result;

const PASSWORD_FLAG: &str = "--password=";
const MASK: &str = "*****";

/// What a command line is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Structure-only dump written straight to the artifact
    SchemaDump,
    /// Data-only dump of the bookkeeping table, captured from stdout
    DataDump,
    /// Replay of the artifact into the target database
    Restore,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandKind::SchemaDump => "schema dump",
            CommandKind::DataDump => "bookkeeping data dump",
            CommandKind::Restore => "restore",
        })
    }
}

/// A single external invocation
///
/// `Display` masks the password; use [`CommandLine::to_shell`] for the real line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    kind: CommandKind,
    program: String,
    args: Vec<String>,
    stdin: Option<PathBuf>,
}

impl CommandLine {
    fn new(kind: CommandKind, program: impl Into<String>) -> Self {
        Self {
            kind,
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn stdin(mut self, path: &Path) -> Self {
        self.stdin = Some(path.to_path_buf());
        self
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// File fed to the program's standard input, if any
    pub fn stdin_path(&self) -> Option<&Path> {
        self.stdin.as_deref()
    }

    /// Value of a `--flag=value` argument
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        let prefix = format!("{flag}=");
        self.args
            .iter()
            .find_map(|a| a.strip_prefix(prefix.as_str()))
    }

    /// Render the line handed to the shell
    ///
    /// Arguments are joined with single spaces and are not quoted.
    pub fn to_shell(&self) -> String {
        self.render(false)
    }

    fn render(&self, masked: bool) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if masked && arg.starts_with(PASSWORD_FLAG) {
                line.push_str(PASSWORD_FLAG);
                line.push_str(MASK);
            } else {
                line.push_str(arg);
            }
        }
        if let Some(input) = &self.stdin {
            line.push_str(" < ");
            line.push_str(&input.display().to_string());
        }
        line
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

/// Builds dump and restore command lines for one driver
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    driver: Driver,
    dump_program: String,
    restore_program: String,
    bookkeeping_table: String,
}

impl CommandBuilder {
    /// Create a builder for an already resolved driver
    pub fn new(driver: Driver, config: &DumpConfig) -> Self {
        Self {
            driver,
            dump_program: config.dump_program_for(driver),
            restore_program: config.restore_program_for(driver),
            bookkeeping_table: config.bookkeeping_table.clone(),
        }
    }

    /// Resolve a driver name and create a builder for it
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDriver`](crate::Error::UnsupportedDriver) if the
    /// name is not a supported driver.
    pub fn for_driver(name: &str, config: &DumpConfig) -> Result<Self> {
        let driver = DriverRegistry::default().resolve(name)?;
        Ok(Self::new(driver, config))
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }

    /// Structure-only dump (with routines) written directly to `output`
    pub fn schema_dump(&self, connection: &ConnectionParams, output: &Path) -> CommandLine {
        match self.driver {
            Driver::MySql => self.mysql_base_dump(CommandKind::SchemaDump, connection).args([
                "--routines".to_string(),
                format!("--result-file={}", output.display()),
                "--no-data".to_string(),
            ]),
        }
    }

    /// Compact data-only dump of the bookkeeping table, written to stdout
    pub fn bookkeeping_data_dump(&self, connection: &ConnectionParams) -> CommandLine {
        match self.driver {
            Driver::MySql => self
                .mysql_base_dump(CommandKind::DataDump, connection)
                .args([
                    "--tables",
                    self.bookkeeping_table.as_str(),
                    "--no-create-info",
                    "--skip-routines",
                    "--compact",
                ]),
        }
    }

    /// Replay `input` into the connection's database
    pub fn restore(&self, connection: &ConnectionParams, input: &Path) -> CommandLine {
        match self.driver {
            Driver::MySql => CommandLine::new(CommandKind::Restore, &self.restore_program)
                .args(mysql_connection_args(connection))
                .arg(format!("--database={}", connection.database))
                .stdin(input),
        }
    }

    fn mysql_base_dump(&self, kind: CommandKind, connection: &ConnectionParams) -> CommandLine {
        CommandLine::new(kind, &self.dump_program)
            .args([
                "--set-gtid-purged=OFF",
                "--skip-add-drop-table",
                "--skip-add-locks",
                "--skip-comments",
                "--skip-set-charset",
                "--tz-utc",
            ])
            .args(mysql_connection_args(connection))
            .arg(connection.database.as_str())
    }
}

fn mysql_connection_args(connection: &ConnectionParams) -> [String; 4] {
    [
        format!("--host={}", connection.host),
        format!("--port={}", connection.port),
        format!("--user={}", connection.username),
        format!("{PASSWORD_FLAG}{}", connection.password),
    ]
}
