use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::command::{self, CommandOutput};
use crate::db_manager;
use crate::dump_cleaner::DumpCleaner;
use crate::error::PgDumpError;

/// How [`SchemaDumper::dump_to`] opens the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Truncate,
    Append,
}

/// Produces structure-only SQL dumps of a single PostgreSQL schema, cleaned
/// for use as a template when provisioning new tenants. Requires pg_dump.
///
/// The generated template DOES NOT contain:
/// * privilege statements (GRANT/REVOKE)
/// * tablespace assignments
/// * ownership information
/// * CREATE SCHEMA or search_path statements
/// * comments
/// * any table data
pub struct SchemaDumper {
    database: String,
    schema: String,
}

impl SchemaDumper {
    pub fn new<T: Into<String>, U: Into<String>>(database: T, schema: U) -> Self {
        SchemaDumper {
            database: database.into(),
            schema: schema.into(),
        }
    }

    /// Runs pg_dump once and returns the cleaned template. A non-zero exit
    /// becomes a [`PgDumpError`] carrying pg_dump's stderr verbatim, so a
    /// request for a schema that does not exist surfaces the tool's own
    /// "no matching schemas were found" message.
    pub fn dump(&self) -> Result<String> {
        let output = command::capture(&db_manager::pg_dump_path(), &self.pg_dump_args())?;

        return match output {
            CommandOutput::Success(dump) => Ok(DumpCleaner::new(dump).clean()),
            CommandOutput::Failure(stderr) => Err(PgDumpError::new(stderr).into()),
        };
    }

    /// Generates a dump and writes it into a file, truncating or appending
    /// depending on the mode.
    pub fn dump_to<P: AsRef<Path>>(&self, file: P, mode: WriteMode) -> Result<()> {
        let template = self.dump()?;

        return write_template(file, mode, &template);
    }

    fn pg_dump_args(&self) -> Vec<String> {
        return vec![
            String::from("--schema"),
            self.schema.clone(),
            String::from("--schema-only"),
            String::from("--no-privileges"),
            String::from("--no-tablespaces"),
            String::from("--no-owner"),
            String::from("--dbname"),
            self.database.clone(),
        ];
    }
}

fn write_template<P: AsRef<Path>>(file: P, mode: WriteMode, template: &str) -> Result<()> {
    let mut options = std::fs::OpenOptions::new();

    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.create(true).append(true),
    };

    let mut file = options.open(file)?;
    file.write_all(template.as_bytes())?;

    return Ok(());
}
