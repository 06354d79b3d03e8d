pub mod command;
pub mod db_manager;
pub mod dump_cleaner;
pub mod error;
pub mod schema_dumper;

pub use dump_cleaner::DumpCleaner;
pub use error::PgDumpError;
pub use schema_dumper::{SchemaDumper, WriteMode};
