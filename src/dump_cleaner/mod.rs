use std::sync::OnceLock;

use regex::Regex;

type CleaningRule = fn(&str) -> String;

// Order matters: comment removal runs first so statement rules never have to
// look through comment lines, and blank-line collapsing runs last so it
// absorbs the gaps every other rule leaves behind.
const CLEANING_RULES: &[CleaningRule] = &[
    remove_comments,
    remove_owner_statements,
    remove_privilege_statements,
    remove_tablespace_statements,
    remove_schema_statements,
    collapse_blank_lines,
];

/// Rewrites raw pg_dump output into a reusable schema template by stripping
/// everything that ties the dump to one particular database: comments,
/// ownership, privileges, tablespace defaults and schema/search_path
/// management. Structural DDL passes through untouched and in order.
///
/// Cleaning cannot fail and is idempotent. It never connects to anything; it
/// is a plain text transformation.
pub struct DumpCleaner {
    sql: String,
}

impl DumpCleaner {
    pub fn new<T: Into<String>>(sql: T) -> Self {
        DumpCleaner { sql: sql.into() }
    }

    pub fn clean(self) -> String {
        return CLEANING_RULES
            .iter()
            .fold(self.sql, |sql, rule| rule(&sql));
    }
}

/// Drops every line whose first non-whitespace content is the SQL line
/// comment marker. The whole line goes, newline included.
fn remove_comments(sql: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*--.*\n?").expect("The comment pattern should always compile")
    });

    re.replace_all(sql, "").into_owned()
}

/// Drops statements that assign object ownership, from the statement's first
/// line through its terminating semicolon. pg_dump never puts a semicolon
/// inside these statements, so `[^;]*` finds the exact boundary even when the
/// statement spans lines. `OWNED BY` sequence linkage is structural and is
/// left alone.
fn remove_owner_statements(sql: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?m)^[^;]*OWNER TO[^;]*;[ \t]*\n?")
            .expect("The ownership pattern should always compile")
    });

    re.replace_all(sql, "").into_owned()
}

fn remove_privilege_statements(sql: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?m)^(?:GRANT|REVOKE)\b[^;]*;[ \t]*\n?")
            .expect("The privilege pattern should always compile")
    });

    re.replace_all(sql, "").into_owned()
}

fn remove_tablespace_statements(sql: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?m)^SET default_tablespace\b[^;]*;[ \t]*\n?")
            .expect("The tablespace pattern should always compile")
    });

    re.replace_all(sql, "").into_owned()
}

/// Drops CREATE SCHEMA and search_path statements. The template is replayed
/// into a schema the caller has already created and targeted, so both are
/// redundant there. Covers the plain `SET search_path` form and the
/// `set_config('search_path', ...)` form newer pg_dump versions emit.
fn remove_schema_statements(sql: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r"(?m)^(?:CREATE SCHEMA\b|SET search_path\b|SELECT pg_catalog\.set_config\('search_path')[^;]*;[ \t]*\n?",
        )
        .expect("The schema management pattern should always compile")
    });

    re.replace_all(sql, "").into_owned()
}

/// Collapses the blank lines the removals above leave behind (and any the
/// dump already contained) so the template has no empty line at all.
fn collapse_blank_lines(sql: &str) -> String {
    static WHITESPACE_LINE_RE: OnceLock<Regex> = OnceLock::new();
    static LINE_BREAK_RE: OnceLock<Regex> = OnceLock::new();

    let whitespace_line_re = WHITESPACE_LINE_RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]+$").expect("The whitespace line pattern should always compile")
    });
    let line_break_re = LINE_BREAK_RE
        .get_or_init(|| Regex::new(r"\n{2,}").expect("The line break pattern should always compile"));

    let sql = whitespace_line_re.replace_all(sql, "");
    let sql = line_break_re.replace_all(&sql, "\n");

    sql.trim_start_matches('\n').to_string()
}
