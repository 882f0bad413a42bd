//! Text rewrites applied to dump output
//!
//! Both rewrites are plain string transformations so they can be tested
//! without a database.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Table option left behind by whatever rows the source database held
static AUTO_INCREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+AUTO_INCREMENT=[0-9]+").expect("AUTO_INCREMENT pattern is valid")
});

const ROW_SEPARATOR: &str = "),(";
const ROW_SEPARATOR_SPLIT: &str = "),\n    (";
const VALUES_OPEN: &str = " VALUES (";
const VALUES_OPEN_SPLIT: &str = " VALUES \n    (";

/// Remove `AUTO_INCREMENT=<n>` table options (and the whitespace before them)
///
/// Returns the rewritten text and the number of counters removed. Every other
/// byte is preserved, and running it twice changes nothing the second time.
///
/// ```rust
/// use schemadump::schema::strip_auto_increment;
///
/// let (sql, removed) =
///     strip_auto_increment(") ENGINE=InnoDB AUTO_INCREMENT=42 DEFAULT CHARSET=utf8;");
/// assert_eq!(sql, ") ENGINE=InnoDB DEFAULT CHARSET=utf8;");
/// assert_eq!(removed, 1);
/// ```
pub fn strip_auto_increment(sql: &str) -> (Cow<'_, str>, usize) {
    let removed = AUTO_INCREMENT.find_iter(sql).count();
    if removed == 0 {
        return (Cow::Borrowed(sql), 0);
    }
    (AUTO_INCREMENT.replace_all(sql, ""), removed)
}

/// Put every row of a compact extended INSERT on its own indented line
///
/// ```rust
/// use schemadump::schema::format_bookkeeping_rows;
///
/// assert_eq!(
///     format_bookkeeping_rows("INSERT INTO t VALUES (1,'a'),(2,'b');"),
///     "INSERT INTO t VALUES \n    (1,'a'),\n    (2,'b');"
/// );
/// ```
pub fn format_bookkeeping_rows(insert: &str) -> String {
    insert
        .replace(ROW_SEPARATOR, ROW_SEPARATOR_SPLIT)
        .replace(VALUES_OPEN, VALUES_OPEN_SPLIT)
}

/// Number of row tuples in compact (unformatted) INSERT output
///
/// Counts top-level parentheses, skipping anything inside quoted strings or
/// identifiers, so a value such as `'a),(b'` is still one row.
///
/// ```rust
/// use schemadump::schema::count_rows;
///
/// assert_eq!(count_rows("INSERT INTO t VALUES (1,'a),(b'),(2,'c');"), 2);
/// ```
pub fn count_rows(insert: &str) -> usize {
    let mut rows = 0;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in insert.chars() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' => {
                if depth == 0 {
                    rows += 1;
                }
                depth += 1;
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    rows
}
