//! Query assembly — one validated [`ListRequest`] in, a count/page statement pair out.
//!
//! Identifiers and values travel through separate channels:
//! - table, column and sort identifiers are `'static` literals from an
//!   [`EntityListing`] and are written into the SQL text;
//! - the search pattern, `LIMIT` and `OFFSET` are always bind values
//!   (`$1`, `$2`, ...).
//!
//! Both statements share the same `WHERE` predicate and the same leading
//! bind values, so `total` is always counted against the filter used for the
//! page.

use crate::{EntityListing, ListRequest};

/// A single bind value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

/// SQL text plus its positional bind values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// The statement pair issued for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// `SELECT COUNT(*) ...`, executed first.
    pub count: Statement,
    /// `SELECT <columns> ... LIMIT .. OFFSET ..`, executed only if the count succeeded.
    pub page: Statement,
}

/// Build the count and page statements for `request` against `entity`.
pub fn assemble(entity: &EntityListing, request: &ListRequest) -> ListQuery {
    let mut binds = Vec::new();
    let predicate = search_predicate(entity, &request.search, &mut binds);

    let count = Statement {
        sql: format!("SELECT COUNT(*) FROM {}{predicate}", entity.table),
        binds: binds.clone(),
    };

    let direction = request.sort_order.as_sql();
    let mut order_by = format!("{} {direction}", request.sort_by);
    if request.sort_by != entity.primary_key {
        order_by.push_str(&format!(", {} {direction}", entity.primary_key));
    }

    let limit_index = binds.len() + 1;
    let page_sql = format!(
        "SELECT {} FROM {}{predicate} ORDER BY {order_by} LIMIT ${limit_index} OFFSET ${}",
        entity.columns.join(", "),
        entity.table,
        limit_index + 1,
    );
    binds.push(BindValue::Int(i64::from(request.page_size)));
    binds.push(BindValue::Int(request.offset()));

    ListQuery {
        count,
        page: Statement { sql: page_sql, binds },
    }
}

/// Append the search pattern to `binds` and return the `WHERE` clause
/// (with leading space), or an empty string when there is nothing to filter.
fn search_predicate(entity: &EntityListing, search: &str, binds: &mut Vec<BindValue>) -> String {
    if search.is_empty() || entity.searchable.is_empty() {
        return String::new();
    }

    binds.push(BindValue::Text(contains_pattern(search)));
    let placeholder = binds.len();

    let clauses: Vec<String> = entity
        .searchable
        .iter()
        .map(|column| format!("{column} ILIKE ${placeholder}"))
        .collect();

    format!(" WHERE ({})", clauses.join(" OR "))
}

/// `%term%` with LIKE metacharacters escaped, so the term matches as a
/// literal substring. Postgres uses `\` as the default LIKE escape.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
