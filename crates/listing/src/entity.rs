//! Static description of a listable table.

/// Everything the assembler needs to know about one table.
///
/// All identifiers are `'static` literals owned by the repository that
/// declares the listing, so only these strings can ever be spliced into SQL
/// text.
#[derive(Debug, Clone, Copy)]
pub struct EntityListing {
    pub table: &'static str,
    /// Columns selected by the page statement, in row-struct order.
    pub columns: &'static [&'static str],
    /// Appended to `ORDER BY` as a tie-break for deterministic paging.
    pub primary_key: &'static str,
    /// Used when the client sends no `sort_by`. Must be in `sortable`.
    pub default_sort: &'static str,
    /// The sort allow-list.
    pub sortable: &'static [&'static str],
    /// Columns matched case-insensitively by `search`.
    pub searchable: &'static [&'static str],
}

impl EntityListing {
    /// Look `name` up in the allow-list and hand back the listing's own
    /// literal, never the caller's string.
    pub fn sort_column(&self, name: &str) -> Option<&'static str> {
        self.sortable.iter().copied().find(|column| *column == name)
    }
}
