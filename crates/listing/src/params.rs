//! Parameter validation — raw query-string values in, bounded [`ListRequest`] out.
//!
//! Rules:
//! 1. `page` that fails to parse or is below 1 becomes 1.
//! 2. `page_size` that fails to parse or falls outside `1..=100` becomes 10.
//! 3. `sort_order` is matched case-sensitively against `asc`/`desc`; anything
//!    else becomes `asc`.
//! 4. An empty `sort_by` becomes the entity default; a non-empty one must be
//!    in the entity allow-list or validation fails.
//! 5. `search` passes through verbatim; empty means "no filter".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EntityListing, ListError};

/// Page used when `page` is missing or invalid.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `page_size` is missing or invalid.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `ORDER BY` keyword for this direction.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => Self::Asc,
            Some("desc") => Self::Desc,
            _ => Self::default(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw parameters
// ---------------------------------------------------------------------------

/// List parameters exactly as they arrived on the query string.
///
/// Every field is an optional string so that extraction itself never fails;
/// all interpretation happens in [`ListParams::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// Collect parameters from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "page_size" => &mut params.page_size,
                "sort_by" => &mut params.sort_by,
                "sort_order" => &mut params.sort_order,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Validated request
// ---------------------------------------------------------------------------

/// A bounded, typed list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub page: u32,
    pub page_size: u32,
    /// Always one of the entity's allow-listed literals.
    pub sort_by: &'static str,
    pub sort_order: SortOrder,
    pub search: String,
}

impl ListRequest {
    /// Default request for `entity`: first page, default size and sort.
    pub fn first_page(entity: &EntityListing) -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: entity.default_sort,
            sort_order: SortOrder::default(),
            search: String::new(),
        }
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }
}

impl ListParams {
    /// Validate against `entity`'s allow-list.
    ///
    /// # Errors
    /// - [`ListError::UnknownSortField`] if `sort_by` is non-empty and not
    ///   allow-listed.
    pub fn validate(&self, entity: &EntityListing) -> Result<ListRequest, ListError> {
        let page = self
            .page
            .as_deref()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(DEFAULT_PAGE);

        let page_size = self
            .page_size
            .as_deref()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let sort_by = match self.sort_by.as_deref() {
            None | Some("") => entity.default_sort,
            Some(requested) => entity
                .sort_column(requested)
                .ok_or_else(|| ListError::UnknownSortField(requested.to_owned()))?,
        };

        Ok(ListRequest {
            page,
            page_size,
            sort_by,
            sort_order: SortOrder::parse_or_default(self.sort_order.as_deref()),
            search: self.search.clone().unwrap_or_default(),
        })
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PEOPLE: EntityListing = EntityListing {
        table: "people",
        columns: &["id", "name", "created_at"],
        primary_key: "id",
        default_sort: "created_at",
        sortable: &["id", "name", "created_at"],
        searchable: &["name"],
    };

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        ListParams::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let p = params(&[
            ("page", "2"),
            ("page", "3"),
            ("sort_order", "desc"),
            ("sort_order", "DESC"),
            ("page_size", "5"),
            ("page_size", "abc"),
        ]);
        assert_eq!(p.page.as_deref(), Some("2"));
        assert_eq!(p.page_size.as_deref(), Some("5"));
        assert_eq!(p.sort_order.as_deref(), Some("desc"));

        let req = p.validate(&PEOPLE).unwrap();
        assert_eq!((req.page, req.page_size, req.sort_order), (2, 5, SortOrder::Desc));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let p = params(&[("department_id", "4"), ("search", "ann")]);
        assert_eq!(p.search.as_deref(), Some("ann"));
        assert_eq!(p.page, None);
    }

    #[test]
    fn missing_parameters_yield_defaults() {
        let req = ListParams::default().validate(&PEOPLE).unwrap();
        assert_eq!(req, ListRequest::first_page(&PEOPLE));
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 10);
        assert_eq!(req.sort_by, "created_at");
        assert_eq!(req.sort_order, SortOrder::Asc);
        assert_eq!(req.search, "");
    }

    #[test]
    fn valid_parameters_are_kept() {
        let req = params(&[
            ("page", "3"),
            ("page_size", "100"),
            ("sort_by", "name"),
            ("sort_order", "desc"),
            ("search", "smith"),
        ])
        .validate(&PEOPLE)
        .unwrap();

        assert_eq!(req.page, 3);
        assert_eq!(req.page_size, 100);
        assert_eq!(req.sort_by, "name");
        assert_eq!(req.sort_order, SortOrder::Desc);
        assert_eq!(req.search, "smith");
        assert_eq!(req.offset(), 200);
    }

    #[test]
    fn empty_sort_by_uses_default_column() {
        let req = params(&[("sort_by", "")]).validate(&PEOPLE).unwrap();
        assert_eq!(req.sort_by, "created_at");
    }

    #[test]
    fn unknown_sort_by_is_rejected() {
        let err = params(&[("sort_by", "salary")]).validate(&PEOPLE).unwrap_err();
        assert_eq!(err, ListError::UnknownSortField("salary".into()));
    }

    #[test]
    fn sort_order_is_case_sensitive() {
        let req = params(&[("sort_order", "DESC")]).validate(&PEOPLE).unwrap();
        assert_eq!(req.sort_order, SortOrder::Asc);
    }

    #[test]
    fn page_size_boundaries() {
        let size = |raw: &str| params(&[("page_size", raw)]).validate(&PEOPLE).unwrap().page_size;
        assert_eq!(size("1"), 1);
        assert_eq!(size("100"), 100);
        assert_eq!(size("0"), 10);
        assert_eq!(size("101"), 10);
        assert_eq!(size("-5"), 10);
        assert_eq!(size("ten"), 10);
    }

    #[test]
    fn search_is_passed_through_verbatim() {
        let raw = "  O'Brien%_ ";
        let req = params(&[("search", raw)]).validate(&PEOPLE).unwrap();
        assert_eq!(req.search, raw);
    }

    proptest! {
        #[test]
        fn out_of_range_page_size_is_ten(size in prop_oneof![i64::MIN..1i64, 101i64..i64::MAX]) {
            let req = params(&[("page_size", size.to_string().as_str())]).validate(&PEOPLE).unwrap();
            prop_assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
        }

        #[test]
        fn non_numeric_page_size_is_ten(raw in "[^0-9]*") {
            let req = params(&[("page_size", raw.as_str())]).validate(&PEOPLE).unwrap();
            prop_assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
        }

        #[test]
        fn in_range_page_size_is_kept(size in 1u32..=100) {
            let req = params(&[("page_size", size.to_string().as_str())]).validate(&PEOPLE).unwrap();
            prop_assert_eq!(req.page_size, size);
        }

        #[test]
        fn page_below_one_is_one(page in i64::MIN..1i64) {
            let req = params(&[("page", page.to_string().as_str())]).validate(&PEOPLE).unwrap();
            prop_assert_eq!(req.page, DEFAULT_PAGE);
        }

        #[test]
        fn non_numeric_page_is_one(raw in "[^0-9]*") {
            let req = params(&[("page", raw.as_str())]).validate(&PEOPLE).unwrap();
            prop_assert_eq!(req.page, DEFAULT_PAGE);
        }

        #[test]
        fn unrecognized_sort_by_never_becomes_the_sort_column(raw in ".+") {
            match params(&[("sort_by", raw.as_str())]).validate(&PEOPLE) {
                Ok(req) => prop_assert!(PEOPLE.sortable.contains(&req.sort_by) && req.sort_by == raw),
                Err(ListError::UnknownSortField(field)) => prop_assert_eq!(field, raw),
            }
        }
    }
}
