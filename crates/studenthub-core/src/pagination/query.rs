//! Search/filter state and its query-string form.

/// Filter value sentinel meaning "no filter".
const ALL: &str = "all";

/// Active filter of a list screen: nothing, one value, or several.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl Filter {
    /// Build a filter from raw values, dropping blanks and the `all` sentinel.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
            .collect();

        match values.len() {
            0 => Filter::None,
            1 => Filter::One(values.remove(0)),
            _ => Filter::Many(values),
        }
    }

    /// Effective values, with blanks and `all` removed.
    pub fn values(&self) -> Vec<&str> {
        let raw: Vec<&str> = match self {
            Filter::None => Vec::new(),
            Filter::One(value) => vec![value.as_str()],
            Filter::Many(values) => values.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

/// How a multi-valued filter is written into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEncoding {
    /// One pair, values joined by the separator (`category=a,b`).
    Joined(char),
    /// One pair per value (`type=a&type=b`).
    Repeated,
}

/// Name and encoding of an endpoint's filter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParam {
    pub name: &'static str,
    pub encoding: FilterEncoding,
}

impl FilterParam {
    pub const fn joined(name: &'static str) -> Self {
        Self {
            name,
            encoding: FilterEncoding::Joined(','),
        }
    }

    pub const fn repeated(name: &'static str) -> Self {
        Self {
            name,
            encoding: FilterEncoding::Repeated,
        }
    }
}

/// Screen-local search and filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub filter: Filter,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, filter: Filter) -> Self {
        Self {
            search: search.into(),
            filter,
        }
    }

    pub fn is_default(&self) -> bool {
        self.search.trim().is_empty() && self.filter.is_empty()
    }

    /// Whether both queries put the same parameters on the wire.
    pub fn is_equivalent(&self, other: &ListQuery) -> bool {
        self.search.trim() == other.search.trim() && self.filter.values() == other.filter.values()
    }

    /// Query pairs for `page`, in wire order: `page`, `search`, filter.
    ///
    /// Values are raw; percent-encoding is left to the HTTP layer.
    pub fn to_pairs(&self, page: u32, param: Option<FilterParam>) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_string(), page.to_string())];

        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_string(), search.to_string()));
        }

        let values = self.filter.values();
        match param {
            Some(param) if !values.is_empty() => match param.encoding {
                FilterEncoding::Joined(sep) => {
                    pairs.push((param.name.to_string(), values.join(sep.to_string().as_str())));
                }
                FilterEncoding::Repeated => {
                    pairs.extend(
                        values
                            .into_iter()
                            .map(|v| (param.name.to_string(), v.to_string())),
                    );
                }
            },
            _ => {}
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &ListQuery, page: u32, param: Option<FilterParam>) -> Vec<(String, String)> {
        query.to_pairs(page, param)
    }

    fn expected(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn page_only_by_default() {
        let query = ListQuery::default();
        assert_eq!(
            pairs(&query, 1, Some(FilterParam::joined("category"))),
            expected(&[("page", "1")])
        );
    }

    #[test]
    fn search_is_trimmed_and_kept_raw() {
        let query = ListQuery::new("  calc & stats ", Filter::None);
        assert_eq!(
            pairs(&query, 3, None),
            expected(&[("page", "3"), ("search", "calc & stats")])
        );
    }

    #[test]
    fn joined_filter() {
        let query = ListQuery::new("", Filter::from_values(["Books", "Tech"]));
        assert_eq!(
            pairs(&query, 1, Some(FilterParam::joined("category"))),
            expected(&[("page", "1"), ("category", "Books,Tech")])
        );
    }

    #[test]
    fn repeated_filter() {
        let query = ListQuery::new("", Filter::Many(vec!["study".into(), "life".into()]));
        assert_eq!(
            pairs(&query, 2, Some(FilterParam::repeated("type"))),
            expected(&[("page", "2"), ("type", "study"), ("type", "life")])
        );
    }

    #[test]
    fn all_sentinel_and_blanks_are_dropped() {
        assert_eq!(Filter::from_values(["All", " "]), Filter::None);
        assert_eq!(Filter::from_values(["all", "Books"]), Filter::One("Books".into()));
        assert!(Filter::One("ALL".into()).is_empty());

        let query = ListQuery::new("", Filter::One("all".into()));
        assert_eq!(query.to_pairs(1, Some(FilterParam::joined("category"))).len(), 1);
        assert!(query.is_default());
    }

    #[test]
    fn equivalence_ignores_representation() {
        let a = ListQuery::new("math ", Filter::One("Books".into()));
        let b = ListQuery::new("math", Filter::Many(vec!["Books".into()]));
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&ListQuery::default()));
    }

    #[test]
    fn filter_ignored_without_param() {
        let query = ListQuery::new("", Filter::One("Books".into()));
        assert_eq!(query.to_pairs(1, None).len(), 1);
    }
}
