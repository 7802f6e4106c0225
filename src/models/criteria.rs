use serde::{Deserialize, Serialize};

/// Criteria for the simple (text / city / country) filter
///
/// Empty strings and `None` are both wildcards, so a front end can pass the
/// raw contents of a text box or an unselected drop-down without translating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCriteria {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl SimpleCriteria {
    pub fn new(search_term: &str, city: &str, country: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            city: non_empty(city),
            country: non_empty(country),
        }
    }

    pub fn search(term: &str) -> Self {
        Self::new(term, "", "")
    }

    pub fn in_city(city: &str) -> Self {
        Self::new("", city, "")
    }

    pub fn in_country(country: &str) -> Self {
        Self::new("", "", country)
    }

    /// Active city, or `None` when unset or empty
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    /// Active country, or `None` when unset or empty
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }

    /// True when no dimension restricts the result
    pub fn is_wildcard(&self) -> bool {
        self.search_term.is_empty() && self.city().is_none() && self.country().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
