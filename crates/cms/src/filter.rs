//! Listing filters and pagination parameters.

use crate::model::Product;

/// The pseudo-category that disables category filtering.
pub const ALL_CATEGORIES: &str = "Todas";

pub const DEFAULT_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Map a category button label onto a filter; blank and `"Todas"` mean all.
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();
        if selection.is_empty() || selection == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(selection.to_string())
        }
    }

    /// The label this filter is selected under.
    pub fn as_selection(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}

/// Category plus search term: everything that identifies a filtered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductFilter {
    pub category: CategoryFilter,
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn new(category: &str, search: &str) -> Self {
        let search = search.trim();
        Self {
            category: CategoryFilter::from_selection(category),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    /// Category must match exactly; the search term must occur, ignoring case,
    /// in the name, the description or the long description text.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(&product.category) {
            return false;
        }

        let Some(term) = &self.search else {
            return true;
        };
        let term = term.to_lowercase();

        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
            || product
                .long_description_text()
                .is_some_and(|text| text.to_lowercase().contains(&term))
    }
}

/// A page request for a filtered listing. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub page: u32,
    pub limit: u32,
}

impl ProductQuery {
    pub fn new(filter: ProductFilter, page: u32, limit: u32) -> Self {
        Self {
            filter,
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn first_page(filter: ProductFilter) -> Self {
        Self::new(filter, 1, DEFAULT_PAGE_SIZE)
    }

    pub fn skip(&self) -> u32 {
        (self.page - 1) * self.limit
    }
}
