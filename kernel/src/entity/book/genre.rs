use std::fmt::{Display, Formatter};

use serde::Deserialize;
use vodca::{AsRefln, Fromln};

use crate::entity::Book;

pub const ALL_GENRES: &str = "all";

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookGenre(String);

impl BookGenre {
    pub fn new(genre: impl Into<String>) -> Self {
        Self(genre.into())
    }

    /// Exact comparison after lowercasing both sides.
    pub fn matches(&self, other: &BookGenre) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

/// Genre selection for inventory listings.
///
/// The literal `"all"` (case-sensitive) selects every book; any other value
/// selects books whose genre [matches](BookGenre::matches) it.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Only(BookGenre),
}

impl GenreFilter {
    pub fn accepts(&self, book: &Book) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => genre.matches(book.genre()),
        }
    }

    pub fn apply(&self, books: impl IntoIterator<Item = Book>) -> Vec<Book> {
        books.into_iter().filter(|book| self.accepts(book)).collect()
    }
}

impl From<String> for GenreFilter {
    fn from(value: String) -> Self {
        if value == ALL_GENRES {
            Self::All
        } else {
            Self::Only(BookGenre::new(value))
        }
    }
}

impl From<&str> for GenreFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl Display for GenreFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GenreFilter::All => write!(f, "{}", ALL_GENRES),
            GenreFilter::Only(genre) => write!(f, "{}", genre.as_ref()),
        }
    }
}
