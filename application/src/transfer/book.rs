use kernel::prelude::entity::{Book, DestructBook, GenreFilter};

/// List projection of a book.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookSummaryDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl From<Book> for BookSummaryDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            genre,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}

/// Full projection of a book; the inventory flag is never exposed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDetailDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub page_count: i32,
}

impl From<Book> for BookDetailDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            genre,
            page_count,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            page_count: page_count.into(),
        }
    }
}

#[derive(Debug)]
pub struct GetAllBookDto {
    pub genre: GenreFilter,
}

#[derive(Debug)]
pub struct GetBookDto {
    pub id: i64,
}

#[derive(Debug)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub page_count: i32,
}

#[derive(Debug)]
pub struct UpdateBookGenreDto {
    pub id: i64,
    pub genre: String,
}

#[derive(Debug)]
pub struct RemoveBookDto {
    pub id: i64,
}
