mod author;
mod genre;
mod id;
mod inventory;
mod page_count;
mod title;

pub use self::{author::*, genre::*, id::*, inventory::*, page_count::*, title::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    genre: BookGenre,
    page_count: BookPageCount,
    in_inventory: InInventory,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        genre: BookGenre,
        page_count: BookPageCount,
        in_inventory: InInventory,
    ) -> Self {
        Self {
            id,
            title,
            author,
            genre,
            page_count,
            in_inventory,
        }
    }

    pub fn is_active(&self) -> bool {
        *self.in_inventory.as_ref()
    }

    pub fn change_genre(&mut self, genre: BookGenre) {
        self.genre = genre;
    }

    pub fn remove_from_inventory(&mut self) {
        self.in_inventory = InInventory::new(false);
    }
}

/// A book as supplied by a caller, before storage has assigned its id.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookDraft {
    title: BookTitle,
    author: BookAuthor,
    genre: BookGenre,
    page_count: BookPageCount,
}

impl BookDraft {
    pub fn new(
        title: BookTitle,
        author: BookAuthor,
        genre: BookGenre,
        page_count: BookPageCount,
    ) -> Self {
        Self {
            title,
            author,
            genre,
            page_count,
        }
    }

    /// Materializes the draft under a storage-assigned id. New books always
    /// enter the inventory.
    pub fn into_book(self, id: BookId) -> Book {
        Book::new(
            id,
            self.title,
            self.author,
            self.genre,
            self.page_count,
            InInventory::default(),
        )
    }
}
