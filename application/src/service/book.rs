use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    BookAuthor, BookDraft, BookGenre, BookId, BookPageCount, BookTitle,
};
use kernel::KernelError;

use crate::transfer::{
    BookDetailDto, BookSummaryDto, CreateBookDto, GetAllBookDto, GetBookDto, RemoveBookDto,
    UpdateBookGenreDto,
};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookSummaryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self.book_query().find_in_inventory(&mut connection).await?;
        connection.commit().await?;

        Ok(dto
            .genre
            .apply(books)
            .into_iter()
            .map(BookSummaryDto::from)
            .collect())
    }

    async fn get_book(
        &self,
        dto: GetBookDto,
    ) -> error_stack::Result<Option<BookDetailDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_in_inventory_by_id(&mut connection, &id)
            .await?;
        connection.commit().await?;

        Ok(book.map(BookDetailDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(
        &self,
        dto: CreateBookDto,
    ) -> error_stack::Result<BookDetailDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let draft = BookDraft::new(
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            BookGenre::new(dto.genre),
            BookPageCount::new(dto.page_count),
        );
        let book = self.book_modifier().create(&mut connection, &draft).await?;
        connection.commit().await?;

        tracing::info!(book_id = *book.id().as_ref(), "book added to inventory");
        Ok(BookDetailDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookGenreService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn update_book_genre(
        &self,
        dto: UpdateBookGenreDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let Some(mut book) = self
            .book_query()
            .find_in_inventory_by_id(&mut connection, &id)
            .await?
        else {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("no book in inventory with id {}", dto.id)));
        };

        book.change_genre(BookGenre::new(dto.genre));
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        tracing::info!(book_id = dto.id, "book genre updated");
        Ok(())
    }
}

impl<T> UpdateBookGenreService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait RemoveBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    /// Takes the book out of the inventory. Unknown or already removed ids
    /// are accepted without touching the store.
    async fn remove_book(&self, dto: RemoveBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let found = self
            .book_query()
            .find_in_inventory_by_id(&mut connection, &id)
            .await?;

        match found {
            Some(mut book) => {
                book.remove_from_inventory();
                self.book_modifier().update(&mut connection, &book).await?;
                connection.commit().await?;
                tracing::info!(book_id = dto.id, "book removed from inventory");
            }
            None => {
                connection.roll_back().await?;
                tracing::debug!(book_id = dto.id, "book already absent from inventory");
            }
        }
        Ok(())
    }
}

impl<T> RemoveBookService for T where T: DependOnBookQuery + DependOnBookModifier {}
