use sqlx::PgConnection;

use kernel::interface::query::{single_or_none, BookQuery};
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookAuthor, BookDraft, BookGenre, BookId, BookPageCount, BookTitle, InInventory,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn find_in_inventory(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_in_inventory(con).await
    }

    async fn find_in_inventory_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_in_inventory_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        book: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con, book).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    genre: String,
    number_of_pages: i32,
    in_inventory: bool,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            BookGenre::new(value.genre),
            BookPageCount::new(value.number_of_pages),
            InInventory::new(value.in_inventory),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_in_inventory(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author, genre, number_of_pages, in_inventory
            FROM books
            WHERE in_inventory
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_in_inventory_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author, genre, number_of_pages, in_inventory
            FROM books
            WHERE in_inventory AND id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        single_or_none(rows.into_iter().map(Book::from).collect())
    }

    async fn create(con: &mut PgConnection, book: &BookDraft) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO books (title, author, genre, number_of_pages, in_inventory)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id, title, author, genre, number_of_pages, in_inventory
            "#,
        )
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.genre().as_ref())
        .bind(book.page_count().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Book::from(row))
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, genre = $4, number_of_pages = $5, in_inventory = $6
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.genre().as_ref())
        .bind(book.page_count().as_ref())
        .bind(book.in_inventory().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use error_stack::ResultExt;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        BookAuthor, BookDraft, BookGenre, BookPageCount, BookTitle, GenreFilter,
    };
    use kernel::KernelError;

    use crate::database::postgres::book::PostgresBookRepository;
    use crate::database::postgres::PostgresDatabase;

    fn draft(title: &str, genre: &str) -> BookDraft {
        BookDraft::new(
            BookTitle::new(title),
            BookAuthor::new("test"),
            BookGenre::new(genre),
            BookPageCount::new(123),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn lifecycle() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new()
            .await
            .change_context_lazy(|| KernelError::Internal)?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let book = PostgresBookRepository
            .create(&mut con, &draft("test", "TestGenre"))
            .await?;
        assert!(book.is_active());

        let found = PostgresBookRepository
            .find_in_inventory_by_id(&mut con, book.id())
            .await?;
        assert_eq!(found, Some(book.clone()));

        let mut changed = book.clone();
        changed.change_genre(BookGenre::new("OtherGenre"));
        PostgresBookRepository.update(&mut con, &changed).await?;
        let found = PostgresBookRepository
            .find_in_inventory_by_id(&mut con, book.id())
            .await?;
        assert_eq!(found, Some(changed.clone()));

        changed.remove_from_inventory();
        PostgresBookRepository.update(&mut con, &changed).await?;
        let found = PostgresBookRepository
            .find_in_inventory_by_id(&mut con, book.id())
            .await?;
        assert!(found.is_none());

        let (still_stored,): (bool,) =
            sqlx::query_as("SELECT in_inventory FROM books WHERE id = $1")
                .bind(book.id().as_ref())
                .fetch_one(&mut *con)
                .await
                .change_context_lazy(|| KernelError::Internal)?;
        assert!(!still_stored);

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn inventory_skips_removed_books() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new()
            .await
            .change_context_lazy(|| KernelError::Internal)?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let kept = PostgresBookRepository
            .create(&mut con, &draft("kept", "ÉPOPÉE"))
            .await?;
        let mut removed = PostgresBookRepository
            .create(&mut con, &draft("removed", "ÉPOPÉE"))
            .await?;
        removed.remove_from_inventory();
        PostgresBookRepository.update(&mut con, &removed).await?;

        let inventory = PostgresBookRepository.find_in_inventory(&mut con).await?;
        assert!(inventory.contains(&kept));
        assert!(inventory.iter().all(|book| book.id() != removed.id()));
        assert!(inventory.iter().all(|book| book.is_active()));
        assert!(inventory.windows(2).all(|w| w[0].id().as_ref() < w[1].id().as_ref()));

        let filtered = GenreFilter::from("épopée").apply(inventory);
        assert!(filtered.contains(&kept));

        con.roll_back().await?;
        Ok(())
    }
}
