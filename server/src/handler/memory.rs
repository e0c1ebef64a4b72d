use std::sync::{Arc, Mutex};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{single_or_none, BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookDraft, BookId};
use kernel::KernelError;

use crate::handler::DependOnInventory;

/// Inventory kept in process memory, for driving the router in tests.
#[derive(Clone, Default)]
pub struct MemoryInventory {
    shelf: Arc<Mutex<Vec<Book>>>,
}

impl MemoryInventory {
    pub fn seeded(books: Vec<Book>) -> Self {
        Self {
            shelf: Arc::new(Mutex::new(books)),
        }
    }

    pub fn stored(&self) -> Vec<Book> {
        self.shelf.lock().unwrap().clone()
    }
}

pub struct MemoryTransaction(Arc<Mutex<Vec<Book>>>);

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryInventory {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(MemoryTransaction(self.shelf.clone()))
    }
}

pub struct MemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn find_in_inventory(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|book| book.is_active())
            .cloned()
            .collect())
    }

    async fn find_in_inventory_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let rows = con
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|book| book.is_active() && book.id() == id)
            .cloned()
            .collect::<Vec<_>>();
        single_or_none(rows)
    }
}

#[async_trait::async_trait]
impl BookModifier for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        book: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        let mut shelf = con.0.lock().unwrap();
        let next = shelf.iter().map(|b| *b.id().as_ref()).max().unwrap_or(0) + 1;
        let book = book.clone().into_book(BookId::new(next));
        shelf.push(book.clone());
        Ok(book)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        let mut shelf = con.0.lock().unwrap();
        if let Some(stored) = shelf.iter_mut().find(|stored| stored.id() == book.id()) {
            *stored = book.clone();
        }
        Ok(())
    }
}

impl DependOnBookQuery for MemoryInventory {
    type BookQuery = MemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MemoryBookRepository
    }
}

impl DependOnBookModifier for MemoryInventory {
    type BookModifier = MemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MemoryBookRepository
    }
}

impl DependOnInventory for MemoryInventory {
    type Inventory = Self;
    fn inventory(&self) -> &Self::Inventory {
        self
    }
}
