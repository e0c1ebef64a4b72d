use driver::database::PostgresDatabase;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;
use std::sync::Arc;
use vodca::References;

#[cfg(test)]
pub(crate) mod memory;

/// Router state that can reach the book inventory.
pub trait DependOnInventory: 'static + Clone + Send + Sync {
    type Inventory: DependOnBookQuery + DependOnBookModifier;
    fn inventory(&self) -> &Self::Inventory;
}

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl DependOnInventory for AppModule {
    type Inventory = PostgresDatabase;
    fn inventory(&self) -> &Self::Inventory {
        Handler::inventory(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    inventory: PostgresDatabase,
}

impl Handler {
    /// Connects to the inventory store and brings its schema up to date.
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let inventory = PostgresDatabase::new().await?;
        inventory.migrate().await?;
        tracing::info!("inventory store ready");

        Ok(Self { inventory })
    }
}
