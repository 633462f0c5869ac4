use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{
    InventoryItemId, InventoryItemPatch, LedgerSnapshot, OwnerId, TransactionId,
    TransactionPatch,
};

/// Whether the backend already knows an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    Found,
    NotFound,
}

/// Backend boundary. Every call is scoped by the owner's phone number, which
/// is the only credential the backend receives.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    async fn fetch_snapshot(&self, owner: &OwnerId) -> Result<LedgerSnapshot, ServerError>;

    async fn update_inventory_item(
        &self,
        id: InventoryItemId,
        patch: &InventoryItemPatch,
        owner: &OwnerId,
    ) -> Result<(), ServerError>;

    async fn delete_inventory_item(
        &self,
        id: InventoryItemId,
        owner: &OwnerId,
    ) -> Result<(), ServerError>;

    async fn update_transaction(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
        owner: &OwnerId,
    ) -> Result<(), ServerError>;

    async fn delete_transaction(&self, id: &TransactionId, owner: &OwnerId)
        -> Result<(), ServerError>;

    async fn login(&self, owner: &OwnerId) -> Result<LoginStatus, ServerError>;

    async fn register(&self, owner: &OwnerId, business_name: &str) -> Result<(), ServerError>;
}
