use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::ClientConfig,
    data::{
        datasources::ledger_api_datasource::{LedgerApiDatasource, LedgerApiDatasourceImpl},
        models::{
            auth_model::{LoginRequestModel, RegisterRequestModel},
            inventory_item_model::InventoryItemPatchModel,
            transaction_model::TransactionPatchModel,
        },
    },
    domain::repositories::ledger_repository::{LedgerRepository, LoginStatus},
    entities::{
        InventoryItemId, InventoryItemPatch, LedgerSnapshot, OwnerId, TransactionId,
        TransactionPatch,
    },
};

/// Ledger repository backed by the HTTP API.
pub struct LedgerRepositoryImpl {
    api_datasource: LedgerApiDatasourceImpl,
}

#[async_trait]
impl LedgerRepository for LedgerRepositoryImpl {
    async fn fetch_snapshot(&self, owner: &OwnerId) -> Result<LedgerSnapshot, ServerError> {
        Ok(self.api_datasource.get_dashboard(owner.as_str()).await?.into())
    }

    async fn update_inventory_item(
        &self,
        id: InventoryItemId,
        patch: &InventoryItemPatch,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.api_datasource
            .put_inventory_item(id.0, &InventoryItemPatchModel::from(patch), owner.as_str())
            .await
    }

    async fn delete_inventory_item(
        &self,
        id: InventoryItemId,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.api_datasource
            .delete_inventory_item(id.0, owner.as_str())
            .await
    }

    async fn update_transaction(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.api_datasource
            .put_transaction(&id.0, &TransactionPatchModel::from(patch), owner.as_str())
            .await
    }

    async fn delete_transaction(
        &self,
        id: &TransactionId,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.api_datasource
            .delete_transaction(&id.0, owner.as_str())
            .await
    }

    async fn login(&self, owner: &OwnerId) -> Result<LoginStatus, ServerError> {
        let response = self
            .api_datasource
            .post_login(&LoginRequestModel {
                phone_number: owner.as_str(),
            })
            .await?;
        Ok(response.status.into())
    }

    async fn register(&self, owner: &OwnerId, business_name: &str) -> Result<(), ServerError> {
        self.api_datasource
            .post_register(&RegisterRequestModel {
                phone_number: owner.as_str(),
                business_name,
            })
            .await
    }
}

impl LedgerRepositoryImpl {
    pub fn new(config: &ClientConfig) -> Result<Self, ServerError> {
        Ok(LedgerRepositoryImpl {
            api_datasource: LedgerApiDatasourceImpl::new(config)?,
        })
    }
}
