use async_trait::async_trait;
use fractic_server_error::{CriticalError, ServerError};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::{
    config::ClientConfig,
    data::models::{
        auth_model::{LoginRequestModel, LoginResponseModel, RegisterRequestModel},
        dashboard_model::DashboardModel,
        inventory_item_model::InventoryItemPatchModel,
        transaction_model::TransactionPatchModel,
    },
    errors::{AuthSyncFailed, FetchFailed, MalformedResponse, MutationFailed},
};

/// Header carrying the owner's phone number on every ledger request.
pub(crate) const OWNER_HEADER: &str = "X-Phone-Number";

const DASHBOARD_PATH: &str = "/api/dashboard";
const INVENTORY_PATH: &str = "/api/inventory";
const TRANSACTIONS_PATH: &str = "/api/transactions";
const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";

#[async_trait]
pub(crate) trait LedgerApiDatasource: Send + Sync {
    async fn get_dashboard(&self, owner: &str) -> Result<DashboardModel, ServerError>;

    async fn put_inventory_item(
        &self,
        id: i64,
        body: &InventoryItemPatchModel<'_>,
        owner: &str,
    ) -> Result<(), ServerError>;

    async fn delete_inventory_item(&self, id: i64, owner: &str) -> Result<(), ServerError>;

    async fn put_transaction(
        &self,
        id: &str,
        body: &TransactionPatchModel<'_>,
        owner: &str,
    ) -> Result<(), ServerError>;

    async fn delete_transaction(&self, id: &str, owner: &str) -> Result<(), ServerError>;

    async fn post_login(&self, body: &LoginRequestModel<'_>)
        -> Result<LoginResponseModel, ServerError>;

    async fn post_register(&self, body: &RegisterRequestModel<'_>) -> Result<(), ServerError>;
}

pub(crate) struct LedgerApiDatasourceImpl {
    client: Client,
    base_url: String,
}

impl LedgerApiDatasourceImpl {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, ServerError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CriticalError::with_debug("failed to build HTTP client", &e))?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a write and treat anything but a 2xx as a rejection.
    async fn send_mutation(
        &self,
        request: RequestBuilder,
        action: &str,
        entity: &str,
        id: &str,
    ) -> Result<(), ServerError> {
        let response = request
            .send()
            .await
            .map_err(|e| MutationFailed::with_debug(action, entity, id, &e))?;
        let status = response.status();
        debug!(action, entity, id, %status, "Mutation response");
        if !status.is_success() {
            return Err(MutationFailed::with_debug(action, entity, id, &status));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerApiDatasource for LedgerApiDatasourceImpl {
    async fn get_dashboard(&self, owner: &str) -> Result<DashboardModel, ServerError> {
        let response = self
            .client
            .get(self.url(DASHBOARD_PATH))
            .header(OWNER_HEADER, owner)
            .send()
            .await
            .map_err(|e| FetchFailed::with_debug(owner, &e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailed::with_debug(owner, &status));
        }
        let body = response
            .text()
            .await
            .map_err(|e| FetchFailed::with_debug(owner, &e))?;
        serde_json::from_str(&body).map_err(|e| MalformedResponse::with_debug(DASHBOARD_PATH, &e))
    }

    async fn put_inventory_item(
        &self,
        id: i64,
        body: &InventoryItemPatchModel<'_>,
        owner: &str,
    ) -> Result<(), ServerError> {
        let request = self
            .client
            .put(self.url(&format!("{INVENTORY_PATH}/{id}")))
            .header(OWNER_HEADER, owner)
            .json(body);
        self.send_mutation(request, "update", "inventory item", &id.to_string())
            .await
    }

    async fn delete_inventory_item(&self, id: i64, owner: &str) -> Result<(), ServerError> {
        let request = self
            .client
            .delete(self.url(&format!("{INVENTORY_PATH}/{id}")))
            .header(OWNER_HEADER, owner);
        self.send_mutation(request, "delete", "inventory item", &id.to_string())
            .await
    }

    async fn put_transaction(
        &self,
        id: &str,
        body: &TransactionPatchModel<'_>,
        owner: &str,
    ) -> Result<(), ServerError> {
        let request = self
            .client
            .put(self.url(&format!("{TRANSACTIONS_PATH}/{id}")))
            .header(OWNER_HEADER, owner)
            .json(body);
        self.send_mutation(request, "update", "transaction", id).await
    }

    async fn delete_transaction(&self, id: &str, owner: &str) -> Result<(), ServerError> {
        let request = self
            .client
            .delete(self.url(&format!("{TRANSACTIONS_PATH}/{id}")))
            .header(OWNER_HEADER, owner);
        self.send_mutation(request, "delete", "transaction", id).await
    }

    async fn post_login(
        &self,
        body: &LoginRequestModel<'_>,
    ) -> Result<LoginResponseModel, ServerError> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthSyncFailed::with_debug("log in", body.phone_number, &e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthSyncFailed::with_debug("log in", body.phone_number, &status));
        }
        let raw = response
            .text()
            .await
            .map_err(|e| AuthSyncFailed::with_debug("log in", body.phone_number, &e))?;
        serde_json::from_str(&raw).map_err(|e| MalformedResponse::with_debug(LOGIN_PATH, &e))
    }

    async fn post_register(&self, body: &RegisterRequestModel<'_>) -> Result<(), ServerError> {
        let response = self
            .client
            .post(self.url(REGISTER_PATH))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthSyncFailed::with_debug("register", body.phone_number, &e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthSyncFailed::with_debug("register", body.phone_number, &status));
        }
        Ok(())
    }
}
