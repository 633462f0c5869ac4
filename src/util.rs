use std::sync::Arc;

use chrono::FixedOffset;
use fractic_server_error::ServerError;
use tracing::warn;

use crate::{
    config::ClientConfig,
    domain::usecases::session_usecase::{IdentityVerification, SessionUsecase},
    entities::{
        InventoryItemId, InventoryItemPatch, Locale, OwnerId, RefreshOutcome, TransactionId,
        TransactionPatch,
    },
    errors::NotSignedIn,
    logic::{
        edit_protocol::EditForm,
        ledger_store::{LedgerStore, LedgerSubscription},
    },
    repositories::{IdentityProvider, LedgerRepository, LedgerRepositoryImpl},
    views::{inventory_item_form, transaction_form, DashboardView, ViewContext},
};

/// Everything a front end needs: sign-in, the ledger store, edit forms and
/// the composed dashboard, in the active language.
pub struct LedgerClient<R, P>
where
    R: LedgerRepository,
    P: IdentityProvider,
{
    config: ClientConfig,
    store: Arc<LedgerStore<R>>,
    session: SessionUsecase<R, P>,
    view_context: ViewContext,
}

impl<P: IdentityProvider> LedgerClient<LedgerRepositoryImpl, P> {
    /// Client talking to the HTTP backend at `config.api_url`.
    pub fn new(config: ClientConfig, identity_provider: P) -> Result<Self, ServerError> {
        let repository = Arc::new(LedgerRepositoryImpl::new(&config)?);
        Ok(Self::with_repository(config, repository, identity_provider))
    }
}

impl<R, P> LedgerClient<R, P>
where
    R: LedgerRepository,
    P: IdentityProvider,
{
    pub fn with_repository(config: ClientConfig, repository: Arc<R>, identity_provider: P) -> Self {
        let view_context = ViewContext::new(config.default_locale, ViewContext::default().utc_offset);
        Self {
            store: Arc::new(LedgerStore::new(repository.clone())),
            session: SessionUsecase::new(
                repository,
                identity_provider,
                config.default_business_name.clone(),
            ),
            view_context,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<LedgerStore<R>> {
        &self.store
    }

    pub fn subscribe(&self) -> LedgerSubscription {
        self.store.subscribe()
    }

    // Language and display.
    // ---

    pub fn locale(&self) -> Locale {
        self.view_context.dictionary.locale()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.view_context = ViewContext::new(locale, self.view_context.utc_offset);
    }

    pub fn toggle_locale(&mut self) {
        self.set_locale(self.locale().toggled());
    }

    /// Wall-clock offset timestamps are shown in (UTC by default).
    pub fn set_utc_offset(&mut self, utc_offset: FixedOffset) {
        self.view_context = ViewContext::new(self.locale(), utc_offset);
    }

    pub fn view_context(&self) -> &ViewContext {
        &self.view_context
    }

    pub async fn dashboard(&self) -> DashboardView {
        DashboardView::compose(&self.store.status().await, &self.view_context)
    }

    // Identity.
    // ---

    pub async fn begin_sign_in(&self, raw_phone: &str) -> Result<IdentityVerification, ServerError> {
        self.session.begin_verification(raw_phone).await
    }

    /// Confirm the code, then load the owner's ledger. A failed first load
    /// does not undo the sign-in; it is reported through the store like any
    /// other failed refresh.
    pub async fn complete_sign_in(
        &self,
        verification: IdentityVerification,
        code: &str,
    ) -> Result<OwnerId, ServerError> {
        let owner = self
            .session
            .complete_verification(verification, code)
            .await?;
        self.load_owner(&owner).await;
        Ok(owner)
    }

    /// Sign in with a phone number another component has already verified.
    pub async fn sign_in_verified(&self, owner: OwnerId) -> OwnerId {
        if let Err(e) = self.session.ensure_registered(&owner).await {
            warn!(owner = %owner, error = ?e, "Backend sync failed, continuing sign-in");
        }
        self.load_owner(&owner).await;
        owner
    }

    pub async fn sign_out(&self) {
        self.store.sign_out().await;
    }

    async fn load_owner(&self, owner: &OwnerId) {
        if let Err(e) = self.store.refresh(owner).await {
            warn!(owner = %owner, error = ?e, "Initial dashboard load failed");
        }
    }

    async fn active_owner(&self) -> Result<OwnerId, ServerError> {
        self.store.owner().await.ok_or_else(NotSignedIn::new)
    }

    // Ledger.
    // ---

    pub async fn refresh(&self) -> Result<RefreshOutcome, ServerError> {
        let owner = self.active_owner().await?;
        self.store.refresh(&owner).await
    }

    /// Form for an item in the current snapshot, or `None` if it is not there.
    pub async fn inventory_item_form(&self, id: InventoryItemId) -> Option<EditForm> {
        let snapshot = self.store.snapshot().await?;
        let item = snapshot.inventory_item(id)?;
        Some(inventory_item_form(item, &self.view_context))
    }

    pub async fn save_inventory_item(
        &self,
        id: InventoryItemId,
        form: &EditForm,
    ) -> Result<RefreshOutcome, ServerError> {
        let patch = InventoryItemPatch::from_patch(&form.submit()?)?;
        let owner = self.active_owner().await?;
        self.store.update_inventory_item(id, &patch, &owner).await
    }

    pub async fn delete_inventory_item(
        &self,
        id: InventoryItemId,
    ) -> Result<RefreshOutcome, ServerError> {
        let owner = self.active_owner().await?;
        self.store.delete_inventory_item(id, &owner).await
    }

    /// Form for a transaction in the current snapshot, or `None` if it is not
    /// there.
    pub async fn transaction_form(&self, id: &TransactionId) -> Option<EditForm> {
        let snapshot = self.store.snapshot().await?;
        let tx = snapshot.transaction(id)?;
        Some(transaction_form(tx, &self.view_context))
    }

    pub async fn save_transaction(
        &self,
        id: &TransactionId,
        form: &EditForm,
    ) -> Result<RefreshOutcome, ServerError> {
        let current_total = self
            .store
            .snapshot()
            .await
            .and_then(|s| s.transaction(id).and_then(|tx| tx.total_amount));
        let patch = TransactionPatch::from_patch(&form.submit()?, current_total)?;
        let owner = self.active_owner().await?;
        self.store.update_transaction(id, &patch, &owner).await
    }

    pub async fn delete_transaction(
        &self,
        id: &TransactionId,
    ) -> Result<RefreshOutcome, ServerError> {
        let owner = self.active_owner().await?;
        self.store.delete_transaction(id, &owner).await
    }
}
