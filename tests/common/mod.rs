#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::{TimeZone as _, Utc};
use fractic_server_error::ServerError;
use mandi_ledger::{
    entities::{
        InventoryItem, InventoryItemId, InventoryItemPatch, LedgerSnapshot, OwnerId,
        Transaction, TransactionId, TransactionPatch, TransactionType,
    },
    errors::{FetchFailed, MutationFailed, VerificationFailed},
    repositories::{IdentityProvider, LedgerRepository, LoginStatus, VerificationId},
};
use tokio::sync::oneshot;

pub fn owner(n: &str) -> OwnerId {
    OwnerId::parse(n).unwrap()
}

pub fn item(id: i64, name: &str, quantity: f64) -> InventoryItem {
    InventoryItem {
        id: InventoryItemId(id),
        item_name: name.into(),
        quantity,
        unit: "kg".into(),
        last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    }
}

pub fn tx(id: &str, transaction_type: TransactionType, total: Option<f64>) -> Transaction {
    Transaction {
        id: TransactionId::from(id),
        transaction_type,
        item_name: "Onion".into(),
        quantity: 2.0,
        unit: "kg".into(),
        rate: None,
        total_amount: total,
        buyer_name: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    }
}

/// The dashboard from the onion example: one low item, one sale, one purchase.
pub fn onion_snapshot() -> LedgerSnapshot {
    LedgerSnapshot {
        inventory: vec![item(1, "Onion", 5.0)],
        transactions: vec![
            tx("sale-1", TransactionType::Sale, Some(200.0)),
            tx("purchase-1", TransactionType::Purchase, Some(150.0)),
        ],
    }
}

/// In-memory backend. Holds one snapshot per owner and applies writes to it
/// the way the real backend would.
#[derive(Default)]
pub struct FakeBackend {
    data: Mutex<HashMap<OwnerId, LedgerSnapshot>>,
    known_owners: Mutex<Vec<OwnerId>>,
    registered: Mutex<Vec<(OwnerId, String)>>,
    calls: Mutex<Vec<String>>,
    /// When non-empty, each fetch waits for the next gate. A gate resolving
    /// to `None` makes that fetch fail.
    gates: Mutex<VecDeque<oneshot::Receiver<Option<LedgerSnapshot>>>>,
    /// Same as `gates`, for writes: each write waits for the next one.
    mutation_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    fail_fetches: Mutex<bool>,
    fail_mutations: Mutex<bool>,
    fail_login: Mutex<bool>,
    /// Total the server stores for updated transactions, whatever the client
    /// sent.
    server_total: Mutex<Option<f64>>,
}

impl FakeBackend {
    pub fn with_data(owner: &OwnerId, snapshot: LedgerSnapshot) -> Self {
        let backend = Self::default();
        backend.put(owner, snapshot);
        backend.known_owners.lock().unwrap().push(owner.clone());
        backend
    }

    pub fn put(&self, owner: &OwnerId, snapshot: LedgerSnapshot) {
        self.data.lock().unwrap().insert(owner.clone(), snapshot);
    }

    pub fn data(&self, owner: &OwnerId) -> LedgerSnapshot {
        self.data
            .lock()
            .unwrap()
            .get(owner)
            .cloned()
            .unwrap_or_default()
    }

    /// Make the next fetch wait until the returned sender fires.
    pub fn gate_next_fetch(&self) -> oneshot::Sender<Option<LedgerSnapshot>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Make the next write wait until the returned sender fires.
    pub fn gate_next_mutation(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.mutation_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn fail_fetches(&self, fail: bool) {
        *self.fail_fetches.lock().unwrap() = fail;
    }

    pub fn fail_mutations(&self, fail: bool) {
        *self.fail_mutations.lock().unwrap() = fail;
    }

    pub fn fail_login(&self, fail: bool) {
        *self.fail_login.lock().unwrap() = fail;
    }

    pub fn set_server_total(&self, total: Option<f64>) {
        *self.server_total.lock().unwrap() = total;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn registered(&self) -> Vec<(OwnerId, String)> {
        self.registered.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_for_mutation_gate(&self) {
        let gate = self.mutation_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    fn check_mutation(&self, action: &str, entity: &str, id: &str) -> Result<(), ServerError> {
        if *self.fail_mutations.lock().unwrap() {
            return Err(MutationFailed::new(action, entity, id));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerRepository for FakeBackend {
    async fn fetch_snapshot(&self, owner: &OwnerId) -> Result<LedgerSnapshot, ServerError> {
        self.record(format!("fetch {owner}"));
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            return match gate.await {
                Ok(Some(snapshot)) => Ok(snapshot),
                _ => Err(FetchFailed::new(owner.as_str())),
            };
        }
        if *self.fail_fetches.lock().unwrap() {
            return Err(FetchFailed::new(owner.as_str()));
        }
        Ok(self.data(owner))
    }

    async fn update_inventory_item(
        &self,
        id: InventoryItemId,
        patch: &InventoryItemPatch,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.record(format!("update_item {id}"));
        self.wait_for_mutation_gate().await;
        self.check_mutation("update", "inventory item", &id.to_string())?;
        let mut data = self.data.lock().unwrap();
        let snapshot = data.entry(owner.clone()).or_default();
        if let Some(item) = snapshot.inventory.iter_mut().find(|i| i.id == id) {
            item.item_name = patch.item_name.clone();
            item.quantity = patch.quantity;
            item.unit = patch.unit.clone();
            item.last_updated = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        }
        Ok(())
    }

    async fn delete_inventory_item(
        &self,
        id: InventoryItemId,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.record(format!("delete_item {id}"));
        self.wait_for_mutation_gate().await;
        self.check_mutation("delete", "inventory item", &id.to_string())?;
        let mut data = self.data.lock().unwrap();
        data.entry(owner.clone())
            .or_default()
            .inventory
            .retain(|i| i.id != id);
        Ok(())
    }

    async fn update_transaction(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.record(format!("update_tx {id}"));
        self.wait_for_mutation_gate().await;
        self.check_mutation("update", "transaction", &id.0)?;
        let server_total = *self.server_total.lock().unwrap();
        let mut data = self.data.lock().unwrap();
        let snapshot = data.entry(owner.clone()).or_default();
        if let Some(tx) = snapshot.transactions.iter_mut().find(|t| &t.id == id) {
            tx.item_name = patch.item_name.clone();
            tx.quantity = patch.quantity;
            tx.unit = patch.unit.clone();
            tx.rate = patch.rate;
            tx.total_amount = server_total.or(patch.total_amount);
            tx.buyer_name = patch.buyer_name.clone();
        }
        Ok(())
    }

    async fn delete_transaction(
        &self,
        id: &TransactionId,
        owner: &OwnerId,
    ) -> Result<(), ServerError> {
        self.record(format!("delete_tx {id}"));
        self.wait_for_mutation_gate().await;
        self.check_mutation("delete", "transaction", &id.0)?;
        let mut data = self.data.lock().unwrap();
        data.entry(owner.clone())
            .or_default()
            .transactions
            .retain(|t| &t.id != id);
        Ok(())
    }

    async fn login(&self, owner: &OwnerId) -> Result<LoginStatus, ServerError> {
        self.record(format!("login {owner}"));
        if *self.fail_login.lock().unwrap() {
            return Err(FetchFailed::new(owner.as_str()));
        }
        if self.known_owners.lock().unwrap().contains(owner) {
            Ok(LoginStatus::Found)
        } else {
            Ok(LoginStatus::NotFound)
        }
    }

    async fn register(&self, owner: &OwnerId, business_name: &str) -> Result<(), ServerError> {
        self.record(format!("register {owner}"));
        self.known_owners.lock().unwrap().push(owner.clone());
        self.registered
            .lock()
            .unwrap()
            .push((owner.clone(), business_name.to_string()));
        Ok(())
    }
}

/// Identity provider that accepts exactly one code.
pub struct FakeIdentityProvider {
    pub accepted_code: String,
    sent_to: Mutex<Vec<OwnerId>>,
}

impl FakeIdentityProvider {
    pub fn new(accepted_code: &str) -> Self {
        Self {
            accepted_code: accepted_code.to_string(),
            sent_to: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_to(&self) -> Vec<OwnerId> {
        self.sent_to.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn send_code(&self, phone: &OwnerId) -> Result<VerificationId, ServerError> {
        self.sent_to.lock().unwrap().push(phone.clone());
        Ok(VerificationId(format!("verify:{phone}")))
    }

    async fn confirm_code(
        &self,
        verification: &VerificationId,
        code: &str,
    ) -> Result<OwnerId, ServerError> {
        let phone = verification.0.trim_start_matches("verify:");
        if code != self.accepted_code {
            return Err(VerificationFailed::new(phone));
        }
        OwnerId::parse(phone)
    }
}
