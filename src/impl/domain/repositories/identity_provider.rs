use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::OwnerId;

/// Opaque handle the provider hands out when a code has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationId(pub String);

/// External phone-number verification (SMS one-time codes). The ledger only
/// cares about its final answer: a phone number that has been verified.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn send_code(&self, phone: &OwnerId) -> Result<VerificationId, ServerError>;

    /// Returns the verified phone number as the provider reports it.
    async fn confirm_code(
        &self,
        verification: &VerificationId,
        code: &str,
    ) -> Result<OwnerId, ServerError>;
}
