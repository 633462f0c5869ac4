use std::sync::Arc;

use fractic_server_error::ServerError;
use tracing::{info, warn};

use crate::{
    domain::repositories::{
        identity_provider::{IdentityProvider, VerificationId},
        ledger_repository::{LedgerRepository, LoginStatus},
    },
    entities::OwnerId,
    errors::VerificationFailed,
};

/// One sign-in attempt: created when a code is sent, consumed when the code
/// is confirmed. Dropping it abandons the attempt.
#[derive(Debug)]
pub struct IdentityVerification {
    phone: OwnerId,
    verification_id: VerificationId,
}

impl IdentityVerification {
    pub fn phone(&self) -> &OwnerId {
        &self.phone
    }
}

/// Turns a phone number into a verified owner known to the backend.
pub struct SessionUsecase<R: LedgerRepository, P: IdentityProvider> {
    repository: Arc<R>,
    identity_provider: P,
    default_business_name: String,
}

impl<R: LedgerRepository, P: IdentityProvider> SessionUsecase<R, P> {
    pub fn new(repository: Arc<R>, identity_provider: P, default_business_name: String) -> Self {
        Self {
            repository,
            identity_provider,
            default_business_name,
        }
    }

    /// Normalize the typed number and ask the provider to send a code to it.
    pub async fn begin_verification(
        &self,
        raw_phone: &str,
    ) -> Result<IdentityVerification, ServerError> {
        let phone = OwnerId::parse(raw_phone)?;
        let verification_id = self.identity_provider.send_code(&phone).await?;
        info!(phone = %phone, "Verification code sent");
        Ok(IdentityVerification {
            phone,
            verification_id,
        })
    }

    /// Confirm the code and make sure the backend has an account for the
    /// owner. The backend sync is best-effort: the owner is signed in even if
    /// it fails, and the next dashboard fetch surfaces any real problem.
    pub async fn complete_verification(
        &self,
        verification: IdentityVerification,
        code: &str,
    ) -> Result<OwnerId, ServerError> {
        let IdentityVerification {
            phone,
            verification_id,
        } = verification;
        let verified = self
            .identity_provider
            .confirm_code(&verification_id, code.trim())
            .await
            .map_err(|e| VerificationFailed::with_debug(phone.as_str(), &e))?;
        if verified != phone {
            warn!(typed = %phone, verified = %verified, "Provider verified a different number");
        }

        if let Err(e) = self.ensure_registered(&verified).await {
            warn!(owner = %verified, error = ?e, "Backend sync failed, continuing sign-in");
        }
        Ok(verified)
    }

    /// Register the owner with the default business name unless the backend
    /// already knows them.
    pub async fn ensure_registered(&self, owner: &OwnerId) -> Result<LoginStatus, ServerError> {
        let status = self.repository.login(owner).await?;
        if status == LoginStatus::NotFound {
            info!(owner = %owner, "Registering new owner");
            self.repository
                .register(owner, &self.default_business_name)
                .await?;
        }
        Ok(status)
    }
}
