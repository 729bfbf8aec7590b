use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::ports::InvitationNotifier;
use crate::user::errors::NotificationError;

/// Invitation notifier that records the invitation in the service log.
///
/// Stands in for mail delivery; the initial password is never logged.
#[derive(Debug, Default, Clone)]
pub struct LoggingInvitationNotifier;

impl LoggingInvitationNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InvitationNotifier for LoggingInvitationNotifier {
    async fn notify_invited(&self, user: &User) -> Result<(), NotificationError> {
        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "Invitation issued"
        );
        Ok(())
    }
}
