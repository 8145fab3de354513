//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives one interactive session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive board until the user quits. The session (and its feed) ends on return.
    async fn run(&self) -> Result<(), DomainError>;
}
