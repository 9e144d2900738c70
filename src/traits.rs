//! Traits for event notification and extensibility

use crate::types::*;

/// Capability for observing ledger state changes
///
/// The ledger holds a sink injected at construction and notifies it
/// after each committed mutation. Delivery is fire-and-forget: the
/// ledger logs a failed delivery and never rolls back state, since
/// emission happens strictly after the mutation commits.
pub trait EventSink: Send + Sync {
    /// Deliver one event record
    fn emit(&self, event: &TokenEvent) -> SinkResult<()>;
}

/// Sink that discards every event
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &TokenEvent) -> SinkResult<()> {
        Ok(())
    }
}

/// Sink that forwards events to the `log` facade
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &TokenEvent) -> SinkResult<()> {
        match event {
            TokenEvent::Transfer(transfer) => match transfer.from {
                Some(from) => log::info!(
                    "transfer: {} -> {} value {}",
                    from,
                    transfer.to,
                    transfer.value
                ),
                None => log::info!("mint: {} value {}", transfer.to, transfer.value),
            },
            TokenEvent::Approval(approval) => log::info!(
                "approval: {} allows {} up to {}",
                approval.owner,
                approval.spender,
                approval.value
            ),
        }
        Ok(())
    }
}
