// 🧭 Financial Context - The snapshot and user identity, passed explicitly
//
// Views receive a `FinancialContext` value. For code that cannot take it
// as a parameter there is a single process-wide slot; reading it before
// `install` is a programmer error and fails fast.

use crate::config::UserProfile;
use crate::error::{DashboardError, Result};
use crate::metrics::FinancialSummary;
use crate::snapshot::FinancialSnapshot;
use std::sync::{Arc, OnceLock};
use tracing::info;

#[derive(Debug, Clone)]
pub struct FinancialContext {
    snapshot: Arc<FinancialSnapshot>,
    user: UserProfile,
}

impl FinancialContext {
    pub fn new(snapshot: FinancialSnapshot, user: UserProfile) -> Self {
        FinancialContext {
            snapshot: Arc::new(snapshot),
            user,
        }
    }

    /// Demo snapshot with the default user
    pub fn demo() -> Self {
        Self::new(FinancialSnapshot::demo(), UserProfile::default())
    }

    pub fn snapshot(&self) -> &FinancialSnapshot {
        &self.snapshot
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    /// Headline metrics, recomputed on every call
    pub fn summary(&self) -> FinancialSummary {
        FinancialSummary::from_snapshot(&self.snapshot)
    }
}

// ============================================================================
// CONTEXT SLOT
// ============================================================================

/// Write-once holder for a context
pub struct ContextSlot {
    cell: OnceLock<FinancialContext>,
}

impl ContextSlot {
    pub const fn new() -> Self {
        ContextSlot { cell: OnceLock::new() }
    }

    pub fn install(&self, context: FinancialContext) -> Result<()> {
        self.cell
            .set(context)
            .map_err(|_| DashboardError::ContextAlreadyInstalled)
    }

    pub fn get(&self) -> Result<&FinancialContext> {
        self.cell.get().ok_or(DashboardError::ContextNotInstalled)
    }
}

impl Default for ContextSlot {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CONTEXT: ContextSlot = ContextSlot::new();

/// Install the process-wide context (once)
pub fn install(context: FinancialContext) -> Result<()> {
    GLOBAL_CONTEXT.install(context)?;
    info!("Financial context installed");
    Ok(())
}

/// The process-wide context; errors if `install` was never called
pub fn current() -> Result<&'static FinancialContext> {
    GLOBAL_CONTEXT.get()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_fails_fast_before_install() {
        let slot = ContextSlot::new();
        let err = slot.get().unwrap_err();
        assert!(matches!(err, DashboardError::ContextNotInstalled));
    }

    #[test]
    fn test_slot_is_write_once() {
        let slot = ContextSlot::new();
        slot.install(FinancialContext::demo()).unwrap();
        assert_eq!(slot.get().unwrap().user().name, "Aamir");

        let err = slot.install(FinancialContext::demo()).unwrap_err();
        assert!(matches!(err, DashboardError::ContextAlreadyInstalled));
    }

    // The only test that touches the process-wide slot
    #[test]
    fn test_global_context_install_then_current() {
        assert!(matches!(current(), Err(DashboardError::ContextNotInstalled)));

        let context = FinancialContext::new(
            FinancialSnapshot::demo(),
            UserProfile::from_name("Priya Sharma"),
        );
        install(context).unwrap();

        let installed = current().unwrap();
        assert_eq!(installed.user().initials, "PS");
        assert_eq!(installed.snapshot().accounts.len(), 5);

        let err = install(FinancialContext::demo()).unwrap_err();
        assert!(matches!(err, DashboardError::ContextAlreadyInstalled));
        assert_eq!(current().unwrap().user().name, "Priya Sharma");
    }

    #[test]
    fn test_clones_share_the_snapshot() {
        let context = FinancialContext::demo();
        let copy = context.clone();
        assert!(std::ptr::eq(context.snapshot(), copy.snapshot()));
    }
}
