//! Coordination Context
//!
//! Host UIs usually require that every interaction with their widgets happens
//! on one designated execution context (the UI thread). Instead of relying on
//! an ambient thread, the session receives that context as an explicit
//! capability:
//!
//! 1. `CoordinationContext` trait - host-provided "switch to the UI context"
//! 2. `run_on` - switch, then run one step
//! 3. `InlineContext` - context for hosts without any UI affinity (console)
//!
//! Mutual exclusion between concurrent sessions holding the context is the
//! host's job, not this crate's.

use std::future::Future;

use async_trait::async_trait;

use crate::error::CoreResult;

// ============================================================================
// CoordinationContext Trait
// ============================================================================

/// Capability for moving the current session onto the host's UI context.
///
/// Implementations either resolve once the caller is running on the UI
/// context, or fail with `CoreError::Context`. Failures are fatal to the
/// session.
#[async_trait]
pub trait CoordinationContext: Send + Sync {
    /// Suspend until execution continues on the coordination context.
    async fn switch_to(&self) -> CoreResult<()>;

    /// Human-readable name used in log output.
    fn name(&self) -> &str {
        "ui"
    }
}

/// Switch to `context`, then run `step` there.
///
/// A failed switch is returned without running the step.
pub async fn run_on<C, F, T>(context: &C, step: F) -> CoreResult<T>
where
    C: CoordinationContext + ?Sized,
    F: Future<Output = CoreResult<T>>,
{
    context.switch_to().await?;
    tracing::trace!(context = context.name(), "running step on coordination context");
    step.await
}

// ============================================================================
// InlineContext
// ============================================================================

/// Coordination context for hosts that have no UI affinity.
///
/// Every task already counts as "on the UI context", so switching is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineContext;

#[async_trait]
impl CoordinationContext for InlineContext {
    async fn switch_to(&self) -> CoreResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "inline"
    }
}
