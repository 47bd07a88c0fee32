//! Lifecycle hook table.
//!
//! Callers may wrap each lifecycle stage with `before`/`after` callbacks,
//! each in a synchronous and an asynchronous flavor. Unset slots are
//! no-ops. The lifecycle fires the synchronous callback first, then
//! awaits the asynchronous one.

use std::future::Future;
use std::pin::Pin;

use crate::options::SyncContext;

/// Synchronous hook callback.
pub type Hook = Box<dyn Fn(&SyncContext) + Send + Sync>;

/// Asynchronous hook callback. The returned future must own what it
/// needs; clone out of the context before going async.
pub type AsyncHook =
    Box<dyn Fn(&SyncContext) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Lifecycle stages a hook pair can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    /// Workspace bootstrap.
    Init,
    /// Workspace removal.
    Reset,
    /// Local synchronization.
    SyncLocal,
    /// Remote synchronization.
    SyncRemote,
}

/// Wrap a closure as a [`Hook`].
pub fn hook(f: impl Fn(&SyncContext) + Send + Sync + 'static) -> Hook {
    Box::new(f)
}

/// Wrap a future-returning closure as an [`AsyncHook`].
pub fn async_hook<F, Fut>(f: F) -> AsyncHook
where
    F: Fn(&SyncContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Box::new(move |ctx| Box::pin(f(ctx)))
}

/// Optional callbacks around each lifecycle stage.
#[derive(Default)]
pub struct Hooks {
    pub before_init: Option<Hook>,
    pub before_init_async: Option<AsyncHook>,
    pub after_init: Option<Hook>,
    pub after_init_async: Option<AsyncHook>,

    pub before_reset: Option<Hook>,
    pub before_reset_async: Option<AsyncHook>,
    pub after_reset: Option<Hook>,
    pub after_reset_async: Option<AsyncHook>,

    pub before_sync_local: Option<Hook>,
    pub before_sync_local_async: Option<AsyncHook>,
    pub after_sync_local: Option<Hook>,
    pub after_sync_local_async: Option<AsyncHook>,

    pub before_sync_remote: Option<Hook>,
    pub before_sync_remote_async: Option<AsyncHook>,
    pub after_sync_remote: Option<Hook>,
    pub after_sync_remote_async: Option<AsyncHook>,
}

impl Hooks {
    /// Fire the callbacks registered before `stage`.
    pub async fn fire_before(&self, stage: HookStage, ctx: &SyncContext) {
        let (hook, hook_async) = match stage {
            HookStage::Init => (&self.before_init, &self.before_init_async),
            HookStage::Reset => (&self.before_reset, &self.before_reset_async),
            HookStage::SyncLocal => (&self.before_sync_local, &self.before_sync_local_async),
            HookStage::SyncRemote => (&self.before_sync_remote, &self.before_sync_remote_async),
        };
        Self::fire(hook.as_ref(), hook_async.as_ref(), ctx).await;
    }

    /// Fire the callbacks registered after `stage`.
    pub async fn fire_after(&self, stage: HookStage, ctx: &SyncContext) {
        let (hook, hook_async) = match stage {
            HookStage::Init => (&self.after_init, &self.after_init_async),
            HookStage::Reset => (&self.after_reset, &self.after_reset_async),
            HookStage::SyncLocal => (&self.after_sync_local, &self.after_sync_local_async),
            HookStage::SyncRemote => (&self.after_sync_remote, &self.after_sync_remote_async),
        };
        Self::fire(hook.as_ref(), hook_async.as_ref(), ctx).await;
    }

    async fn fire(hook: Option<&Hook>, hook_async: Option<&AsyncHook>, ctx: &SyncContext) {
        if let Some(hook) = hook {
            hook(ctx);
        }
        if let Some(hook) = hook_async {
            hook(ctx).await;
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}
