//! switch registration records

use std::sync::Arc;

use super::context::SwitchCtx;

/// boxed switch handler
pub type SwitchHandler = Arc<dyn Fn(&SwitchCtx<'_>) -> bool + Send + Sync>;

/// one switch as supplied to registration
///
/// a bare closure becomes `{overridable: true, override_existing: false,
/// dynamic: false}`; builder methods opt into the rest.
pub struct SwitchEntry {
    pub(crate) handler: SwitchHandler,
    pub(crate) overridable: bool,
    pub(crate) override_existing: bool,
    pub(crate) dynamic: bool,
}

impl SwitchEntry {
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(&SwitchCtx<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            overridable: true,
            override_existing: false,
            dynamic: false,
        }
    }

    pub fn overridable(mut self, overridable: bool) -> Self {
        self.overridable = overridable;
        self
    }

    /// confirm replacing an existing overridable switch of the same name
    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// a dynamic switch is re-evaluated on every reference within a dispatch
    /// instead of being served from the per-dispatch cache
    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }
}

/// switch as stored in the registry
pub(crate) struct RegisteredSwitch {
    pub(crate) handler: SwitchHandler,
    pub(crate) overridable: bool,
    pub(crate) dynamic: bool,
}
