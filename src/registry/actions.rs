//! action registration records

use std::sync::Arc;

use serde_json::Value;

use super::context::{ActionCtx, ActionData, ActionOutcome};

/// boxed action handler
pub type ActionHandler = Arc<dyn Fn(ActionData<'_>) -> ActionOutcome + Send + Sync>;

/// hook that builds custom handler data from the invocation context
pub type GenerateDataFn = Arc<dyn Fn(&ActionCtx<'_>) -> Value + Send + Sync>;

/// one action as supplied to registration
///
/// a bare closure becomes `{overridable: true, override_existing: false}`;
/// builder methods opt into the rest.
pub struct ActionEntry {
    pub(crate) handler: ActionHandler,
    pub(crate) generate_data: Option<GenerateDataFn>,
    pub(crate) overridable: bool,
    pub(crate) override_existing: bool,
}

impl ActionEntry {
    /// normalize a bare handler closure into a full entry
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(ActionData<'_>) + Send + Sync + 'static,
    {
        Self::new(move |data| {
            handler(data);
            ActionOutcome::Completed
        })
    }

    /// entry from a handler that reports its outcome (e.g. a detached task)
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(ActionData<'_>) -> ActionOutcome + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            generate_data: None,
            overridable: true,
            override_existing: false,
        }
    }

    /// attach a generate-data hook; its output is passed to the handler
    pub fn generate_data<G>(mut self, generate: G) -> Self
    where
        G: Fn(&ActionCtx<'_>) -> Value + Send + Sync + 'static,
    {
        self.generate_data = Some(Arc::new(generate));
        self
    }

    pub fn overridable(mut self, overridable: bool) -> Self {
        self.overridable = overridable;
        self
    }

    /// confirm replacing an existing overridable action of the same name
    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }
}

/// action as stored in the registry
pub(crate) struct RegisteredAction {
    pub(crate) handler: ActionHandler,
    pub(crate) generate_data: Option<GenerateDataFn>,
    pub(crate) overridable: bool,
}
