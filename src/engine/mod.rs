//! dispatch engine
//!
//! one [`Dispatcher`] owns a handler [`Registry`] and a [`MemoCache`] and
//! turns host events into action invocations: resolve the matched target,
//! fetch or parse the element's instructions, evaluate switches, run
//! handlers. dispatch is synchronous and never fails; everything observable
//! comes back in a [`DispatchOutcome`].

mod exec;
mod memo;
mod result;
mod target;

pub use memo::MemoCache;
pub use result::DispatchOutcome;
pub use target::{matched_target, matched_target_pierce};

use std::sync::Arc;

use chrono::Utc;

use crate::config::EngineConfig;
use crate::dom::{DomAdapter, ElementId, EventState, ListenerHost};
use crate::registry::{ActionEntry, GenerateDataFn, Registry, SwitchEntry};

/// custom attribute naming: event name in, attribute name out
pub type AttributeNameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// custom matched-target resolution, replacing both built-in walks
pub type MatchedTargetFn =
    Arc<dyn Fn(&dyn DomAdapter, &EventState, &str) -> Option<ElementId> + Send + Sync>;

/// the execution engine
pub struct Dispatcher {
    registry: Registry,
    memo: MemoCache,
    attribute_prefix: String,
    pierce_selector: Option<String>,
    attribute_name_fn: Option<AttributeNameFn>,
    matched_target_fn: Option<MatchedTargetFn>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// dispatcher with the built-in actions and switches and `data-` naming
    pub fn new() -> Self {
        Self {
            registry: Registry::with_builtins(),
            memo: MemoCache::new(),
            attribute_prefix: "data-".to_string(),
            pierce_selector: None,
            attribute_name_fn: None,
            matched_target_fn: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.attribute_prefix = config.attribute_prefix.clone();
        dispatcher.pierce_selector = config.pierce_selector.clone();
        dispatcher
    }

    /// resolve matched targets by piercing shadow roots, bounded by the
    /// closest ancestor matching `selector`
    pub fn with_pierce_selector(mut self, selector: impl Into<String>) -> Self {
        let selector = selector.into();
        if self.matched_target_fn.is_some() {
            eprintln!(
                "warning: pierce selector ({}) is useless when a custom matched-target resolver is set",
                selector
            );
        }
        self.pierce_selector = Some(selector);
        self
    }

    /// replace the `data-{event}` attribute naming
    pub fn with_attribute_name_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.attribute_name_fn = Some(Arc::new(f));
        self
    }

    /// replace matched-target resolution entirely
    pub fn with_matched_target_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn DomAdapter, &EventState, &str) -> Option<ElementId> + Send + Sync + 'static,
    {
        if let Some(selector) = &self.pierce_selector {
            eprintln!(
                "warning: pierce selector ({}) is useless when a custom matched-target resolver is set",
                selector
            );
        }
        self.matched_target_fn = Some(Arc::new(f));
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// register one action; see [`Registry::register_action`]
    pub fn register_action(&mut self, name: &str, entry: ActionEntry) -> &mut Self {
        self.registry.register_action(name, entry);
        self
    }

    /// register several actions
    pub fn register_actions<N, I>(&mut self, entries: I) -> &mut Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, ActionEntry)>,
    {
        self.registry.register_actions(entries);
        self
    }

    /// register several actions with a shared default generate-data hook
    pub fn register_actions_with<N, I>(&mut self, entries: I, generate: GenerateDataFn) -> &mut Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, ActionEntry)>,
    {
        self.registry.register_actions_with(entries, generate);
        self
    }

    /// register one switch
    pub fn register_switch(&mut self, name: &str, entry: SwitchEntry) -> &mut Self {
        self.registry.register_switch(name, entry);
        self
    }

    /// register several switches
    pub fn register_switches<N, I>(&mut self, entries: I) -> &mut Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, SwitchEntry)>,
    {
        self.registry.register_switches(entries);
        self
    }

    /// attribute consulted for `event_name`, `data-{event}` by default
    pub fn attribute_name(&self, event_name: &str) -> String {
        match &self.attribute_name_fn {
            Some(f) => f(event_name),
            None => format!("{}{}", self.attribute_prefix, event_name),
        }
    }

    /// attach native listeners for `event_names` on `el` through the host
    pub fn add_listeners(
        &mut self,
        host: &mut dyn ListenerHost,
        el: ElementId,
        event_names: &[&str],
    ) -> &mut Self {
        for name in event_names {
            host.add_listener(el, name);
        }
        self
    }

    /// detach listeners and forget the element's memoized parses
    pub fn remove_listeners(
        &mut self,
        host: &mut dyn ListenerHost,
        el: ElementId,
        event_names: &[&str],
    ) -> &mut Self {
        for name in event_names {
            host.remove_listener(el, name);
        }
        self.memo.evict(el);
        self
    }

    /// true when the element has memoized parses
    pub fn has_memoized(&self, el: ElementId) -> bool {
        self.memo.contains(el)
    }

    /// the listener entry point: run one event occurrence end to end
    ///
    /// returns `None` when no element on the path carries the attribute (or
    /// it is empty); never errors. handlers that detach async work are not
    /// awaited.
    pub fn dispatch(&mut self, dom: &dyn DomAdapter, event: &EventState) -> Option<DispatchOutcome> {
        let event_name = event.name();
        let attribute_name = self.attribute_name(event_name);

        let matched_target = self.resolve_matched_target(dom, event, &attribute_name)?;

        let attribute = dom.attribute(matched_target, &attribute_name)?;
        if attribute.is_empty() {
            return None;
        }

        let parsed_actions = self.memo.get_or_parse(matched_target, event_name, &attribute);

        let executed_actions = exec::execute_parsed_actions(
            &self.registry,
            dom,
            event,
            event_name,
            matched_target,
            &parsed_actions,
        );

        Some(DispatchOutcome {
            matched_target,
            attribute_name,
            parsed_actions,
            executed_actions,
            timestamp: Utc::now(),
        })
    }

    fn resolve_matched_target(
        &self,
        dom: &dyn DomAdapter,
        event: &EventState,
        attribute_name: &str,
    ) -> Option<ElementId> {
        if let Some(resolve) = &self.matched_target_fn {
            return resolve(dom, event, attribute_name);
        }

        if let Some(selector) = self.pierce_selector.as_deref().filter(|s| !s.is_empty()) {
            return target::matched_target_pierce(dom, event, attribute_name, selector);
        }

        target::matched_target(dom, event, attribute_name)
    }
}
