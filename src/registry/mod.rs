//! Key-indexed motion table and dispatcher.
//!
//! Built-in motions resolve through [`MotionId`]. Callers extend or override
//! bindings by handing custom [`Motion`] records to the registry; a record
//! whose key matches an existing entry replaces it outright.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::motion::{Category, MotionContext, MotionId};

type ConditionFn = dyn Fn(&dyn MotionContext) -> bool;
type ExecuteFn = dyn Fn(&mut dyn MotionContext, Option<&str>);

#[derive(Clone)]
enum Action {
    Builtin(MotionId),
    Custom {
        condition: Rc<ConditionFn>,
        execute: Rc<ExecuteFn>,
    },
}

/// One key binding: trigger key, category, guard and handler.
#[derive(Clone)]
pub struct Motion {
    key: String,
    category: Category,
    action: Action,
}

impl Motion {
    /// Bind a built-in motion to `key`.
    pub fn builtin(id: MotionId, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            category: id.category(),
            action: Action::Builtin(id),
        }
    }

    /// A caller-defined motion. `execute` receives the optional argument
    /// passed to [`Registry::execute`].
    pub fn custom<C, E>(key: impl Into<String>, category: Category, condition: C, execute: E) -> Self
    where
        C: Fn(&dyn MotionContext) -> bool + 'static,
        E: Fn(&mut dyn MotionContext, Option<&str>) + 'static,
    {
        Self {
            key: key.into(),
            category,
            action: Action::Custom {
                condition: Rc::new(condition),
                execute: Rc::new(execute),
            },
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The built-in this record runs, if it is not a custom motion.
    pub fn builtin_id(&self) -> Option<MotionId> {
        match self.action {
            Action::Builtin(id) => Some(id),
            Action::Custom { .. } => None,
        }
    }

    pub fn condition(&self, ctx: &dyn MotionContext) -> bool {
        match &self.action {
            Action::Builtin(id) => id.condition(ctx),
            Action::Custom { condition, .. } => condition(ctx),
        }
    }

    pub fn execute(&self, ctx: &mut dyn MotionContext, args: Option<&str>) {
        match &self.action {
            Action::Builtin(id) => id.execute(ctx),
            Action::Custom { execute, .. } => execute(ctx, args),
        }
    }
}

impl fmt::Debug for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Motion")
            .field("key", &self.key)
            .field("category", &self.category)
            .field("builtin", &self.builtin_id())
            .finish()
    }
}

/// One record per built-in key, in declaration order.
pub fn builtin_motions() -> Vec<Motion> {
    MotionId::ALL
        .into_iter()
        .flat_map(|id| id.keys().iter().map(move |key| Motion::builtin(id, *key)))
        .collect()
}

/// Result of a dispatch. Only `Handled` means a motion ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// No motion is bound to the key.
    Unknown,
    /// A motion is bound but its guard rejected the current state.
    Blocked,
}

impl Dispatch {
    pub fn is_handled(self) -> bool {
        self == Dispatch::Handled
    }
}

/// Flat `key -> Motion` map. Later registrations win.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    motions: HashMap<String, Motion>,
    /// Keys in first-registration order, for stable listings.
    order: Vec<String>,
}

impl Registry {
    pub fn new(motions: impl IntoIterator<Item = Motion>) -> Self {
        let mut registry = Self::default();
        for motion in motions {
            registry.insert(motion);
        }
        registry
    }

    pub fn with_builtins() -> Self {
        Self::new(builtin_motions())
    }

    /// Built-ins followed by `custom`, so custom records override built-ins
    /// bound to the same key.
    pub fn with_custom(custom: impl IntoIterator<Item = Motion>) -> Self {
        Self::new(builtin_motions().into_iter().chain(custom))
    }

    pub fn insert(&mut self, motion: Motion) {
        if !self.motions.contains_key(motion.key()) {
            self.order.push(motion.key().to_string());
        }
        self.motions.insert(motion.key().to_string(), motion);
    }

    /// Drop every binding whose key is not in `enabled`.
    pub fn restrict<S: AsRef<str>>(mut self, enabled: &[S]) -> Self {
        let allowed = |key: &str| enabled.iter().any(|e| e.as_ref() == key);
        self.motions.retain(|key, _| allowed(key.as_str()));
        self.order.retain(|key| allowed(key.as_str()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Motion> {
        self.motions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.motions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    /// All bound keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Look up `key`, check its guard and run it.
    pub fn execute(&self, key: &str, ctx: &mut dyn MotionContext, args: Option<&str>) -> Dispatch {
        let Some(motion) = self.motions.get(key) else {
            trace!(key, "no motion bound");
            return Dispatch::Unknown;
        };
        if !motion.condition(ctx) {
            debug!(key, mode = %ctx.mode(), "motion not applicable");
            return Dispatch::Blocked;
        }
        motion.execute(ctx, args);
        debug!(key, cursor = ctx.cursor(), mode = %ctx.mode(), "motion executed");
        Dispatch::Handled
    }

    /// Keys whose guard passes right now. Drives UI hints only.
    pub fn available_keys(&self, ctx: &dyn MotionContext) -> Vec<&str> {
        self.order
            .iter()
            .filter(|key| self.motions.get(*key).is_some_and(|m| m.condition(ctx)))
            .map(String::as_str)
            .collect()
    }
}
