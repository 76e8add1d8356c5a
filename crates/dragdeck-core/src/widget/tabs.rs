//! Tab switcher state.

use super::state::{ManagedValue, ValueSource};
use crate::error::{DeckError, Result};
use crate::list::{Identified, OrderedList};
use serde::{Deserialize, Serialize};

/// A single tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl Identified for Tab {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Result of selecting a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChange {
    /// The tab the user asked for; report this to the change listener.
    pub requested: String,
    /// Whether the visible tab switched (always `false` when controlled).
    pub switched: bool,
}

/// Tabs plus the active tab id.
#[derive(Debug, Clone)]
pub struct TabSet {
    tabs: OrderedList<Tab>,
    active: ManagedValue<Option<String>>,
}

impl TabSet {
    /// Create a tab set whose active tab is owned by the caller.
    ///
    /// `active` must name one of `tabs` when set.
    pub fn controlled(tabs: Vec<Tab>, active: Option<String>) -> Result<Self> {
        let tabs = OrderedList::new(tabs)?;
        ensure_known(&tabs, active.as_deref())?;
        Ok(Self {
            tabs,
            active: ManagedValue::new(ValueSource::Controlled(active)),
        })
    }

    /// Create a tab set that manages its own active tab, starting at the first.
    pub fn uncontrolled(tabs: Vec<Tab>) -> Result<Self> {
        let tabs = OrderedList::new(tabs)?;
        let first = tabs.iter().next().map(|tab| tab.id.clone());
        Ok(Self {
            tabs,
            active: ManagedValue::new(ValueSource::Uncontrolled(first)),
        })
    }

    /// Tabs in order.
    pub fn tabs(&self) -> &OrderedList<Tab> {
        &self.tabs
    }

    /// Id of the visible tab.
    pub fn active_id(&self) -> Option<&str> {
        self.active.get().as_deref()
    }

    /// The visible tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_id().and_then(|id| self.tabs.get(id))
    }

    /// Handle a click on tab `id`.
    pub fn select(&mut self, id: &str) -> Result<TabChange> {
        ensure_known(&self.tabs, Some(id))?;
        let switched = self.active_id() != Some(id) && self.active.request(Some(id.to_string()));
        Ok(TabChange {
            requested: id.to_string(),
            switched,
        })
    }

    /// Apply the owner's active tab (controlled mode only).
    ///
    /// Returns `false` when the tab set is uncontrolled.
    pub fn sync_active(&mut self, id: Option<String>) -> Result<bool> {
        ensure_known(&self.tabs, id.as_deref())?;
        Ok(self.active.sync(id))
    }
}

fn ensure_known(tabs: &OrderedList<Tab>, id: Option<&str>) -> Result<()> {
    match id {
        Some(id) if !tabs.contains(id) => Err(DeckError::ItemNotFound { id: id.to_string() }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<Tab> {
        vec![
            Tab::new("home", "Home"),
            Tab::new("profile", "Profile"),
            Tab::new("settings", "Settings"),
        ]
    }

    #[test]
    fn test_uncontrolled_defaults_to_first_tab() {
        let set = TabSet::uncontrolled(tabs()).unwrap();
        assert_eq!(set.active_id(), Some("home"));
        assert_eq!(set.active_tab().map(|tab| tab.label.as_str()), Some("Home"));
    }

    #[test]
    fn test_uncontrolled_select_switches() {
        let mut set = TabSet::uncontrolled(tabs()).unwrap();
        let change = set.select("settings").unwrap();
        assert!(change.switched);
        assert_eq!(set.active_id(), Some("settings"));

        let again = set.select("settings").unwrap();
        assert!(!again.switched);
    }

    #[test]
    fn test_controlled_select_only_requests() {
        let mut set = TabSet::controlled(tabs(), Some("profile".to_string())).unwrap();
        let change = set.select("home").unwrap();
        assert_eq!(change.requested, "home");
        assert!(!change.switched);
        assert_eq!(set.active_id(), Some("profile"));

        assert!(set.sync_active(Some("home".to_string())).unwrap());
        assert_eq!(set.active_id(), Some("home"));
    }

    #[test]
    fn test_unknown_tab() {
        let mut set = TabSet::uncontrolled(tabs()).unwrap();
        assert!(matches!(set.select("nope"), Err(DeckError::ItemNotFound { .. })));
    }

    #[test]
    fn test_controlled_rejects_unknown_active() {
        assert!(matches!(
            TabSet::controlled(tabs(), Some("billing".to_string())),
            Err(DeckError::ItemNotFound { id }) if id == "billing"
        ));

        let mut set = TabSet::controlled(tabs(), None).unwrap();
        assert!(matches!(
            set.sync_active(Some("billing".to_string())),
            Err(DeckError::ItemNotFound { .. })
        ));
        assert_eq!(set.active_id(), None);

        assert!(set.sync_active(Some("settings".to_string())).unwrap());
        assert!(set.sync_active(None).unwrap());
        assert_eq!(set.active_id(), None);
    }

    #[test]
    fn test_empty_tab_set() {
        let set = TabSet::uncontrolled(Vec::new()).unwrap();
        assert_eq!(set.active_id(), None);
    }
}
