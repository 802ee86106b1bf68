use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::auth::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedSet {
    ids: HashSet<String>,
}

impl SavedSet {
    pub fn toggle(&mut self, job_id: &str) -> Toggle {
        if self.ids.remove(job_id) {
            Toggle::Removed
        } else {
            self.ids.insert(job_id.to_string());
            Toggle::Added
        }
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.ids.contains(job_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn sorted(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<String> for SavedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        SavedSet {
            ids: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SavedScope {
    Guest,
    User(String),
}

impl SavedScope {
    pub fn of(session: &Session) -> Self {
        match session.identity() {
            Some(identity) => SavedScope::User(identity.uid.clone()),
            None => SavedScope::Guest,
        }
    }

    fn key(&self) -> String {
        match self {
            SavedScope::Guest => "guest".to_string(),
            SavedScope::User(uid) => format!("user:{uid}"),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "guest" => Some(SavedScope::Guest),
            other => other
                .strip_prefix("user:")
                .map(|uid| SavedScope::User(uid.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StoredSavedJobs {
    Scoped(BTreeMap<String, Vec<String>>),
    Legacy(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedJobs {
    scopes: BTreeMap<SavedScope, SavedSet>,
}

impl SavedJobs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self, scope: &SavedScope) -> Option<&SavedSet> {
        self.scopes.get(scope)
    }

    pub fn scope_mut(&mut self, scope: SavedScope) -> &mut SavedSet {
        self.scopes.entry(scope).or_default()
    }

    pub fn toggle(&mut self, scope: SavedScope, job_id: &str) -> Toggle {
        self.scope_mut(scope).toggle(job_id)
    }

    pub fn contains(&self, scope: &SavedScope, job_id: &str) -> bool {
        self.scope(scope).is_some_and(|set| set.contains(job_id))
    }

    pub fn to_stored(&self) -> StoredSavedJobs {
        StoredSavedJobs::Scoped(
            self.scopes
                .iter()
                .filter(|(_, set)| !set.is_empty())
                .map(|(scope, set)| (scope.key(), set.sorted()))
                .collect(),
        )
    }
}

impl From<StoredSavedJobs> for SavedJobs {
    fn from(stored: StoredSavedJobs) -> Self {
        let mut saved = SavedJobs::new();
        match stored {
            StoredSavedJobs::Legacy(ids) => {
                *saved.scope_mut(SavedScope::Guest) = ids.into_iter().collect();
            }
            StoredSavedJobs::Scoped(map) => {
                for (key, ids) in map {
                    match SavedScope::from_key(&key) {
                        Some(scope) => *saved.scope_mut(scope) = ids.into_iter().collect(),
                        None => tracing::warn!("ignoring saved jobs under unknown scope {}", key),
                    }
                }
            }
        }
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_toggle_reports_change() {
        let mut set = SavedSet::default();
        assert_eq!(set.toggle("job1"), Toggle::Added);
        assert!(set.contains("job1"));
        assert_eq!(set.toggle("job1"), Toggle::Removed);
        assert!(!set.contains("job1"));
    }

    #[test]
    fn test_unknown_ids_are_recorded() {
        let mut saved = SavedJobs::new();
        assert_eq!(saved.toggle(SavedScope::Guest, "deleted-long-ago"), Toggle::Added);
        assert!(saved.contains(&SavedScope::Guest, "deleted-long-ago"));
    }

    #[test]
    fn test_scopes_are_isolated() {
        let mut saved = SavedJobs::new();
        let alice = SavedScope::User("alice".into());
        let bob = SavedScope::User("bob".into());
        saved.toggle(alice.clone(), "job1");
        assert!(saved.contains(&alice, "job1"));
        assert!(!saved.contains(&bob, "job1"));
        assert!(!saved.contains(&SavedScope::Guest, "job1"));
    }

    #[test]
    fn test_legacy_list_loads_into_guest_scope() {
        let stored: StoredSavedJobs = serde_json::from_value(json!(["job1", "job3"])).unwrap();
        let saved = SavedJobs::from(stored);
        assert!(saved.contains(&SavedScope::Guest, "job3"));

        let stored: StoredSavedJobs =
            serde_json::from_value(json!({"user:admin1": ["job2"], "bogus": ["x"]})).unwrap();
        let saved = SavedJobs::from(stored);
        assert!(saved.contains(&SavedScope::User("admin1".into()), "job2"));
        assert_eq!(serde_json::to_value(saved.to_stored()).unwrap(), json!({"user:admin1": ["job2"]}));
    }

    proptest! {
        #[test]
        fn prop_double_toggle_is_identity(
            initial in proptest::collection::hash_set("[a-z0-9]{1,6}", 0..8),
            id in "[a-z0-9]{1,6}",
        ) {
            let mut set: SavedSet = initial.into_iter().collect();
            let before = set.clone();
            let was = set.contains(&id);
            set.toggle(&id);
            prop_assert_ne!(set.contains(&id), was);
            set.toggle(&id);
            prop_assert_eq!(set.contains(&id), was);
            prop_assert_eq!(set, before);
        }
    }
}
