use serde::Deserialize;
use std::collections::HashMap;

/// Phone number to display name, loaded once at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct KnownParticipants(HashMap<String, String>);

impl KnownParticipants {
    /// Display name for `caller`, if they are on the list.
    pub fn display_name(&self, caller: &str) -> Option<&str> {
        self.0.get(caller).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for KnownParticipants
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(number, name)| (number.into(), name.into()))
                .collect(),
        )
    }
}
