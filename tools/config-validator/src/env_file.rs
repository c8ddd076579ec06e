//! `.env` parsing.
//!
//! Only the plain `KEY=VALUE` form is understood. Values are kept verbatim after
//! trimming, so `KEY="x"` yields `"x"` with its quotes.

/// Insertion-ordered variables from one env file. A repeated key keeps its
/// first position and takes the last value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvVarMap {
    entries: Vec<(String, String)>,
}

impl EnvVarMap {
    pub fn parse(content: &str) -> Self {
        let mut map = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                map.insert(key.trim(), value.trim());
            }
        }

        map
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}
