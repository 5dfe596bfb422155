use std::collections::HashMap;

/// Per-cookie hit counts that remember the order cookies were first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    order: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, cookie: &str) {
        match self.index.get(cookie) {
            Some(&slot) => self.order[slot].1 += 1,
            None => {
                self.index.insert(cookie.to_string(), self.order.len());
                self.order.push((cookie.to_string(), 1));
            }
        }
    }

    pub fn count(&self, cookie: &str) -> u64 {
        self.index
            .get(cookie)
            .map(|&slot| self.order[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn max_count(&self) -> Option<u64> {
        self.order.iter().map(|(_, count)| *count).max()
    }

    /// Cookies and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|(cookie, count)| (cookie.as_str(), *count))
    }

    /// Every cookie sharing the highest count, in first-seen order.
    pub fn leaders(&self) -> Vec<String> {
        let Some(max_count) = self.max_count() else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, count)| *count == max_count)
            .map(|(cookie, _)| cookie.to_string())
            .collect()
    }
}
