use std::collections::BTreeSet;

/// How a menu item or restaurant should be presented given the user's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Emphasized,
    Normal,
}

/// Tags the user chose to emphasize. Membership is by exact string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagPreferenceSet {
    tags: BTreeSet<String>,
}

impl TagPreferenceSet {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn toggle(&mut self, tag: &str) -> bool {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
        true
    }

    /// Emphasized when any of `tags` matches a preference, ignoring case.
    pub fn highlight_for<S: AsRef<str>>(&self, tags: &[S]) -> Highlight {
        let matched = tags.iter().any(|tag| {
            self.tags
                .iter()
                .any(|preferred| preferred.eq_ignore_ascii_case(tag.as_ref().trim()))
        });

        if matched {
            Highlight::Emphasized
        } else {
            Highlight::Normal
        }
    }
}
