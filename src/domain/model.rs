use serde::{Deserialize, Serialize};

/// 區塊的顯示狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// 按鈕的呈現狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Selected,
    Deselected,
}

/// What is expanded: every section, nothing, or one named section.
///
/// Used both for shorthand targets (`all` / `none` / id) and for the
/// remembered record, whose encoding lives in `core::memory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Nothing,
    Section(String),
}

impl Selection {
    /// 解析 shorthand 目標字串
    pub fn from_target(target: &str) -> Self {
        match target {
            "all" => Selection::All,
            "none" => Selection::Nothing,
            id => Selection::Section(id.to_string()),
        }
    }
}

/// Style properties applied to a section's control for each state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlStyle {
    selected: Vec<(String, String)>,
    deselected: Vec<(String, String)>,
}

impl ControlStyle {
    pub fn new<I, J, K, V>(selected: I, deselected: J) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        J: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            selected: selected
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            deselected: deselected
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 舊版設定：只給兩個邊框顏色，其餘樣式固定
    pub fn from_colors(select_color: &str, deselect_color: &str) -> Self {
        Self::new(
            [
                ("border-color", select_color),
                ("background-color", "white"),
                ("border-width", "1px"),
                ("border-style", "solid"),
                ("border-radius", "4px"),
            ],
            [
                ("border-color", deselect_color),
                ("background-color", "#f0f0f0"),
                ("border-width", "1px"),
                ("border-style", "solid"),
                ("border-radius", "4px"),
            ],
        )
    }

    pub fn properties(&self, state: ControlState) -> &[(String, String)] {
        match state {
            ControlState::Selected => &self.selected,
            ControlState::Deselected => &self.deselected,
        }
    }
}

/// Ordered shorthand → target mapping. Iteration order is insertion order;
/// re-inserting a key replaces its target but keeps its position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shorthands {
    entries: Vec<(String, Selection)>,
}

impl Shorthands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, shorthand: impl Into<String>, target: &str) {
        let shorthand = shorthand.into();
        let target = Selection::from_target(target);
        match self.entries.iter_mut().find(|(key, _)| *key == shorthand) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((shorthand, target)),
        }
    }

    pub fn resolve(&self, shorthand: &str) -> Option<&Selection> {
        self.entries
            .iter()
            .find(|(key, _)| key == shorthand)
            .map(|(_, target)| target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.entries.iter().map(|(key, target)| (key.as_str(), target))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for Shorthands {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut shorthands = Shorthands::new();
        for (key, target) in iter {
            shorthands.insert(key, target.as_ref());
        }
        shorthands
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionState {
    pub id: String,
    pub shown: bool,
}

/// Point-in-time view of a controller, for display and assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TogglerSnapshot {
    pub memory_key: String,
    pub sections: Vec<SectionState>,
    pub all_expanded: bool,
    pub remembered: Option<String>,
}
