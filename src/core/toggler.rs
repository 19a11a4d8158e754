use crate::core::memory;
use crate::domain::model::{
    ControlState, ControlStyle, SectionState, Selection, Shorthands, TogglerSnapshot, Visibility,
};
use crate::domain::ports::{ElementDirectory, KeyValueStore, NavigationSource};

pub const CONTROL_SUFFIX: &str = "_button";
pub const DEFAULT_SECTION_TAG: &str = "div";

pub fn control_id(section_id: &str) -> String {
    format!("{}{}", section_id, CONTROL_SUFFIX)
}

#[derive(Debug, Clone)]
pub struct TogglerOptions {
    pub prefix: String,
    pub section_tag: String,
    pub style: ControlStyle,
    pub shorthands: Shorthands,
    pub scoped_memory: bool,
    pub list_parameter: Option<String>,
}

impl TogglerOptions {
    pub fn new(prefix: impl Into<String>, style: ControlStyle, shorthands: Shorthands) -> Self {
        Self {
            prefix: prefix.into(),
            section_tag: DEFAULT_SECTION_TAG.to_string(),
            style,
            shorthands,
            scoped_memory: true,
            list_parameter: None,
        }
    }

    pub fn with_section_tag(mut self, tag: impl Into<String>) -> Self {
        self.section_tag = tag.into();
        self
    }

    /// Key the record by address only, without the prefix.
    pub fn with_legacy_memory_key(mut self) -> Self {
        self.scoped_memory = false;
        self
    }

    /// Also accept `?<name>=a,b` listing several shorthands.
    pub fn with_list_parameter(mut self, name: impl Into<String>) -> Self {
        self.list_parameter = Some(name.into());
        self
    }
}

/// Expand/collapse controller for one family of sections on a page.
///
/// Opening a section with [`expand_uniquely`](Self::expand_uniquely) closes
/// the others. [`toggle`](Self::toggle) flips one section on its own. Every
/// operation writes the resulting state to the store so the next page load
/// can restore it.
pub struct Toggler<D: ElementDirectory, S: KeyValueStore> {
    directory: D,
    store: S,
    style: ControlStyle,
    section_ids: Vec<String>,
    all_expanded: bool,
    memory_key: String,
}

impl<D: ElementDirectory, S: KeyValueStore> Toggler<D, S> {
    pub fn new<N: NavigationSource>(
        options: TogglerOptions,
        directory: D,
        store: S,
        navigation: &N,
    ) -> Self {
        let section_ids: Vec<String> = directory
            .ids_by_tag(&options.section_tag)
            .into_iter()
            .filter(|id| !id.is_empty() && id.starts_with(&options.prefix))
            .collect();
        tracing::debug!(
            "Discovered {} '{}' sections with prefix '{}'",
            section_ids.len(),
            options.section_tag,
            options.prefix
        );

        let prefix = options.scoped_memory.then_some(options.prefix.as_str());
        let memory_key = memory::memory_key(&navigation.address(), prefix);

        let mut toggler = Self {
            directory,
            store,
            style: options.style.clone(),
            section_ids,
            all_expanded: false,
            memory_key,
        };

        // 網址參數優先，否則用上次記住的狀態
        if !toggler.apply_query(&options, navigation) {
            toggler.restore();
        }

        toggler
    }

    /// Returns whether any query parameter selected the initial state.
    fn apply_query<N: NavigationSource>(
        &mut self,
        options: &TogglerOptions,
        navigation: &N,
    ) -> bool {
        let mut found_any = false;

        // 每個命中都會先全部收合，所以最後一個命中的 key 決定結果
        for (shorthand, target) in options.shorthands.iter() {
            if navigation.has_parameter(shorthand) {
                tracing::debug!("Query shorthand '{}' matched -> {:?}", shorthand, target);
                found_any = true;
                self.collapse_all();
                self.apply_target(target);
            }
        }

        if let Some(name) = &options.list_parameter {
            if let Some(value) = navigation.parameter(name).filter(|v| !v.is_empty()) {
                tracing::debug!("Query list parameter '{}' = '{}'", name, value);
                found_any = true;
                self.collapse_all();
                for shorthand in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    match options.shorthands.resolve(shorthand) {
                        Some(target) => self.apply_target(target),
                        None => tracing::warn!(
                            "Unknown shorthand '{}' in '{}' parameter; skipping",
                            shorthand,
                            name
                        ),
                    }
                }
            }
        }

        found_any
    }

    fn apply_target(&mut self, target: &Selection) {
        match target {
            Selection::All => self.expand_all(),
            Selection::Nothing => self.collapse_all(),
            Selection::Section(id) => {
                if !self.section_ids.iter().any(|known| known == id) {
                    tracing::warn!("Shorthand target '{}' is not a managed section", id);
                }
                self.toggle(id);
            }
        }
    }

    fn restore(&mut self) {
        let stored = match self.store.get(&self.memory_key) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Could not read remembered state: {}", e);
                None
            }
        };

        let Some(stored) = stored else {
            tracing::debug!("Nothing remembered under '{}'", self.memory_key);
            return;
        };

        tracing::debug!("Restoring remembered state '{}'", stored);
        match memory::decode(&stored) {
            Selection::All => self.expand_all(),
            Selection::Nothing => self.collapse_all(),
            Selection::Section(id) => self.expand_uniquely(&id),
        }
    }

    /// Opening one closes the others.
    ///
    /// * If everything is expanded, keep `id` open and close the rest.
    /// * Otherwise selecting the open section closes it, and selecting a
    ///   closed one opens it alone.
    pub fn expand_uniquely(&mut self, id: &str) {
        let Some(before) = self.directory.visibility(id) else {
            tracing::warn!("No section '{}' on the page; nothing to expand", id);
            self.all_expanded = false;
            return;
        };

        let was_all_expanded = self.all_expanded;
        self.hide_all();

        if was_all_expanded || !before.is_shown() {
            tracing::debug!("Expanding '{}' alone", id);
            self.show(id);
            self.remember(&Selection::Section(id.to_string()));
        } else {
            tracing::debug!("Collapsing '{}'", id);
            self.hide(id);
            self.remember(&Selection::Nothing);
        }

        self.all_expanded = false;
    }

    /// Flips one section without touching the others.
    pub fn toggle(&mut self, id: &str) {
        match self.directory.visibility(id) {
            Some(Visibility::Shown) => {
                tracing::debug!("Toggling '{}' off", id);
                self.hide(id);
                self.remember(&Selection::Nothing);
            }
            Some(Visibility::Hidden) => {
                tracing::debug!("Toggling '{}' on", id);
                self.show(id);
                self.remember(&Selection::Section(id.to_string()));
            }
            None => tracing::warn!("No section '{}' on the page; nothing to toggle", id),
        }
    }

    pub fn expand_all(&mut self) {
        for id in &self.section_ids {
            Self::apply(&mut self.directory, &self.style, id, Visibility::Shown);
        }
        self.all_expanded = true;
        self.remember(&Selection::All);
    }

    pub fn collapse_all(&mut self) {
        self.hide_all();
        self.all_expanded = false;
        self.remember(&Selection::Nothing);
    }

    fn hide_all(&mut self) {
        for id in &self.section_ids {
            Self::apply(&mut self.directory, &self.style, id, Visibility::Hidden);
        }
    }

    fn show(&mut self, id: &str) {
        Self::apply(&mut self.directory, &self.style, id, Visibility::Shown);
    }

    fn hide(&mut self, id: &str) {
        Self::apply(&mut self.directory, &self.style, id, Visibility::Hidden);
    }

    /// Sets a section and its control together; missing elements are skipped.
    fn apply(directory: &mut D, style: &ControlStyle, id: &str, visibility: Visibility) {
        directory.set_visibility(id, visibility);

        let control = control_id(id);
        if !directory.has_element(&control) {
            return;
        }
        let state = match visibility {
            Visibility::Shown => ControlState::Selected,
            Visibility::Hidden => ControlState::Deselected,
        };
        for (property, value) in style.properties(state) {
            directory.set_style(&control, property, value);
        }
    }

    fn remember(&mut self, selection: &Selection) {
        let value = memory::encode(selection);
        if let Err(e) = self.store.set(&self.memory_key, &value) {
            tracing::warn!("Could not remember state '{}': {}", value, e);
        }
    }

    pub fn section_ids(&self) -> &[String] {
        &self.section_ids
    }

    pub fn is_all_expanded(&self) -> bool {
        self.all_expanded
    }

    pub fn memory_key(&self) -> &str {
        &self.memory_key
    }

    /// The record currently in the store, if it can be read.
    pub fn remembered(&self) -> Option<Selection> {
        self.store
            .get(&self.memory_key)
            .ok()
            .flatten()
            .map(|value| memory::decode(&value))
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.directory
            .visibility(id)
            .map(Visibility::is_shown)
            .unwrap_or(false)
    }

    pub fn shown_sections(&self) -> Vec<&str> {
        self.section_ids
            .iter()
            .filter(|id| self.is_shown(id))
            .map(String::as_str)
            .collect()
    }

    pub fn snapshot(&self) -> TogglerSnapshot {
        TogglerSnapshot {
            memory_key: self.memory_key.clone(),
            sections: self
                .section_ids
                .iter()
                .map(|id| SectionState {
                    id: id.clone(),
                    shown: self.is_shown(id),
                })
                .collect(),
            all_expanded: self.all_expanded,
            remembered: self.store.get(&self.memory_key).ok().flatten(),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (D, S) {
        (self.directory, self.store)
    }
}
