use crate::core::toggler::control_id;
use crate::domain::model::Visibility;
use crate::domain::ports::ElementDirectory;
use std::collections::BTreeMap;

const DISPLAY: &str = "display";
const DISPLAY_SHOWN: &str = "block";
const DISPLAY_HIDDEN: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    pub tag: String,
    pub id: String,
    pub style: BTreeMap<String, String>,
}

/// A page held in memory: elements in document order, each with inline styles.
///
/// Visibility follows the browser rule the toggler relies on: a section is
/// shown only when its `display` style is `block`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPage {
    elements: Vec<PageElement>,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, tag: &str, id: &str) -> &mut PageElement {
        self.elements.push(PageElement {
            tag: tag.to_string(),
            id: id.to_string(),
            style: BTreeMap::new(),
        });
        // 剛 push 進去，一定有最後一個元素
        let last = self.elements.len() - 1;
        &mut self.elements[last]
    }

    /// Adds a `div` section and its `button` control. `shown` of `None`
    /// leaves `display` unset, as plain markup would.
    pub fn add_section(&mut self, id: &str, shown: Option<bool>) {
        self.add_bare_section("div", id, shown);
        self.add_element("button", &control_id(id));
    }

    /// Adds a section without any control element.
    pub fn add_bare_section(&mut self, tag: &str, id: &str, shown: Option<bool>) {
        let element = self.add_element(tag, id);
        if let Some(shown) = shown {
            let display = if shown { DISPLAY_SHOWN } else { DISPLAY_HIDDEN };
            element.style.insert(DISPLAY.to_string(), display.to_string());
        }
    }

    pub fn with_section(mut self, id: &str, shown: Option<bool>) -> Self {
        self.add_section(id, shown);
        self
    }

    pub fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut PageElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.element(id)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.style(id, DISPLAY) == Some(DISPLAY_SHOWN)
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }
}

impl ElementDirectory for InMemoryPage {
    fn ids_by_tag(&self, tag: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.tag.eq_ignore_ascii_case(tag))
            .map(|e| e.id.clone())
            .collect()
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn visibility(&self, id: &str) -> Option<Visibility> {
        self.element(id).map(|_| {
            if self.is_shown(id) {
                Visibility::Shown
            } else {
                Visibility::Hidden
            }
        })
    }

    fn set_visibility(&mut self, id: &str, visibility: Visibility) -> bool {
        let display = match visibility {
            Visibility::Shown => DISPLAY_SHOWN,
            Visibility::Hidden => DISPLAY_HIDDEN,
        };
        self.set_style(id, DISPLAY, display)
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.style.insert(property.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }
}
