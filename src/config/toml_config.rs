use crate::adapters::page::InMemoryPage;
use crate::core::toggler::{control_id, TogglerOptions, DEFAULT_SECTION_TAG};
use crate::domain::model::{ControlStyle, Shorthands};
use crate::utils::error::{Result, TogglerError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TogglerConfig {
    pub toggler: ControllerConfig,
    pub style: StyleConfig,
    #[serde(default)]
    pub shorthands: toml::Table,
    pub page: Option<PageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    pub prefix: String,
    pub section_tag: Option<String>,
    pub scoped_memory: Option<bool>,
    pub list_parameter: Option<String>,
}

/// Either full style maps or the older pair of border colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub selected: Option<toml::Table>,
    pub deselected: Option<toml::Table>,
    pub select_color: Option<String>,
    pub deselect_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub address: Option<String>,
    #[serde(default)]
    pub sections: Vec<PageSectionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSectionConfig {
    pub id: String,
    pub shown: Option<bool>,
    pub control: Option<bool>,
    pub tag: Option<String>,
}

impl TogglerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SITE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TogglerError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("toggler.prefix", &self.toggler.prefix)?;

        if let Some(tag) = &self.toggler.section_tag {
            validation::validate_non_empty_string("toggler.section_tag", tag)?;
        }
        if let Some(name) = &self.toggler.list_parameter {
            validation::validate_non_empty_string("toggler.list_parameter", name)?;
        }

        // 樣式與 shorthand 的檢查都在轉換時完成
        self.control_style()?;
        self.shorthand_map()?;

        if let Some(page) = &self.page {
            if let Some(address) = &page.address {
                validation::validate_address("page.address", address)?;
            }
            for section in &page.sections {
                validation::validate_non_empty_string("page.sections.id", &section.id)?;
            }
            validation::validate_unique_ids(
                "page.sections",
                page.sections.iter().map(|s| s.id.as_str()),
            )?;
        }

        Ok(())
    }

    pub fn control_style(&self) -> Result<ControlStyle> {
        let style = &self.style;
        let has_maps = style.selected.is_some() || style.deselected.is_some();
        let has_colors = style.select_color.is_some() || style.deselect_color.is_some();

        if has_maps && has_colors {
            return Err(TogglerError::ConfigError {
                message: "style: use either selected/deselected maps \
                          or select_color/deselect_color, not both"
                    .to_string(),
            });
        }

        if has_colors {
            let select =
                validation::validate_required_field("style.select_color", &style.select_color)?;
            let deselect =
                validation::validate_required_field("style.deselect_color", &style.deselect_color)?;
            validation::validate_non_empty_string("style.select_color", select)?;
            validation::validate_non_empty_string("style.deselect_color", deselect)?;
            return Ok(ControlStyle::from_colors(select, deselect));
        }

        let selected = validation::validate_required_field("style.selected", &style.selected)?;
        let deselected =
            validation::validate_required_field("style.deselected", &style.deselected)?;
        Ok(ControlStyle::new(
            string_pairs("style.selected", selected)?,
            string_pairs("style.deselected", deselected)?,
        ))
    }

    /// Shorthands in file order.
    pub fn shorthand_map(&self) -> Result<Shorthands> {
        let pairs = string_pairs("shorthands", &self.shorthands)?;
        for (key, target) in &pairs {
            validation::validate_non_empty_string("shorthands", key)?;
            validation::validate_non_empty_string(&format!("shorthands.{}", key), target)?;
        }
        Ok(pairs.into_iter().collect())
    }

    pub fn to_options(&self) -> Result<TogglerOptions> {
        let mut options = TogglerOptions::new(
            &self.toggler.prefix,
            self.control_style()?,
            self.shorthand_map()?,
        );
        if let Some(tag) = &self.toggler.section_tag {
            options = options.with_section_tag(tag);
        }
        if !self.toggler.scoped_memory.unwrap_or(true) {
            options = options.with_legacy_memory_key();
        }
        if let Some(name) = &self.toggler.list_parameter {
            options = options.with_list_parameter(name);
        }
        Ok(options)
    }

    /// The `[page]` markup as a fresh page, as if just loaded.
    pub fn build_page(&self) -> InMemoryPage {
        let mut page = InMemoryPage::new();
        let default_tag = self
            .toggler
            .section_tag
            .as_deref()
            .unwrap_or(DEFAULT_SECTION_TAG);

        for section in self.page.iter().flat_map(|p| p.sections.iter()) {
            let tag = section.tag.as_deref().unwrap_or(default_tag);
            page.add_bare_section(tag, &section.id, section.shown);
            if section.control.unwrap_or(true) {
                page.add_element("button", &control_id(&section.id));
            }
        }
        page
    }

    pub fn page_address(&self) -> Option<&str> {
        self.page.as_ref().and_then(|p| p.address.as_deref())
    }
}

fn string_pairs(field: &str, table: &toml::Table) -> Result<Vec<(String, String)>> {
    table
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(s) => Ok((key.clone(), s.to_string())),
            None => Err(TogglerError::InvalidConfigValueError {
                field: format!("{}.{}", field, key),
                value: value.to_string(),
                reason: "Value must be a string".to_string(),
            }),
        })
        .collect()
}

impl Validate for TogglerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
