use crate::domain::ports::NavigationSource;
use crate::utils::error::Result;
use url::Url;

/// Navigation source backed by a parsed URL.
#[derive(Debug, Clone)]
pub struct UrlNavigation {
    url: Url,
}

impl UrlNavigation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(address: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(address)?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl NavigationSource for UrlNavigation {
    fn address(&self) -> String {
        self.url.as_str().to_string()
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.url.query_pairs().any(|(key, _)| key == name)
    }

    fn parameter(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}
