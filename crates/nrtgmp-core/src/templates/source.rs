//! Template repository source

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use url::Url;

/// Remote git repository the template variants are cloned from
#[derive(Debug, Clone)]
pub struct TemplateSource {
    url: Url,
}

impl TemplateSource {
    /// Parse a template repository URL
    pub fn new(url_str: &str) -> Result<Self, ScaffoldError> {
        let url = Url::parse(url_str).map_err(|source| ScaffoldError::InvalidTemplateUrl {
            url: url_str.to_string(),
            source,
        })?;
        Ok(Self { url })
    }

    /// Create a source from a product config, honoring the env-var override
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self, ScaffoldError> {
        let url_str = std::env::var(config.template_url_env())
            .unwrap_or_else(|_| config.template_repo_url().to_string());
        Self::new(&url_str)
    }

    /// The repository URL as passed to git
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_accepted() {
        let source = TemplateSource::new("https://github.com/iamabhi747/nrtgmp-template").unwrap();
        assert!(source.url().starts_with("https://github.com/"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = TemplateSource::new("not a url").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidTemplateUrl { .. }));
    }
}
