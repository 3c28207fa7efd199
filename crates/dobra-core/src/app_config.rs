use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Public base URL of the storefront, e.g. `"https://dobra.vercel.app"`.
    pub site_url: String,
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    /// Query API version without the leading `v`, e.g. `"2024-01-01"`.
    pub sanity_api_version: String,
    pub sanity_use_cdn: bool,
    pub sanity_api_token: Option<String>,
    /// How long a catalog query result may be served before re-fetching.
    pub revalidate_secs: u64,
    /// Same as `revalidate_secs`, for the site-settings singleton.
    pub settings_revalidate_secs: u64,
    pub cms_request_timeout_secs: u64,
    pub cms_user_agent: String,
}

impl AppConfig {
    /// Base URL of the Sanity query API for the configured project.
    #[must_use]
    pub fn sanity_base_url(&self) -> String {
        let host = if self.sanity_use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        format!("https://{}.{host}", self.sanity_project_id)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("site_url", &self.site_url)
            .field("sanity_project_id", &self.sanity_project_id)
            .field("sanity_dataset", &self.sanity_dataset)
            .field("sanity_api_version", &self.sanity_api_version)
            .field("sanity_use_cdn", &self.sanity_use_cdn)
            .field(
                "sanity_api_token",
                &self.sanity_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field("revalidate_secs", &self.revalidate_secs)
            .field("settings_revalidate_secs", &self.settings_revalidate_secs)
            .field("cms_request_timeout_secs", &self.cms_request_timeout_secs)
            .field("cms_user_agent", &self.cms_user_agent)
            .finish()
    }
}
