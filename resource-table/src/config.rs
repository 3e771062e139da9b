//! Table and HTTP client configuration

use std::time::Duration;

use crate::model::FieldKey;

/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Per-screen configuration for a [`ResourceTable`](crate::ResourceTable).
///
/// The resource's schema supplies the columns and filterable fields; this
/// config adjusts them for one screen.
///
/// # Example
///
/// ```
/// use resource_table::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(20)
///     .with_hidden_columns(&["barcode", "expiry_hours"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Initial rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Page sizes offered to the user.
    pub page_size_options: Vec<usize>,

    /// Columns hidden until the user shows them.
    pub hidden_columns: Vec<FieldKey>,

    /// Overrides the schema's filterable fields when set.
    pub filter_fields: Option<Vec<FieldKey>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            hidden_columns: Vec::new(),
            filter_fields: None,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial page size. Zero is ignored.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Sets the page sizes offered to the user.
    pub fn with_page_size_options(mut self, options: &[usize]) -> Self {
        self.page_size_options = options.iter().copied().filter(|n| *n > 0).collect();
        self
    }

    /// Hides columns by default.
    pub fn with_hidden_columns(mut self, columns: &[FieldKey]) -> Self {
        self.hidden_columns = columns.to_vec();
        self
    }

    /// Replaces the fields matched by the free-text filter.
    pub fn with_filter_fields(mut self, fields: &[FieldKey]) -> Self {
        self.filter_fields = Some(fields.to_vec());
        self
    }
}

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "CONSOLE_API_URL";

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for the HTTP [`ResourceApi`](crate::api::ResourceApi) client.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use resource_table::config::HttpConfig;
///
/// let config = HttpConfig::default()
///     .with_base_url("https://console.example.com")
///     .with_timeout(Duration::from_secs(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Backend base URL.
    ///
    /// Default: `http://localhost:8000`
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Option<Duration>,

    /// TCP connect timeout.
    ///
    /// Default: 10 seconds
    pub connect_timeout: Option<Duration>,

    /// Bearer token sent with every request.
    pub bearer_token: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            bearer_token: None,
        }
    }
}

impl HttpConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config whose base URL comes from `CONSOLE_API_URL`, falling
    /// back to the default when the variable is unset or blank.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
            _ => config,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Disables both timeouts.
    pub fn no_timeouts(mut self) -> Self {
        self.timeout = None;
        self.connect_timeout = None;
        self
    }
}
