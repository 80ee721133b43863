use crate::config::ProdzConfig;
use crate::model::Product;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod get;
pub mod helpers;
pub mod init;
pub mod limit;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub struct ProdzPaths {
    pub store_dir: PathBuf,
}

impl ProdzPaths {
    /// Full path of the collection file for the given config
    pub fn data_file(&self, config: &ProdzConfig) -> PathBuf {
        self.store_dir.join(config.get_data_file())
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Soft, recoverable conditions. Commands report these instead of raising
/// errors so callers can branch on the value without parsing message text;
/// when the outcome is not `Success`, nothing was written.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Success,
    MissingFields(Vec<&'static str>),
    DuplicateCode(String),
    NotFound(u64),
    InvalidLimit(i64),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub affected: Vec<Product>,
    pub listed: Vec<Product>,
    pub config: Option<ProdzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_listed(mut self, products: Vec<Product>) -> Self {
        self.listed = products;
        self
    }

    pub fn with_config(mut self, config: ProdzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field overrides for `update::run`. Every field is optional; fields left
/// as `None` keep their stored value. A populated `id` is accepted but
/// ignored: the stored id always wins.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u32>,
}

impl ProductUpdate {
    /// True when no field override is present (an ignored `id` does not count)
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.thumbnail.is_none()
            && self.code.is_none()
            && self.stock.is_none()
    }
}
