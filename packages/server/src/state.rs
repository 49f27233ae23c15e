use reqwest::Client;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Shared connection pool for Mailjet calls.
    pub http: Client,
}
