use std::sync::Arc;

use ytdlp::{MediaExtractor, YtDlpClient};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub extractor: Arc<dyn MediaExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = YtDlpClient::new(config.ytdlp_config());
        Self::with_extractor(config, Arc::new(client))
    }

    /// Build state around any extractor implementation
    pub fn with_extractor(config: Config, extractor: Arc<dyn MediaExtractor>) -> Self {
        Self {
            config: Arc::new(config),
            extractor,
        }
    }
}
