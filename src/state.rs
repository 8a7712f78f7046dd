use crate::cache::NftCacheManager;
use crate::config::Config;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub cache: Arc<NftCacheManager>,
}
