use crate::config::AppConfig;
use crate::services::identity::IdentityProvider;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
    pub identity: Box<dyn IdentityProvider>,
}
