use directory_business::{DirectoryConfig, StatusPolicy, register};
use directory_states::StateCtx;
use log::warn;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = DirectoryConfig::from_env().unwrap_or_else(|err| {
            warn!("Falling back to default directory config: {err}");
            DirectoryConfig::default()
        });
        Self::with_config(config)
    }
}

impl State {
    pub fn with_config(config: DirectoryConfig) -> Self {
        let mut ctx = StateCtx::new();
        register(&mut ctx, config);
        Self { ctx }
    }

    /// Points the directory at `base_url` with deterministic statuses.
    pub fn test(base_url: String) -> Self {
        Self::with_config(
            DirectoryConfig::new(base_url).with_status_policy(StatusPolicy::StableById),
        )
    }
}
