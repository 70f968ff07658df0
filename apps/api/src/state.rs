use std::sync::Arc;

use crate::analysis::predictor::ProficiencyModel;
use crate::catalog::resources::ResourceCatalog;
use crate::catalog::roles::RoleCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The catalogs are read-only after startup, so concurrent
/// requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable proficiency model. Default: WeightedScoringModel.
    pub model: Arc<dyn ProficiencyModel>,
    pub roles: Arc<RoleCatalog>,
    pub resources: Arc<ResourceCatalog>,
}
