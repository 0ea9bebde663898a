//! Prints the recommendation plan for the configured preferences as JSON.

use std::sync::Arc;

use income_planner::adapters::{BuiltinStrategySource, YamlFileStrategySource};
use income_planner::application::{LoadCatalogHandler, RecommendPlanHandler, RecommendPlanQuery};
use income_planner::config::{AppConfig, CatalogSourceKind, ValidationError};
use income_planner::domain::foundation::DomainError;
use income_planner::ports::StrategySource;
use income_planner::telemetry;

fn build_source(config: &AppConfig) -> Result<Arc<dyn StrategySource>, ValidationError> {
    match config.catalog.source {
        CatalogSourceKind::Builtin => Ok(Arc::new(BuiltinStrategySource::new())),
        CatalogSourceKind::File => {
            let path = config
                .catalog
                .path
                .as_ref()
                .ok_or(ValidationError::MissingRequired("catalog.path"))?;
            Ok(Arc::new(YamlFileStrategySource::new(path)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.logging);
    config.validate()?;

    let preferences = config.preferences.to_preferences()?;
    let catalog = LoadCatalogHandler::new(build_source(&config)?)
        .handle()
        .await
        .map_err(DomainError::from)?;

    let plan = RecommendPlanHandler::new(catalog).handle(RecommendPlanQuery { preferences });
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
