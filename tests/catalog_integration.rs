//! Integration tests for catalog loading and recommendation.
//!
//! These tests verify the end-to-end flow:
//! 1. A `StrategySource` adapter loads and validates a catalog
//! 2. `LoadCatalogHandler` freezes it behind an `Arc`
//! 3. `RecommendPlanHandler` and `ApplyPreferenceChangeHandler` answer queries

use std::sync::Arc;

use tempfile::TempDir;

use income_planner::adapters::catalog::BUILTIN_CATALOG_YAML;
use income_planner::adapters::{BuiltinStrategySource, InMemoryStrategySource, YamlFileStrategySource};
use income_planner::application::{
    ApplyPreferenceChangeCommand, ApplyPreferenceChangeHandler, LoadCatalogHandler,
    RecommendPlanHandler, RecommendPlanQuery,
};
use income_planner::domain::foundation::{Leverage, SkillLevel, WeeklyHours};
use income_planner::domain::matching::{RecommendationPlan, StrategyMatcher};
use income_planner::domain::preferences::{PreferenceChange, UserPreferences};
use income_planner::ports::SourceError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TWO_STRATEGY_CATALOG: &str = r#"
strategies:
  - id: a
    title: Strategy A
    summary: Beginner friendly
    why_it_works: Low barrier
    weekly_hours: 3
    skill_level: beginner
    leverage: [skills, content]
    effort: low
    time_to_first_income: medium
  - id: b
    title: Strategy B
    summary: Needs some experience
    why_it_works: Scales with automation
    weekly_hours: 6
    skill_level: intermediate
    leverage: [content, automation]
    effort: medium
    time_to_first_income: slow
"#;

fn prefs(hours: u8, level: SkillLevel, leverage: &[Leverage]) -> UserPreferences {
    UserPreferences {
        weekly_hours: WeeklyHours::new(hours),
        skill_level: level,
        leverage: leverage.iter().copied().collect(),
    }
}

fn ids(plan: &RecommendationPlan) -> Vec<String> {
    plan.ranked_ids().iter().map(|id| id.to_string()).collect()
}

async fn file_handler(dir: &TempDir, yaml: &str) -> Result<RecommendPlanHandler, SourceError> {
    let path = dir.path().join("strategies.yaml");
    std::fs::write(&path, yaml).unwrap();
    let catalog = LoadCatalogHandler::new(Arc::new(YamlFileStrategySource::new(&path)))
        .handle()
        .await?;
    Ok(RecommendPlanHandler::new(catalog))
}

// =============================================================================
// File catalog
// =============================================================================

#[tokio::test]
async fn beginner_with_four_hours_gets_only_the_beginner_strategy() {
    let dir = TempDir::new().unwrap();
    let handler = file_handler(&dir, TWO_STRATEGY_CATALOG).await.unwrap();

    let plan = handler.handle(RecommendPlanQuery {
        preferences: prefs(4, SkillLevel::Beginner, &[Leverage::Skills, Leverage::Content]),
    });
    assert_eq!(ids(&plan), vec!["a"]);
}

#[tokio::test]
async fn advanced_with_ten_hours_ranks_fuller_time_use_first() {
    let dir = TempDir::new().unwrap();
    let handler = file_handler(&dir, TWO_STRATEGY_CATALOG).await.unwrap();

    let plan = handler.handle(RecommendPlanQuery {
        preferences: prefs(10, SkillLevel::Advanced, &[Leverage::Content]),
    });
    assert_eq!(ids(&plan), vec!["b", "a"]);
    assert_eq!(plan.primary.as_ref().map(|p| p.fit.required_hours), Some(6));
}

#[tokio::test]
async fn invalid_file_catalog_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let yaml = TWO_STRATEGY_CATALOG.replace("id: b", "id: a");
    assert!(matches!(
        file_handler(&dir, &yaml).await,
        Err(SourceError::Invalid(_))
    ));
}

#[tokio::test]
async fn empty_catalog_always_yields_empty_plan() {
    let catalog = LoadCatalogHandler::new(Arc::new(InMemoryStrategySource::default()))
        .handle()
        .await
        .unwrap();
    let handler = RecommendPlanHandler::new(catalog);

    let plan = handler.handle(RecommendPlanQuery {
        preferences: prefs(15, SkillLevel::Advanced, &Leverage::ALL),
    });
    assert!(plan.is_empty());
}

// =============================================================================
// Built-in catalog
// =============================================================================

#[tokio::test]
async fn builtin_catalog_has_a_plan_for_default_preferences() {
    let catalog = LoadCatalogHandler::new(Arc::new(BuiltinStrategySource::new()))
        .handle()
        .await
        .unwrap();
    let handler = RecommendPlanHandler::new(catalog);

    let plan = handler.handle(RecommendPlanQuery {
        preferences: UserPreferences::default(),
    });
    let primary = plan.primary.expect("default preferences should match something");
    assert!(primary.strategy.weekly_hours <= 4);
    assert_eq!(primary.strategy.skill_level, SkillLevel::Beginner);
}

#[tokio::test]
async fn builtin_catalog_results_respect_filters_for_every_budget() {
    let catalog = BuiltinStrategySource::new();
    let catalog = LoadCatalogHandler::new(Arc::new(catalog)).handle().await.unwrap();

    for hours in 1..=15 {
        for level in SkillLevel::ALL {
            let p = prefs(hours, level, &[Leverage::Skills, Leverage::Network]);
            for strategy in StrategyMatcher::match_strategies(&p, catalog.strategies()) {
                assert!(strategy.weekly_hours <= hours);
                assert!(level.covers(strategy.skill_level));
                assert!(strategy.leverage.overlap(&p.leverage) > 0);
            }
        }
    }
}

#[tokio::test]
async fn file_source_and_builtin_agree_on_same_content() {
    let dir = TempDir::new().unwrap();
    let from_file = file_handler(&dir, BUILTIN_CATALOG_YAML).await.unwrap();
    let builtin = RecommendPlanHandler::new(
        LoadCatalogHandler::new(Arc::new(BuiltinStrategySource::new()))
            .handle()
            .await
            .unwrap(),
    );

    let query = RecommendPlanQuery {
        preferences: prefs(8, SkillLevel::Intermediate, &[Leverage::Skills, Leverage::Automation]),
    };
    assert_eq!(from_file.handle(query.clone()), builtin.handle(query));
}

// =============================================================================
// Preference changes
// =============================================================================

#[tokio::test]
async fn each_change_replaces_preferences_and_recomputes() {
    let dir = TempDir::new().unwrap();
    let handler = ApplyPreferenceChangeHandler::new(
        file_handler(&dir, TWO_STRATEGY_CATALOG).await.unwrap(),
    );

    let mut current = prefs(4, SkillLevel::Beginner, &[Leverage::Content]);
    let changes = [
        (PreferenceChange::SetWeeklyHours(6), vec!["a"]),
        (PreferenceChange::SetSkillLevel(SkillLevel::Intermediate), vec!["b", "a"]),
        (PreferenceChange::ToggleLeverage(Leverage::Skills), vec!["a", "b"]),
        (PreferenceChange::SetWeeklyHours(2), vec![]),
    ];

    for (change, expected) in changes {
        let result = handler
            .handle(ApplyPreferenceChangeCommand {
                current: current.clone(),
                change,
            })
            .unwrap();
        assert_eq!(ids(&result.plan), expected, "after {:?}", change);
        current = result.preferences;
    }
}
