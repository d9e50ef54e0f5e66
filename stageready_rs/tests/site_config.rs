//! The configuration shipped with the landing crate must parse and be
//! internally consistent.

use std::path::PathBuf;

use stageready::SiteConfig;
use stageready::portfolio::Portfolio;

fn shipped_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../landing/stageready.toml")
}

#[test]
fn shipped_config_parses() {
    let config = SiteConfig::try_load_from_path(&shipped_config_path()).expect("shipped config");
    assert_eq!(config.business.name, "Stage Ready");
    assert!(!config.portfolio.projects.is_empty());
    assert!(!config.booking.time_slots.is_empty());
}

#[test]
fn shipped_projects_use_configured_options() {
    let config = SiteConfig::try_load_from_path(&shipped_config_path()).expect("shipped config");
    let options = &config.portfolio.options;
    for project in &config.portfolio.projects {
        assert!(
            options.has_style(&project.style),
            "{} has unknown style {}",
            project.id,
            project.style
        );
        assert!(
            options.has_property_type(&project.property_type),
            "{} has unknown property type {}",
            project.id,
            project.property_type
        );
    }
}

#[test]
fn shipped_project_ids_are_unique() {
    let config = SiteConfig::try_load_from_path(&shipped_config_path()).expect("shipped config");
    let mut ids: Vec<&str> = config
        .portfolio
        .projects
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn shipped_portfolio_has_testimonials_and_case_studies() {
    let config = SiteConfig::try_load_from_path(&shipped_config_path()).expect("shipped config");
    let portfolio = Portfolio::new(config.portfolio.projects, config.portfolio.options);
    assert_eq!(portfolio.case_studies().len(), 3);
    assert!(!portfolio.testimonials().is_empty());
}
