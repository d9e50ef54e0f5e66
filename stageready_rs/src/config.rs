//! Site configuration.
//!
//! Option lists (time slots, consultation types, styles, property types),
//! business contact details and the portfolio projects are data, not
//! constants baked into the controllers. The site ships them as
//! `stageready.toml`; anything missing falls back to the defaults below.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::portfolio::Project;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One selectable value: stable key plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub key: String,
    pub label: String,
}

impl OptionEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

fn entries(pairs: &[(&str, &str)]) -> Vec<OptionEntry> {
    pairs
        .iter()
        .map(|(key, label)| OptionEntry::new(*key, *label))
        .collect()
}

fn label_in<'a>(options: &'a [OptionEntry], key: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.label.as_str())
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub business: BusinessDetails,
    pub booking: BookingOptions,
    pub contact: ContactOptions,
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BusinessDetails {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    /// `tel:` target for the phone number.
    pub phone_href: String,
    pub email: String,
    pub hours: String,
    pub region: String,
}

impl Default for BusinessDetails {
    fn default() -> Self {
        Self {
            name: "Stage Ready".into(),
            tagline: "Premium Home Staging Melbourne".into(),
            phone: "0447 856 645".into(),
            phone_href: "tel:+61447856645".into(),
            email: "info@stageready.com.au".into(),
            hours: "Mon - Fri, 9am - 5pm".into(),
            region: "Melbourne, VIC".into(),
        }
    }
}

impl BusinessDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Options offered by the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingOptions {
    pub time_slots: Vec<String>,
    pub services: Vec<OptionEntry>,
    pub submit_delay_ms: u64,
}

impl Default for BookingOptions {
    fn default() -> Self {
        Self {
            time_slots: ["09:00", "10:30", "12:00", "13:30", "15:00", "16:30"]
                .into_iter()
                .map(String::from)
                .collect(),
            services: entries(&[
                ("in-home", "In-Home Consultation"),
                ("virtual", "Virtual Walkthrough"),
                ("occupied", "Occupied Staging Assessment"),
                ("vacant", "Vacant Property Staging Plan"),
            ]),
            submit_delay_ms: 900,
        }
    }
}

impl BookingOptions {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn service_label(&self, key: &str) -> Option<&str> {
        label_in(&self.services, key)
    }
}

/// Options offered by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactOptions {
    pub services: Vec<OptionEntry>,
    pub submit_delay_ms: u64,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            services: entries(&[
                ("consultation", "Consultation"),
                ("vacant", "Vacant staging"),
                ("occupied", "Occupied staging"),
                ("re-design", "Re-design"),
                ("other", "Other"),
            ]),
            submit_delay_ms: 1200,
        }
    }
}

impl ContactOptions {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Filter axes for the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortfolioOptions {
    pub styles: Vec<OptionEntry>,
    pub property_types: Vec<OptionEntry>,
}

impl Default for PortfolioOptions {
    fn default() -> Self {
        Self {
            styles: entries(&[
                ("rustic", "Rustic"),
                ("contemporary", "Contemporary"),
                ("coastal", "Coastal"),
                ("organic", "Organic"),
            ]),
            property_types: entries(&[
                ("apartment", "Apartment"),
                ("single-family", "Single-family"),
                ("townhouse", "Townhouse"),
                ("condo", "Condo"),
                ("luxury", "Luxury"),
                ("cottage", "Cottage"),
            ]),
        }
    }
}

impl PortfolioOptions {
    pub fn has_style(&self, key: &str) -> bool {
        label_in(&self.styles, key).is_some()
    }

    pub fn has_property_type(&self, key: &str) -> bool {
        label_in(&self.property_types, key).is_some()
    }

    /// Display label for a style key; unknown keys are shown as-is.
    pub fn label_for_style<'a>(&'a self, key: &'a str) -> &'a str {
        label_in(&self.styles, key).unwrap_or(key)
    }

    pub fn label_for_property<'a>(&'a self, key: &'a str) -> &'a str {
        label_in(&self.property_types, key).unwrap_or(key)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    #[serde(flatten)]
    pub options: PortfolioOptions,
    pub projects: Vec<Project>,
}

impl SiteConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to default site config");
                Self::default()
            }
        }
    }

    /// Parse embedded configuration, falling back to defaults on error.
    pub fn from_embedded(content: &str) -> Self {
        Self::from_toml_str(content).unwrap_or_else(|e| {
            warn!(error = %e, "embedded site config is invalid, using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_site_options() {
        let config = SiteConfig::default();
        assert_eq!(config.booking.time_slots.len(), 6);
        assert_eq!(config.booking.time_slots[0], "09:00");
        assert_eq!(config.booking.submit_delay(), Duration::from_millis(900));
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(1200));
        assert_eq!(
            config.booking.service_label("virtual"),
            Some("Virtual Walkthrough")
        );
        assert!(config.portfolio.options.has_style("coastal"));
        assert!(config.portfolio.options.has_property_type("single-family"));
        assert!(config.portfolio.projects.is_empty());
        assert_eq!(config.business.mailto(), "mailto:info@stageready.com.au");
    }

    #[test]
    fn labels_fall_back_to_key() {
        let options = PortfolioOptions::default();
        assert_eq!(options.label_for_property("single-family"), "Single-family");
        assert_eq!(options.label_for_style("brutalist"), "brutalist");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[booking]
time_slots = ["08:00", "17:00"]

[business]
phone = "03 9000 0000"
"#,
        )
        .expect("parse");

        assert_eq!(config.booking.time_slots, vec!["08:00", "17:00"]);
        assert_eq!(config.booking.services.len(), 4);
        assert_eq!(config.booking.submit_delay_ms, 900);
        assert_eq!(config.business.phone, "03 9000 0000");
        assert_eq!(config.business.name, "Stage Ready");
    }

    #[test]
    fn portfolio_projects_parse() {
        let config = SiteConfig::from_toml_str(
            r#"
[portfolio]
styles = [{ key = "rustic", label = "Rustic" }]

[[portfolio.projects]]
id = "r1"
title = "Warm Rustic Revival"
property_type = "single-family"
style = "rustic"
before_image = "/images/before.jpg"
after_image = "/images/after.jpg"
description = "Layered woods."

[portfolio.projects.metrics]
offers_received = 5
"#,
        )
        .expect("parse");

        assert_eq!(config.portfolio.options.styles.len(), 1);
        assert_eq!(config.portfolio.options.property_types.len(), 6);
        let project = &config.portfolio.projects[0];
        assert_eq!(project.id, "r1");
        assert_eq!(project.testimonial, None);
        assert_eq!(
            project.metrics.as_ref().and_then(|m| m.offers_received),
            Some(5)
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = SiteConfig::from_toml_str("[booking\nbroken").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site configuration"));
    }

    #[test]
    fn embedded_falls_back_on_error() {
        let config = SiteConfig::from_embedded("not = [valid");
        assert_eq!(config.booking, BookingOptions::default());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("stageready.toml"));
        assert_eq!(config.contact, ContactOptions::default());
        assert!(SiteConfig::try_load_from_path(&temp.path().join("missing.toml")).is_err());
    }

    #[test]
    fn load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("stageready.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
[contact]
submit_delay_ms = 10
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(10));
        assert_eq!(config.contact.services.len(), 5);
    }

    #[test]
    fn load_invalid_file_gives_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("stageready.toml");
        std::fs::write(&path, "[[[").expect("write config");

        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.portfolio.options, PortfolioOptions::default());
    }
}
