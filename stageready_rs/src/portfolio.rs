//! Portfolio projects and the style / property-type filter.
//!
//! Two independent axes narrow the project list. Each axis is either
//! [`FilterValue::All`] or one key from its configured option list; both
//! predicates must hold for a project to be visible. Filtering never
//! reorders: visible projects keep their source order.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::PortfolioOptions;
use crate::gallery::MediaItem;

const CASE_STUDY_COUNT: usize = 3;
const TESTIMONIAL_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub client: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Outcome figures shown under a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_on_market_reduced: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers_received: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_over_ask_percent: Option<u32>,
}

impl Metrics {
    /// `(label, value)` pairs for the metrics that are present.
    pub fn pills(&self) -> Vec<(&'static str, String)> {
        let mut pills = Vec::new();
        if let Some(days) = self.days_on_market_reduced {
            pills.push(("Days reduced", format!("-{days}d")));
        }
        if let Some(offers) = self.offers_received {
            pills.push(("Offers", offers.to_string()));
        }
        if let Some(percent) = self.sale_over_ask_percent {
            pills.push(("Over ask", format!("+{percent}%")));
        }
        pills
    }
}

/// A staged property with before / after imagery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub property_type: String,
    pub style: String,
    pub before_image: String,
    pub after_image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// A testimonial together with the project it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialRef<'a> {
    pub quote: &'a str,
    pub client: &'a str,
    pub role: &'a str,
    pub project_title: &'a str,
}

/// One filter axis: everything, or a single option key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    pub const ALL_KEY: &'static str = "all";

    /// Parse a key as used in tabs and selects; `"all"` (or blank) is [`FilterValue::All`].
    pub fn from_key(key: &str) -> Self {
        let key = key.trim();
        if key.is_empty() || key == Self::ALL_KEY {
            Self::All
        } else {
            Self::Only(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(key) => key,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(key) => key == value,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for FilterValue {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    Style,
    PropertyType,
}

impl fmt::Display for FilterAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style => f.write_str("style"),
            Self::PropertyType => f.write_str("property type"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown {axis} option: {key}")]
    UnknownOption { axis: FilterAxis, key: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub style: FilterValue,
    pub property: FilterValue,
}

impl FilterState {
    pub fn accepts(&self, project: &Project) -> bool {
        self.style.matches(&project.style) && self.property.matches(&project.property_type)
    }
}

/// Project list plus the current filter state.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    projects: Vec<Project>,
    options: PortfolioOptions,
    filter: FilterState,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>, options: PortfolioOptions) -> Self {
        Self {
            projects,
            options,
            filter: FilterState::default(),
        }
    }

    /// Start with both axes already set, e.g. from a link into a style.
    pub fn with_filters(
        projects: Vec<Project>,
        options: PortfolioOptions,
        filter: FilterState,
    ) -> Result<Self, FilterError> {
        let mut portfolio = Self::new(projects, options);
        portfolio.set_style_filter(filter.style)?;
        portfolio.set_property_filter(filter.property)?;
        Ok(portfolio)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn options(&self) -> &PortfolioOptions {
        &self.options
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_style_filter(&mut self, value: FilterValue) -> Result<(), FilterError> {
        self.check(FilterAxis::Style, &value)?;
        debug!(style = %value, "portfolio style filter");
        self.filter.style = value;
        Ok(())
    }

    pub fn set_property_filter(&mut self, value: FilterValue) -> Result<(), FilterError> {
        self.check(FilterAxis::PropertyType, &value)?;
        debug!(property = %value, "portfolio property filter");
        self.filter.property = value;
        Ok(())
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
    }

    fn check(&self, axis: FilterAxis, value: &FilterValue) -> Result<(), FilterError> {
        let FilterValue::Only(key) = value else {
            return Ok(());
        };
        let known = match axis {
            FilterAxis::Style => self.options.has_style(key),
            FilterAxis::PropertyType => self.options.has_property_type(key),
        };
        if known {
            Ok(())
        } else {
            warn!(%axis, key = %key, "rejected unknown filter option");
            Err(FilterError::UnknownOption {
                axis,
                key: key.clone(),
            })
        }
    }

    /// Projects passing both filters, in source order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Project> + '_ {
        self.projects.iter().filter(|p| self.filter.accepts(p))
    }

    pub fn has_matches(&self) -> bool {
        self.visible_items().next().is_some()
    }

    /// Before and after image of each visible project, for the lightbox.
    pub fn gallery_items(&self) -> Vec<MediaItem> {
        self.visible_items()
            .flat_map(|p| {
                let style = self.options.label_for_style(&p.style).to_string();
                [
                    MediaItem::new(format!("{}-before", p.id), p.before_image.clone())
                        .with_title(format!("{} (before)", p.title))
                        .with_category(style.clone()),
                    MediaItem::new(format!("{}-after", p.id), p.after_image.clone())
                        .with_title(format!("{} (after)", p.title))
                        .with_category(style),
                ]
            })
            .collect()
    }

    /// Featured projects; ignores the filters.
    pub fn case_studies(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(CASE_STUDY_COUNT)]
    }

    pub fn testimonials(&self) -> Vec<TestimonialRef<'_>> {
        self.projects
            .iter()
            .filter_map(|p| {
                p.testimonial.as_ref().map(|t| TestimonialRef {
                    quote: &t.quote,
                    client: &t.client,
                    role: t.role.as_deref().unwrap_or("Client"),
                    project_title: &p.title,
                })
            })
            .take(TESTIMONIAL_LIMIT)
            .collect()
    }

    /// `"Rustic · Single-family"` style subtitle for a project.
    pub fn subtitle(&self, project: &Project) -> String {
        format!(
            "{} · {}",
            self.options.label_for_style(&project.style),
            self.options.label_for_property(&project.property_type)
        )
    }
}
