//! Configuration loading and management

use crate::core::error::{ConfigError, QueryError};
use crate::core::query::{DEFAULT_PAGE_SIZE, ViewState};
use crate::entities::{
    CREATED_AT_FIELD, Inspiration, JobOffer, JobSeeker, PUBLICATION_DATE_FIELD, Professional,
    REGISTRATION_DATE_FIELD,
};
use crate::stats::DashboardFields;
use crate::stats::dashboard::INSPIRATION_CATEGORY_FIELD;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for one entity list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Identifier used by callers (e.g., "job_seekers")
    pub name: String,

    /// Human-readable list title
    pub label: String,

    /// Fields the search box matches against
    #[serde(default)]
    pub searchable_fields: Vec<String>,

    /// Field used for windows, trends and day series
    pub date_field: String,

    /// Optional field used for category distributions
    #[serde(default)]
    pub category_field: Option<String>,

    /// Overrides the table-wide default page size
    #[serde(default)]
    pub default_page_size: Option<usize>,
}

/// Table view settings shared by every list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: default_page_size_options(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Longest trend or chart window a config may ask for (about a century)
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Statistics windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Length of the current and previous trend windows
    #[serde(default = "default_trend_window_days")]
    pub trend_window_days: u32,

    /// Number of daily points in chart series
    #[serde(default = "default_chart_days")]
    pub chart_days: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            trend_window_days: default_trend_window_days(),
            chart_days: default_chart_days(),
        }
    }
}

fn default_trend_window_days() -> u32 {
    30
}

fn default_chart_days() -> u32 {
    90
}

/// Complete configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// List of entity configurations
    pub entities: Vec<EntityConfig>,

    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub stats: StatsConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    ///
    /// Failures surface as a [`ConfigError`] inside the returned error.
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: format!("{}: {}", path, e),
            },
        })?;
        let config = Self::parse(&content, Some(path))?;
        tracing::info!(path, entities = config.entities.len(), "loaded dashboard config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(Self::parse(yaml, None)?)
    }

    fn parse(yaml: &str, file: Option<&str>) -> std::result::Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: file.map(str::to_string),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Merge several configurations
    ///
    /// Entities are matched by name and later definitions replace earlier
    /// ones in place. Table and stats settings come from the last config.
    pub fn merge(configs: Vec<DashboardConfig>) -> Self {
        let mut merged = DashboardConfig {
            entities: Vec::new(),
            table: TableConfig::default(),
            stats: StatsConfig::default(),
        };

        for config in configs {
            for entity in config.entities {
                match merged.entities.iter_mut().find(|e| e.name == entity.name) {
                    Some(existing) => *existing = entity,
                    None => merged.entities.push(entity),
                }
            }
            merged.table = config.table;
            merged.stats = config.stats;
        }

        merged
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entity in &self.entities {
            if entity.name.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "name".to_string(),
                    context: format!("entity '{}'", entity.label),
                });
            }
            if !seen.insert(entity.name.as_str()) {
                return Err(ConfigError::invalid(
                    "entities.name",
                    &entity.name,
                    "entity names must be unique",
                ));
            }
            if entity.date_field.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "date_field".to_string(),
                    context: format!("entity '{}'", entity.name),
                });
            }
            if entity.default_page_size == Some(0) {
                return Err(ConfigError::invalid(
                    "default_page_size",
                    0,
                    format!("page size of '{}' must be positive", entity.name),
                ));
            }
        }

        if let Some(zero) = self.table.page_size_options.iter().find(|&&s| s == 0) {
            return Err(ConfigError::invalid(
                "table.page_size_options",
                zero,
                "page sizes must be positive",
            ));
        }
        if !self
            .table
            .page_size_options
            .contains(&self.table.default_page_size)
        {
            return Err(ConfigError::invalid(
                "table.default_page_size",
                self.table.default_page_size,
                "must be one of the page size options",
            ));
        }

        for (field, days) in [
            ("stats.trend_window_days", self.stats.trend_window_days),
            ("stats.chart_days", self.stats.chart_days),
        ] {
            if days == 0 {
                return Err(ConfigError::invalid(
                    field,
                    days,
                    "window must span at least one day",
                ));
            }
            if days > MAX_WINDOW_DAYS {
                return Err(ConfigError::invalid(
                    field,
                    days,
                    format!("window cannot exceed {} days", MAX_WINDOW_DAYS),
                ));
            }
        }

        Ok(())
    }

    /// Find an entity by name
    pub fn entity(&self, name: &str) -> std::result::Result<&EntityConfig, QueryError> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| QueryError::UnknownEntity {
                name: name.to_string(),
            })
    }

    /// Searchable fields of an entity, ready to pass to the table engine
    pub fn searchable_fields(&self, name: &str) -> std::result::Result<Vec<&str>, QueryError> {
        Ok(self
            .entity(name)?
            .searchable_fields
            .iter()
            .map(String::as_str)
            .collect())
    }

    /// Page size a new view of this entity starts with
    pub fn page_size_for(&self, name: &str) -> std::result::Result<usize, QueryError> {
        Ok(self
            .entity(name)?
            .default_page_size
            .unwrap_or(self.table.default_page_size))
    }

    /// Initial view state of an entity list: first page, no search, unsorted
    pub fn view_state_for(&self, name: &str) -> std::result::Result<ViewState, QueryError> {
        Ok(ViewState::new(self.page_size_for(name)?))
    }

    /// Date and category fields of the four dashboard collections
    ///
    /// Collections missing from the config keep their built-in fields.
    pub fn dashboard_fields(&self) -> DashboardFields<'_> {
        let defaults = DashboardFields::default();

        DashboardFields {
            professionals_date: self.date_field_or("professionals", defaults.professionals_date),
            job_seekers_date: self.date_field_or("job_seekers", defaults.job_seekers_date),
            job_offers_date: self.date_field_or("job_offers", defaults.job_offers_date),
            inspirations_date: self.date_field_or("inspirations", defaults.inspirations_date),
            inspirations_category: match self.entity("inspirations") {
                Ok(entity) => entity.category_field.as_deref(),
                Err(_) => defaults.inspirations_category,
            },
        }
    }

    fn date_field_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.entity(name)
            .map(|e| e.date_field.as_str())
            .unwrap_or(fallback)
    }

    /// Configuration of the four back-office lists
    pub fn default_config() -> Self {
        let fields = |list: &[&str]| list.iter().map(|f| f.to_string()).collect::<Vec<_>>();

        Self {
            entities: vec![
                EntityConfig {
                    name: "job_seekers".to_string(),
                    label: "Chercheurs d'emploi".to_string(),
                    searchable_fields: fields(JobSeeker::SEARCHABLE),
                    date_field: REGISTRATION_DATE_FIELD.to_string(),
                    category_field: None,
                    default_page_size: Some(100),
                },
                EntityConfig {
                    name: "professionals".to_string(),
                    label: "Professionnels".to_string(),
                    searchable_fields: fields(Professional::SEARCHABLE),
                    date_field: REGISTRATION_DATE_FIELD.to_string(),
                    category_field: None,
                    default_page_size: None,
                },
                EntityConfig {
                    name: "job_offers".to_string(),
                    label: "Offres d'emploi".to_string(),
                    searchable_fields: fields(JobOffer::SEARCHABLE),
                    date_field: PUBLICATION_DATE_FIELD.to_string(),
                    category_field: None,
                    default_page_size: None,
                },
                EntityConfig {
                    name: "inspirations".to_string(),
                    label: "Inspirations".to_string(),
                    searchable_fields: fields(Inspiration::SEARCHABLE),
                    date_field: CREATED_AT_FIELD.to_string(),
                    category_field: Some(INSPIRATION_CATEGORY_FIELD.to_string()),
                    default_page_size: None,
                },
            ],
            table: TableConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default_config();

        assert_eq!(config.entities.len(), 4);
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size_for("job_seekers").unwrap(), 100);
        assert_eq!(config.page_size_for("job_offers").unwrap(), 10);
        assert_eq!(
            config.searchable_fields("job_offers").unwrap(),
            vec!["titre", "entreprise", "etat"]
        );
    }

    #[test]
    fn test_yaml_serialization() {
        let config = DashboardConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = DashboardConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_defaults_filled_from_yaml() {
        let yaml = r#"
entities:
  - name: crew
    label: Equipage
    searchable_fields: [nomComplet]
    date_field: dateInscription
"#;
        let config = DashboardConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.table.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.stats.chart_days, 90);
        assert_eq!(config.entity("crew").unwrap().category_field, None);
    }

    #[test]
    fn test_validate_rejects_default_outside_options() {
        let mut config = DashboardConfig::default_config();
        config.table.default_page_size = 15;
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
    }

    #[test]
    fn test_validate_rejects_duplicates_and_zero_windows() {
        let mut config = DashboardConfig::default_config();
        config.entities.push(config.entities[0].clone());
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default_config();
        config.stats.trend_window_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_caps_window_lengths() {
        let mut config = DashboardConfig::default_config();
        config.stats.chart_days = MAX_WINDOW_DAYS;
        assert!(config.validate().is_ok());

        config.stats.chart_days = u32::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stats.chart_days"));

        let mut config = DashboardConfig::default_config();
        config.stats.trend_window_days = MAX_WINDOW_DAYS + 1;
        assert_eq!(config.validate().unwrap_err().error_code(), "CONFIG_INVALID_VALUE");
    }

    #[test]
    fn test_dashboard_fields_follow_entities() {
        let config = DashboardConfig::default_config();
        assert_eq!(config.dashboard_fields(), DashboardFields::default());

        let mut config = DashboardConfig::default_config();
        config.entities[2].date_field = "dateCreation".to_string();
        config.entities[3].category_field = None;
        config.entities.remove(1);
        let fields = config.dashboard_fields();
        assert_eq!(fields.job_offers_date, "dateCreation");
        assert_eq!(fields.inspirations_category, None);
        assert_eq!(fields.professionals_date, REGISTRATION_DATE_FIELD);
    }

    #[test]
    fn test_unknown_entity() {
        let config = DashboardConfig::default_config();
        let err = config.view_state_for("pilots").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownEntity {
                name: "pilots".to_string()
            }
        );
    }

    #[test]
    fn test_merge_overrides_by_name() {
        let base = DashboardConfig::default_config();
        let mut overlay = DashboardConfig {
            entities: vec![base.entities[1].clone()],
            table: TableConfig::default(),
            stats: StatsConfig {
                trend_window_days: 7,
                chart_days: 30,
            },
        };
        overlay.entities[0].default_page_size = Some(50);

        let merged = DashboardConfig::merge(vec![base, overlay]);
        assert_eq!(merged.entities.len(), 4);
        assert_eq!(merged.entities[1].name, "professionals");
        assert_eq!(merged.page_size_for("professionals").unwrap(), 50);
        assert_eq!(merged.stats.trend_window_days, 7);
    }
}
