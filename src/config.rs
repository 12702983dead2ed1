/// Dashboard configuration loader - parses an optional TOML file.
///
/// Keeps source locations, the coverage allow-list and the analysis
/// constants out of the aggregation code.
use std::{collections::BTreeSet, fs, path::Path};

use serde::Deserialize;

use crate::{download::Source, error::PipelineError};

pub const DEFAULT_WEATHER_SOURCE: &str = "weather.csv";
pub const DEFAULT_WATER_QUALITY_SOURCE: &str =
    "Drinking_Water_Quality_Distribution_Monitoring_Data_20250313.csv";
pub const DEFAULT_WARM_THRESHOLD_F: f64 = 55.0;
pub const DEFAULT_YEAR_MIN: i32 = 1950;
pub const DEFAULT_YEAR_MAX: i32 = 2024;

/// Years for which both datasets are considered jointly reliable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRegistry {
    years: BTreeSet<i32>,
}

impl CoverageRegistry {
    pub fn new<I: IntoIterator<Item = i32>>(years: I) -> Self {
        CoverageRegistry {
            years: years.into_iter().collect(),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Covered years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }
}

impl Default for CoverageRegistry {
    /// Every fifth year from 1960 through 2020.
    fn default() -> Self {
        CoverageRegistry::new((1960..=2020).step_by(5))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub weather: String,
    pub water_quality: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            weather: DEFAULT_WEATHER_SOURCE.to_string(),
            water_quality: DEFAULT_WATER_QUALITY_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub years: Vec<i32>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        CoverageConfig {
            years: CoverageRegistry::default().years(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// First-warm-year threshold in °F.
    pub warm_threshold_f: f64,
    /// Year range reported when the weather data has no valid rows.
    pub default_year_min: i32,
    pub default_year_max: i32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            warm_threshold_f: DEFAULT_WARM_THRESHOLD_F,
            default_year_min: DEFAULT_YEAR_MIN,
            default_year_max: DEFAULT_YEAR_MAX,
        }
    }
}

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sources: SourceConfig,
    pub coverage: CoverageConfig,
    pub analysis: AnalysisConfig,
}

impl DashboardConfig {
    pub fn from_toml(contents: &str) -> Result<Self, PipelineError> {
        toml::from_str(contents).map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Loads the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&contents)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, PipelineError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn coverage_registry(&self) -> CoverageRegistry {
        CoverageRegistry::new(self.coverage.years.iter().copied())
    }

    pub fn weather_source(&self) -> Source {
        Source::from_location(&self.sources.weather)
    }

    pub fn water_quality_source(&self) -> Source {
        Source::from_location(&self.sources.water_quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_five_year_coverage() {
        let registry = CoverageRegistry::default();

        assert_eq!(
            registry.years(),
            vec![1960, 1965, 1970, 1975, 1980, 1985, 1990, 1995, 2000, 2005, 2010, 2015, 2020]
        );
        assert!(registry.contains(1960));
        assert!(registry.contains(2020));
        assert!(!registry.contains(1961));
        assert!(!registry.contains(2021));
    }

    #[test]
    fn should_sort_and_dedupe_coverage_years() {
        let registry = CoverageRegistry::new(vec![2000, 1990, 2000]);
        assert_eq!(registry.years(), vec![1990, 2000]);
    }

    #[test]
    fn should_parse_full_config() {
        let config = DashboardConfig::from_toml(
            r#"
            [sources]
            weather = "https://example.org/weather.csv"
            water_quality = "data/turbidity.csv.gz"

            [coverage]
            years = [2018, 2019]

            [analysis]
            warm_threshold_f = 60.5
            default_year_min = 1900
            default_year_max = 2000
            "#,
        )
        .unwrap();

        assert_eq!(config.sources.weather, "https://example.org/weather.csv");
        assert_eq!(config.coverage_registry().years(), vec![2018, 2019]);
        assert_eq!(config.analysis.warm_threshold_f, 60.5);
        assert_eq!(config.analysis.default_year_min, 1900);
    }

    #[test]
    fn should_fill_missing_keys_with_defaults() {
        let config = DashboardConfig::from_toml("[analysis]\nwarm_threshold_f = 50.0\n").unwrap();

        assert_eq!(config.analysis.warm_threshold_f, 50.0);
        assert_eq!(config.analysis.default_year_max, DEFAULT_YEAR_MAX);
        assert_eq!(config.sources, SourceConfig::default());
        assert_eq!(config.coverage_registry(), CoverageRegistry::default());
    }

    #[test]
    fn should_reject_malformed_config() {
        let err = DashboardConfig::from_toml("[coverage]\nyears = \"soon\"\n").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn should_use_defaults_when_file_missing() {
        let config =
            DashboardConfig::load_or_default(Path::new("/nonexistent/envdash.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }
}
