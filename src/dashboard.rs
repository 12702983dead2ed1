//! Read API used by the presentation layer.
//!
//! A [`Dashboard`] is built in one pass (parse, normalise, aggregate) from the
//! two source texts and is immutable afterwards. Views are computed on demand
//! for the year the caller asks about.

use tracing::info;

use crate::{
    aggregate::{
        build_year_profile, compute_monthly_aggregates, compute_yearly_aggregates,
        find_first_threshold_year, ChartPoint, MonthlyTemperatureAggregate, YearProfile,
        YearlyTemperatureAggregate,
    },
    align::{Aligner, MonthlyDualPoint, PairedSample},
    config::{CoverageRegistry, DashboardConfig},
    deserialise::deserialise,
    download::{fetch_sources, SourceKind},
    error::PipelineError,
    reading::{TurbiditySample, WeatherSample},
};

/// Inclusive range of selectable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// Joined temperature and turbidity data for one year.
///
/// Both series are empty when `joinable` is false.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinedView {
    pub joinable: bool,
    pub dual_series: Vec<MonthlyDualPoint>,
    pub paired_samples: Vec<PairedSample>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    weather: Vec<WeatherSample>,
    turbidity: Vec<TurbiditySample>,
    monthly: Vec<MonthlyTemperatureAggregate>,
    yearly: Vec<YearlyTemperatureAggregate>,
    first_threshold_year: Option<YearlyTemperatureAggregate>,
    year_range: YearRange,
    coverage: CoverageRegistry,
}

impl Dashboard {
    /// Fetches both sources and builds the dashboard.
    pub async fn load(config: &DashboardConfig) -> Result<Self, PipelineError> {
        let (weather_text, water_quality_text) =
            fetch_sources(&config.weather_source(), &config.water_quality_source()).await?;

        Self::from_texts(&weather_text, &water_quality_text, config)
    }

    /// Builds the dashboard from already fetched source texts.
    ///
    /// Fails when either text holds no records at all; rows that merely fail
    /// validation are dropped.
    pub fn from_texts(
        weather_text: &str,
        water_quality_text: &str,
        config: &DashboardConfig,
    ) -> Result<Self, PipelineError> {
        let weather = deserialise::<WeatherSample>(weather_text, SourceKind::Weather);
        if weather.records == 0 {
            return Err(PipelineError::EmptySource(SourceKind::Weather));
        }

        let turbidity =
            deserialise::<TurbiditySample>(water_quality_text, SourceKind::WaterQuality);
        if turbidity.records == 0 {
            return Err(PipelineError::EmptySource(SourceKind::WaterQuality));
        }

        let dashboard = Self::from_samples(weather.samples, turbidity.samples, config);

        info!(
            weather = dashboard.weather.len(),
            turbidity = dashboard.turbidity.len(),
            months = dashboard.monthly.len(),
            years = dashboard.yearly.len(),
            "dashboard ready"
        );

        Ok(dashboard)
    }

    /// Builds the dashboard from normalised samples.
    pub fn from_samples(
        weather: Vec<WeatherSample>,
        turbidity: Vec<TurbiditySample>,
        config: &DashboardConfig,
    ) -> Self {
        let monthly = compute_monthly_aggregates(&weather);
        let yearly = compute_yearly_aggregates(&monthly);
        let first_threshold_year =
            find_first_threshold_year(&yearly, config.analysis.warm_threshold_f);

        let year_range = match (
            weather.iter().map(|s| s.year).min(),
            weather.iter().map(|s| s.year).max(),
        ) {
            (Some(min), Some(max)) => YearRange { min, max },
            _ => YearRange {
                min: config.analysis.default_year_min,
                max: config.analysis.default_year_max,
            },
        };

        Dashboard {
            weather,
            turbidity,
            monthly,
            yearly,
            first_threshold_year,
            year_range,
            coverage: config.coverage_registry(),
        }
    }

    /// Re-fetches and rebuilds. On failure the current state is kept.
    pub async fn refresh(&mut self, config: &DashboardConfig) -> Result<(), PipelineError> {
        *self = Self::load(config).await?;
        Ok(())
    }

    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    /// The year selected before the user picks one: the latest in range.
    pub fn default_year(&self) -> i32 {
        self.year_range.max
    }

    pub fn monthly_profile(&self, year: i32) -> YearProfile {
        build_year_profile(year, &self.monthly)
    }

    pub fn monthly_chart(&self, year: i32) -> Vec<ChartPoint> {
        self.monthly_profile(year).chart_points()
    }

    pub fn monthly_aggregates(&self) -> &[MonthlyTemperatureAggregate] {
        &self.monthly
    }

    pub fn yearly_series(&self) -> &[YearlyTemperatureAggregate] {
        &self.yearly
    }

    pub fn first_threshold_year(&self) -> Option<&YearlyTemperatureAggregate> {
        self.first_threshold_year.as_ref()
    }

    pub fn is_year_joinable(&self, year: i32) -> bool {
        self.aligner().is_year_joinable(year)
    }

    pub fn joined_view(&self, year: i32) -> JoinedView {
        let aligner = self.aligner();

        match (
            aligner.build_dual_monthly_series(year),
            aligner.build_paired_samples(year),
        ) {
            (Some(dual_series), Some(paired_samples)) => JoinedView {
                joinable: true,
                dual_series,
                paired_samples,
            },
            _ => JoinedView::default(),
        }
    }

    pub fn coverage_years(&self) -> Vec<i32> {
        self.coverage.years()
    }

    pub fn weather_samples(&self) -> &[WeatherSample] {
        &self.weather
    }

    pub fn turbidity_samples(&self) -> &[TurbiditySample] {
        &self.turbidity
    }

    fn aligner(&self) -> Aligner<'_> {
        Aligner::new(&self.coverage, &self.weather, &self.turbidity)
    }
}

// -- Tests -------------------------------------------------------------------
