//! Tabular rendering of station statistics
//!
//! Each [`StatisticKind`] maps to a fixed column specification: header text,
//! numeric format and accessor. Columns are right-aligned to the width of
//! their header and joined with `" | "`. The station column always leads.

use crate::app::services::station_stats::aggregator::StationStats;
use crate::config::{ReportConfig, StatisticKind};
use crate::constants::report::{
    COLUMN_SEPARATOR, MAX_TEMP_HEADER, MEAN_TEMP_HEADER, MIN_TEMP_HEADER,
    OBSERVATION_COUNT_HEADER, STATION_HEADER, TOTAL_DISTANCE_HEADER, UNDEFINED_VALUE,
};

/// Numeric format of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    /// Whole number
    Integer,
    /// One decimal place
    OneDecimal,
}

/// Value read from a station for one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatisticValue {
    Integer(Option<i64>),
    Decimal(Option<f64>),
}

/// Static description of a report column
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub format: ColumnFormat,
    pub accessor: fn(&StationStats) -> StatisticValue,
}

impl ColumnSpec {
    /// Column width, taken from the header
    pub fn width(&self) -> usize {
        self.header.chars().count()
    }

    /// Render the value of this column for one station
    pub fn render(&self, stats: &StationStats) -> String {
        let width = self.width();
        match ((self.accessor)(stats), self.format) {
            (StatisticValue::Integer(Some(value)), _) => format!("{:>width$}", value),
            (StatisticValue::Decimal(Some(value)), ColumnFormat::OneDecimal) => {
                format!("{:>width$.1}", value)
            }
            (StatisticValue::Decimal(Some(value)), ColumnFormat::Integer) => {
                format!("{:>width$.0}", value)
            }
            (StatisticValue::Integer(None) | StatisticValue::Decimal(None), _) => {
                format!("{:>width$}", UNDEFINED_VALUE)
            }
        }
    }
}

static MIN_TEMP_COLUMN: ColumnSpec = ColumnSpec {
    header: MIN_TEMP_HEADER,
    format: ColumnFormat::Integer,
    accessor: |s| StatisticValue::Integer(s.min_temp_celsius()),
};

static MAX_TEMP_COLUMN: ColumnSpec = ColumnSpec {
    header: MAX_TEMP_HEADER,
    format: ColumnFormat::Integer,
    accessor: |s| StatisticValue::Integer(s.max_temp_celsius()),
};

static MEAN_TEMP_COLUMN: ColumnSpec = ColumnSpec {
    header: MEAN_TEMP_HEADER,
    format: ColumnFormat::OneDecimal,
    accessor: |s| StatisticValue::Decimal(s.mean_temp_celsius()),
};

static OBSERVATION_COUNT_COLUMN: ColumnSpec = ColumnSpec {
    header: OBSERVATION_COUNT_HEADER,
    format: ColumnFormat::Integer,
    accessor: |s| StatisticValue::Integer(i64::try_from(s.count()).ok()),
};

static TOTAL_DISTANCE_COLUMN: ColumnSpec = ColumnSpec {
    header: TOTAL_DISTANCE_HEADER,
    format: ColumnFormat::OneDecimal,
    accessor: |s| StatisticValue::Decimal(Some(s.total_distance_km())),
};

impl StatisticKind {
    /// Column specification for this statistic
    pub fn column(self) -> &'static ColumnSpec {
        match self {
            StatisticKind::MinTemp => &MIN_TEMP_COLUMN,
            StatisticKind::MaxTemp => &MAX_TEMP_COLUMN,
            StatisticKind::MeanTemp => &MEAN_TEMP_COLUMN,
            StatisticKind::ObservationCount => &OBSERVATION_COUNT_COLUMN,
            StatisticKind::TotalDistance => &TOTAL_DISTANCE_COLUMN,
        }
    }
}

/// Renders station statistics as a header row plus one row per station
#[derive(Debug, Clone)]
pub struct StationReport<'a> {
    config: &'a ReportConfig,
}

impl<'a> StationReport<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    fn station_width() -> usize {
        STATION_HEADER.chars().count()
    }

    /// Header row
    pub fn header(&self) -> String {
        std::iter::once(STATION_HEADER)
            .chain(self.config.statistics().map(|kind| kind.column().header))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }

    /// Data row for one station
    pub fn row(&self, stats: &StationStats) -> String {
        let width = Self::station_width();
        std::iter::once(format!("{:>width$}", stats.station()))
            .chain(
                self.config
                    .statistics()
                    .map(|kind| kind.column().render(stats)),
            )
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }

    /// Header and rows, each terminated by a newline
    pub fn render<'s>(&self, stations: impl IntoIterator<Item = &'s StationStats>) -> String {
        let mut output = self.header();
        output.push('\n');
        for stats in stations {
            output.push_str(&self.row(stats));
            output.push('\n');
        }
        output
    }
}
