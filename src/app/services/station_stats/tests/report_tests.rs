//! Tests for report rendering

use super::*;
use crate::app::models::Station;
use crate::app::services::station_stats::{StationReport, StationStats, StationStatsSet};
use crate::config::{ReportConfig, StatisticKind};

fn diagonal_stats() -> StationStats {
    let mut stats = StationStats::new(Station::Au);
    for obs in diagonal_flight() {
        stats.add(&obs);
    }
    stats
}

#[test]
fn test_full_row_layout() {
    let config = ReportConfig::default();
    let report = StationReport::new(&config);

    assert_eq!(
        report.row(&diagonal_stats()),
        "              AU |                        0 |                       10 |                   5.0 |                     11 |                14.1"
    );
}

#[test]
fn test_full_header_layout() {
    let config = ReportConfig::default();
    let report = StationReport::new(&config);

    assert_eq!(
        report.header(),
        "Observatory Code | Minimum Temperature (°C) | Maximum Temperature (°C) | \
         Mean Temperature (°C) | Number of Observations | Total Distance (Km)"
    );
}

#[test]
fn test_selected_columns_follow_declaration_order() {
    let config = ReportConfig::new([StatisticKind::TotalDistance, StatisticKind::ObservationCount]);
    let report = StationReport::new(&config);

    assert_eq!(
        report.header(),
        "Observatory Code | Number of Observations | Total Distance (Km)"
    );
    assert_eq!(
        report.row(&diagonal_stats()),
        "              AU |                     11 |                14.1"
    );
}

#[test]
fn test_station_column_always_present() {
    let config = ReportConfig::new([StatisticKind::MeanTemp]);
    let report = StationReport::new(&config);

    assert_eq!(report.header(), "Observatory Code | Mean Temperature (°C)");
    assert_eq!(report.row(&diagonal_stats()), "              AU |                   5.0");
}

#[test]
fn test_empty_station_renders_placeholders() {
    let config = ReportConfig::default();
    let report = StationReport::new(&config);

    assert_eq!(
        report.row(&StationStats::new(Station::Br)),
        "              BR |                        - |                        - |                     - |                      0 |                 0.0"
    );
}

#[test]
fn test_render_includes_every_station() {
    let mut set = StationStatsSet::new();
    for obs in diagonal_flight() {
        set.add(&obs);
    }

    let config = ReportConfig::from_flags(false, false, false, true, false);
    let output = StationReport::new(&config).render(set.iter());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "Observatory Code | Number of Observations");
    assert_eq!(lines[1], "              AR |                      0");
    assert_eq!(lines[2], "              AU |                     11");
    assert_eq!(lines[10], "              US |                      0");
    assert!(output.ends_with('\n'));
}

#[test]
fn test_column_widths_match_headers() {
    for kind in StatisticKind::ALL {
        let column = kind.column();
        let rendered = column.render(&diagonal_stats());
        assert_eq!(rendered.chars().count(), column.width());
    }
}
