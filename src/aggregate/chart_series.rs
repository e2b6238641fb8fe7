//! Auswahl der Gateway-Serien für die Trend-Charts.

use crate::core::Gateway;
use crate::payload::{DataSeries, TrendPayload};
use indexmap::IndexMap;
use serde::Serialize;

/// Chart-Daten einer Region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionChart {
    pub region_name: String,
    /// Serienname → Serie
    pub data: IndexMap<String, DataSeries>,
}

fn is_gateway_series(name: &str) -> bool {
    Gateway::ALL
        .iter()
        .any(|g| name.ends_with(g.series_suffix()))
}

/// Behält nur Serien, deren Name auf `- BDS`, `- BTC` oder `- PNK` endet.
///
/// Bei doppeltem Namen ersetzt die spätere Serie die frühere an deren Position.
pub fn extract_gateway_series(series: &[DataSeries]) -> IndexMap<String, DataSeries> {
    series
        .iter()
        .filter(|s| is_gateway_series(&s.name))
        .map(|s| (s.name.clone(), s.clone()))
        .collect()
}

/// Wendet `extract_gateway_series` auf jede Region an; leere Regionen entfallen.
pub fn region_charts(trend: &TrendPayload) -> Vec<RegionChart> {
    trend
        .regions
        .iter()
        .filter_map(|(region, series)| {
            let data = extract_gateway_series(series);
            if data.is_empty() {
                log::debug!("Region '{}' ohne Gateway-Serien, uebersprungen", region);
                return None;
            }
            Some(RegionChart {
                region_name: region.clone(),
                data,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str) -> DataSeries {
        DataSeries {
            name: name.to_string(),
            data: vec![1.0, 2.0],
            kind: "line".to_string(),
        }
    }

    #[test]
    fn test_only_gateway_suffixes_survive() {
        let input = vec![
            series("MDC - BDS"),
            series("MDC - JT2"),
            series("PUB - PNK"),
            series("BTC"),
            series("PUB - BTC"),
        ];
        let out = extract_gateway_series(&input);
        assert_eq!(
            out.keys().collect::<Vec<_>>(),
            vec!["MDC - BDS", "PUB - PNK", "PUB - BTC"]
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let input = vec![series("A - BDS"), series("A - X"), series("B - PNK")];
        let once = extract_gateway_series(&input);
        let values: Vec<DataSeries> = once.values().cloned().collect();
        let twice = extract_gateway_series(&values);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_region_charts_drop_empty_regions() {
        let mut trend = TrendPayload::default();
        trend
            .regions
            .insert("sumbagut".to_string(), vec![series("MDC - BDS")]);
        trend
            .regions
            .insert("jabo".to_string(), vec![series("CKP - JT2")]);
        trend.regions.insert("kalimantan".to_string(), Vec::new());

        let charts = region_charts(&trend);
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].region_name, "sumbagut");
        assert!(charts[0].data.contains_key("MDC - BDS"));
    }
}
