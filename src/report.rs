//! Named report tables for external sinks
//!
//! Renders the seven output tables (header row plus ordered data rows) for
//! whatever exporter consumes them; CSV serialization is provided as the
//! default sink. File-format fidelity beyond that is an exporter concern.

use crate::runner::ModelResults;
use std::error::Error;
use std::path::Path;

/// A named table: header row plus ordered data rows
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Write the table to `<dir>/<name>.csv`
    pub fn write_csv(&self, dir: &Path) -> Result<(), Box<dyn Error>> {
        let path = dir.join(format!("{}.csv", self.name));
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ModelResults {
    /// Render all seven tables in reporting order
    pub fn tables(&self) -> Vec<ReportTable> {
        vec![
            self.assumptions_table(),
            self.provisions_table(),
            self.assets_table(),
            self.capital_table(),
            self.risk_table(),
            self.stress_table(),
            self.dashboard_table(),
        ]
    }

    /// Write every table as CSV into the given directory
    pub fn write_csv_tables(&self, dir: &Path) -> Result<(), Box<dyn Error>> {
        std::fs::create_dir_all(dir)?;
        for table in self.tables() {
            table.write_csv(dir)?;
        }
        Ok(())
    }

    fn assumptions_table(&self) -> ReportTable {
        let mut table = ReportTable::new("Assumptions", &["Parameter", "Value"]);
        for (name, value) in self.assumptions.params.rows() {
            table.push(vec![name.to_string(), value.to_string()]);
        }
        table
    }

    fn provisions_table(&self) -> ReportTable {
        let mut table = ReportTable::new(
            "IFRS17_Technical_Provisions",
            &[
                "Date",
                "BEL",
                "Risk Adjustment",
                "CSM",
                "Loss Component",
                "Coverage Units",
                "Total Technical Provisions",
            ],
        );
        for row in &self.provisions.rows {
            table.push(vec![
                row.date.to_string(),
                format!("{:.2}", row.bel),
                format!("{:.2}", row.risk_adjustment),
                format!("{:.2}", row.csm),
                format!("{:.2}", row.loss_component),
                format!("{:.2}", row.coverage_units),
                format!("{:.2}", row.total),
            ]);
        }
        table
    }

    fn assets_table(&self) -> ReportTable {
        let mut table = ReportTable::new(
            "Assets",
            &[
                "Date",
                "Market Value",
                "Expected Return",
                "Duration",
                "Credit Quality",
            ],
        );
        for row in &self.assets.rows {
            table.push(vec![
                row.date.to_string(),
                format!("{:.2}", row.market_value),
                format!("{:.4}", row.expected_return),
                format!("{:.2}", row.duration),
                row.credit_quality.to_string(),
            ]);
        }
        table
    }

    fn capital_table(&self) -> ReportTable {
        let mut table = ReportTable::new("RBC2_Capital", &["Risk Component", "Capital Required"]);
        let c = &self.capital;
        for (name, value) in [
            ("C1 (Credit Risk)", c.components.c1),
            ("C2 (Insurance Risk)", c.components.c2),
            ("C3 (Market Risk)", c.components.c3),
            ("C4 (Operational Risk)", c.components.c4),
            ("Total Required Capital", c.required_capital),
            ("Available Capital", c.available_capital),
            ("RBC2 Ratio (%)", c.rbc_ratio),
        ] {
            table.push(vec![name.to_string(), format!("{:.2}", value)]);
        }
        table
    }

    fn risk_table(&self) -> ReportTable {
        let mut table = ReportTable::new(
            "Risk_Analysis",
            &["Risk Type", "Impact", "Probability", "Risk Weight", "Risk Margin"],
        );
        for row in &self.risk.rows {
            table.push(vec![
                row.risk_type.to_string(),
                format!("{:.2}", row.impact),
                format!("{:.4}", row.probability),
                format!("{:.2}", row.risk_weight),
                format!("{:.2}", row.risk_margin),
            ]);
        }
        table
    }

    fn stress_table(&self) -> ReportTable {
        let mut table = ReportTable::new(
            "Stress_Testing",
            &[
                "Scenario",
                "Asset Impact",
                "Liability Impact",
                "Capital Impact",
                "RBC2 Ratio Impact",
            ],
        );
        for result in &self.stress {
            table.push(vec![
                result.scenario.clone(),
                format!("{:.2}", result.asset_impact),
                format!("{:.2}", result.liability_impact),
                format!("{:.2}", result.capital_impact),
                format!("{:.2}", result.rbc_ratio_impact),
            ]);
        }
        table
    }

    fn dashboard_table(&self) -> ReportTable {
        let mut table =
            ReportTable::new("Dashboard", &["Metric", "Current", "Target", "Status"]);
        for metric in &self.dashboard.metrics {
            table.push(vec![
                metric.name.clone(),
                format!("{:.2}", metric.current),
                format!("{:.2}", metric.target),
                metric.status.to_string(),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use crate::forecast::TimeSeries;
    use crate::runner::ModelRunner;

    #[test]
    fn test_seven_named_tables() {
        let history = TimeSeries::monthly(
            2023,
            1,
            &[
                1_000_000.0, 1_020_000.0, 1_040_000.0, 1_065_000.0, 1_080_000.0, 1_100_000.0,
                1_120_000.0, 1_140_000.0, 1_160_000.0, 1_180_000.0, 1_200_000.0, 1_220_000.0,
            ],
        )
        .unwrap();
        let results = ModelRunner::new().run(&history, 12).unwrap();

        let tables = results.tables();
        let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Assumptions",
                "IFRS17_Technical_Provisions",
                "Assets",
                "RBC2_Capital",
                "Risk_Analysis",
                "Stress_Testing",
                "Dashboard",
            ]
        );

        // Every table has a header and at least one data row
        for table in &tables {
            assert!(!table.headers.is_empty());
            assert!(!table.rows.is_empty());
            for row in &table.rows {
                assert_eq!(row.len(), table.headers.len());
            }
        }

        // Provisions and assets carry one row per forecast period
        assert_eq!(tables[1].rows.len(), 24);
        assert_eq!(tables[2].rows.len(), 24);
        // Capital table carries the seven component/summary rows
        assert_eq!(tables[3].rows.len(), 7);
        // Dashboard carries the five metrics
        assert_eq!(tables[6].rows.len(), 5);
    }
}
