//! Renders the monthly statistics as a Markdown document.

use crate::stats::MonthlyStatistics;
use crate::types::report_month::ReportMonth;
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report '{0}'")]
    Write(PathBuf, #[source] std::io::Error),
}

/// A finished report: the month it covers plus its aggregated figures.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: ReportMonth,
    pub statistics: MonthlyStatistics,
}

impl MonthlyReport {
    /// Renders the report document.
    ///
    /// The layout is a title, one line per scalar figure, then two tables
    /// headed `Параметр`/`Значение`: days per wind direction and days per
    /// precipitation category, in the order the statistics maps iterate.
    pub fn to_markdown(&self) -> String {
        let stats = &self.statistics;
        let mut doc = String::new();

        doc.push_str(&format!("# Отчет о погоде за {}\n\n", self.month));

        let scalars = [
            ("Минимальная температура", stats.min_temperature.to_string()),
            ("Максимальная температура", stats.max_temperature.to_string()),
            ("Средняя температура", stats.average_temperature.to_string()),
            ("Амплитуда температуры", stats.amplitude_temperature.to_string()),
            ("Минимальное давление", stats.min_pressure.to_string()),
            ("Максимальное давление", stats.max_pressure.to_string()),
            ("Среднее давление", stats.average_pressure.to_string()),
        ];
        for (label, value) in scalars {
            doc.push_str(&format!("{label}: {value}\n\n"));
        }

        push_count_table(
            &mut doc,
            stats
                .wind_directions_count
                .iter()
                .map(|(direction, count)| (direction.label(), *count)),
        );
        push_count_table(
            &mut doc,
            stats
                .weather_count
                .iter()
                .map(|(category, count)| (category.label(), *count)),
        );

        doc
    }

    /// Renders the report and writes it to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.to_markdown())
            .map_err(|source| ReportError::Write(path.to_path_buf(), source))?;
        info!("report written to '{}'", path.display());
        Ok(())
    }
}

fn push_count_table(doc: &mut String, rows: impl Iterator<Item = (&'static str, u32)>) {
    doc.push_str("| Параметр | Значение |\n");
    doc.push_str("| --- | --- |\n");
    for (label, count) in rows {
        doc.push_str(&format!("| {label} | {count} |\n"));
    }
    doc.push('\n');
}
