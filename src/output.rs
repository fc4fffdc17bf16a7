//! Output artifacts: CSV dumps and the yearly trend chart.
//!
//! Thin I/O collaborators around the aggregated data. The core pipeline
//! only supplies the table and the pivot; everything here is interchangeable
//! plumbing.

use crate::aggregate::{RecordTable, YearlyPivot};
use crate::error::{ArxtrendError, Result};
use plotters::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Full record table dump.
const FULL_TABLE_FILE: &str = "ai_crossdomain_trend.csv";
/// Per-topic dumps directory.
const PER_TOPIC_DIR: &str = "csv_by_field";
/// Rectangular year-by-topic count grid.
const PIVOT_FILE: &str = "ai_trend_yearly_counts.csv";
/// Yearly trend line chart.
const CHART_FILE: &str = "ai_trend_yearly_plot_summary_only.svg";

/// Serialize rows to a CSV file with a header row.
pub fn save_csv<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    info!(path = %path.as_ref().display(), rows = rows.len(), "Saved CSV");
    Ok(())
}

/// Write every artifact of a run under `out_dir`.
pub fn write_artifacts(out_dir: &Path, table: &RecordTable, pivot: &YearlyPivot) -> Result<()> {
    let per_topic_dir = out_dir.join(PER_TOPIC_DIR);
    fs::create_dir_all(&per_topic_dir)?;

    save_csv(out_dir.join(FULL_TABLE_FILE), table.records())?;

    for topic in &pivot.topics {
        let rows: Vec<_> = table.by_category(topic).cloned().collect();
        let name = format!("ai_trend_{}_summary_only.csv", topic);
        save_csv(per_topic_dir.join(name), &rows)?;
    }

    save_pivot_csv(&out_dir.join(PIVOT_FILE), pivot)?;
    render_chart(&out_dir.join(CHART_FILE), pivot)?;

    Ok(())
}

/// Write the pivot grid: one row per year, one column per topic.
fn save_pivot_csv(path: &Path, pivot: &YearlyPivot) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["year".to_string()];
    header.extend(pivot.topics.iter().cloned());
    wtr.write_record(&header)?;

    for (year, row) in pivot.years.iter().zip(&pivot.rows) {
        let mut rec = vec![year.to_string()];
        rec.extend(row.iter().map(|c| c.to_string()));
        wtr.write_record(&rec)?;
    }

    wtr.flush()?;
    info!(path = %path.display(), years = pivot.years.len(), "Saved pivot");
    Ok(())
}

/// Render the pivot as a line chart: one series per topic, year on the
/// x-axis, count on the y-axis.
pub fn render_chart(path: &Path, pivot: &YearlyPivot) -> Result<()> {
    let (first, last) = match (pivot.years.first(), pivot.years.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(()),
    };
    // Degenerate single-year windows still need a non-empty axis.
    let x_max = last.max(first + 1);
    let y_max = pivot.max_count() + 1;

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("AI x arXiv trend", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first..x_max, 0u64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Number of Papers")
        .draw()
        .map_err(chart_err)?;

    for (idx, topic) in pivot.topics.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        let points: Vec<(i32, u64)> = pivot
            .years
            .iter()
            .zip(&pivot.rows)
            .map(|(year, row)| (*year, row.get(idx).copied().unwrap_or(0)))
            .collect();

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(chart_err)?
            .label(topic.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!(path = %path.display(), series = pivot.topics.len(), "Saved chart");
    Ok(())
}

fn chart_err<E: std::fmt::Display>(e: E) -> ArxtrendError {
    ArxtrendError::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YearWindow;
    use crate::record::PaperRecord;
    use chrono::NaiveDate;

    fn record(category: &str, year: i32) -> PaperRecord {
        let published = NaiveDate::from_ymd_opt(year, 6, 15).expect("valid date");
        PaperRecord {
            title: format!("{} paper", category),
            summary: "An abstract.".to_string(),
            published,
            year,
            month: published.format("%Y-%m").to_string(),
            category: category.to_string(),
        }
    }

    fn fixture() -> (RecordTable, YearlyPivot) {
        let window = YearWindow::new(2020, 2021).expect("valid window");
        let topics = vec!["a".to_string(), "b".to_string()];
        let table = RecordTable::build(vec![
            vec![record("a", 2020), record("a", 2021)],
            vec![record("b", 2021)],
        ]);
        let pivot = table.pivot(window, &topics);
        (table, pivot)
    }

    #[test]
    fn writes_all_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (table, pivot) = fixture();

        write_artifacts(dir.path(), &table, &pivot).expect("artifacts written");

        assert!(dir.path().join(FULL_TABLE_FILE).is_file());
        assert!(dir.path().join(PER_TOPIC_DIR).join("ai_trend_a_summary_only.csv").is_file());
        assert!(dir.path().join(PER_TOPIC_DIR).join("ai_trend_b_summary_only.csv").is_file());
        assert!(dir.path().join(PIVOT_FILE).is_file());
        assert!(dir.path().join(CHART_FILE).is_file());
    }

    #[test]
    fn full_table_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (table, _) = fixture();
        let path = dir.path().join("table.csv");

        save_csv(&path, table.records()).expect("csv written");

        let body = std::fs::read_to_string(&path).expect("readable");
        let mut lines = body.lines();
        assert_eq!(
            lines.next(),
            Some("title,summary,published,year,month,category")
        );
        assert_eq!(lines.count(), table.len());
    }

    #[test]
    fn pivot_csv_is_rectangular() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, pivot) = fixture();
        let path = dir.path().join("pivot.csv");

        save_pivot_csv(&path, &pivot).expect("pivot written");

        let body = std::fs::read_to_string(&path).expect("readable");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "year,a,b");
        assert_eq!(lines.len(), 1 + pivot.years.len());
        assert_eq!(lines[1], "2020,1,0");
        assert_eq!(lines[2], "2021,1,1");
    }

    #[test]
    fn chart_with_empty_pivot_is_a_noop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pivot = YearlyPivot {
            years: Vec::new(),
            topics: Vec::new(),
            rows: Vec::new(),
        };
        let path = dir.path().join("chart.svg");
        render_chart(&path, &pivot).expect("noop succeeds");
        assert!(!path.exists());
    }
}
