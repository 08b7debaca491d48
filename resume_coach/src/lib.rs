//! Core report model and view shaping for the Resume Coach front end.
//!
//! Everything here is plain data: the shape of the `/analyze` response, the
//! fixed four-card view built from it, and the user-facing message strings.
//! The browser crate owns the DOM; this crate stays testable on the host.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Endpoint receiving the multipart upload.
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Multipart field name carrying the resume bytes.
pub const RESUME_FIELD: &str = "resume";

/// File-label text while no file is selected.
pub const FILE_LABEL_PLACEHOLDER: &str = "Choose a file";

/// Alert text shown after a successful analysis.
pub const SUCCESS_MESSAGE: &str = "Resume analysis completed successfully";

/// Placeholder rendered for a metric the server did not return.
pub const MISSING_METRIC: &str = "N/A";

/// How long a transient alert stays on screen.
pub const ALERT_DISMISS: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Please select a resume file to analyze")]
    NoFileSelected,
    #[error("Failed to analyze resume")]
    AnalysisFailed,
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed analysis response: {0}")]
    InvalidResponse(String),
}

/// A metric as it arrives on the wire. The server is free to send either a
/// number (`"score": 85`) or a label (`"readability": "Good"`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    fn render(&self) -> String {
        match self {
            MetricValue::Number(n) => format_number(*n),
            MetricValue::Text(s) => s.clone(),
        }
    }
}

/// Integral values drop the trailing `.0` so a score of `85.0` reads "85".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Deserialized `/analyze` response. Every metric is optional; a field the
/// server omits renders as [`MISSING_METRIC`] instead of failing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default)]
    pub score: Option<MetricValue>,
    #[serde(default)]
    pub keyword_match: Option<MetricValue>,
    #[serde(default)]
    pub readability: Option<MetricValue>,
    #[serde(default)]
    pub experience_level: Option<MetricValue>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// One scalar value paired with its label.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

/// Display-ready report: four metric cards in fixed order plus the
/// suggestion strings in the order the server produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportView {
    pub metrics: Vec<MetricCard>,
    pub suggestions: Vec<String>,
}

impl ReportView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let metrics = vec![
            MetricCard {
                label: "Overall Score",
                value: render_metric(&report.score),
            },
            MetricCard {
                label: "Keywords Match",
                value: render_percent(&report.keyword_match),
            },
            MetricCard {
                label: "Readability",
                value: render_metric(&report.readability),
            },
            MetricCard {
                label: "Experience Level",
                value: render_metric(&report.experience_level),
            },
        ];
        Self {
            metrics,
            suggestions: report.suggestions.clone(),
        }
    }
}

fn render_metric(value: &Option<MetricValue>) -> String {
    value
        .as_ref()
        .map(MetricValue::render)
        .unwrap_or_else(|| MISSING_METRIC.to_string())
}

/// Keyword match is a percentage; the suffix applies only when the server
/// sent a number, a label passes through untouched.
fn render_percent(value: &Option<MetricValue>) -> String {
    match value {
        Some(MetricValue::Number(n)) => format!("{}%", format_number(*n)),
        Some(MetricValue::Text(s)) => s.clone(),
        None => MISSING_METRIC.to_string(),
    }
}

/// Text for the file label: the chosen file's name, or the placeholder when
/// nothing is selected.
pub fn file_label_text(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => FILE_LABEL_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> AnalysisReport {
        serde_json::from_str(
            r#"{
                "score": 85,
                "keywordMatch": 72,
                "readability": "Good",
                "experienceLevel": "Senior",
                "suggestions": ["Add more action verbs", "Quantify achievements"]
            }"#,
        )
        .expect("sample response deserializes")
    }

    #[test]
    fn view_has_four_cards_in_fixed_order() {
        let view = ReportView::from_report(&sample_report());
        let labels: Vec<_> = view.metrics.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            [
                "Overall Score",
                "Keywords Match",
                "Readability",
                "Experience Level"
            ]
        );
        let values: Vec<_> = view.metrics.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["85", "72%", "Good", "Senior"]);
    }

    #[test]
    fn suggestions_keep_server_order() {
        let view = ReportView::from_report(&sample_report());
        assert_eq!(
            view.suggestions,
            ["Add more action verbs", "Quantify achievements"]
        );
    }

    #[test]
    fn empty_suggestions_render_empty_list() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"score": 60, "suggestions": []}"#).unwrap();
        let view = ReportView::from_report(&report);
        assert!(view.suggestions.is_empty());
        assert_eq!(view.metrics.len(), 4);
    }

    #[test]
    fn missing_metrics_render_placeholder() {
        let report: AnalysisReport = serde_json::from_str(r#"{"score": 85}"#).unwrap();
        let view = ReportView::from_report(&report);
        let values: Vec<_> = view.metrics.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["85", "N/A", "N/A", "N/A"]);
    }

    #[test]
    fn null_metric_counts_as_missing() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"score": null, "keywordMatch": 40}"#).unwrap();
        let view = ReportView::from_report(&report);
        assert_eq!(view.metrics[0].value, "N/A");
        assert_eq!(view.metrics[1].value, "40%");
    }

    #[test]
    fn numeric_score_as_string_passes_through() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"score": "B+", "keywordMatch": "strong"}"#).unwrap();
        let view = ReportView::from_report(&report);
        assert_eq!(view.metrics[0].value, "B+");
        // Non-numeric keyword match gets no percent suffix.
        assert_eq!(view.metrics[1].value, "strong");
    }

    #[test]
    fn fractional_numbers_keep_their_digits() {
        assert_eq!(format_number(85.0), "85");
        assert_eq!(format_number(72.5), "72.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn missing_suggestions_default_to_empty() {
        let report: AnalysisReport = serde_json::from_str("{}").unwrap();
        assert!(report.suggestions.is_empty());
        let view = ReportView::from_report(&report);
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn file_label_falls_back_to_placeholder() {
        assert_eq!(file_label_text(Some("resume.pdf")), "resume.pdf");
        assert_eq!(file_label_text(Some("")), FILE_LABEL_PLACEHOLDER);
        assert_eq!(file_label_text(None), FILE_LABEL_PLACEHOLDER);
    }

    #[test]
    fn error_messages_match_alert_texts() {
        assert_eq!(
            CoachError::NoFileSelected.to_string(),
            "Please select a resume file to analyze"
        );
        assert_eq!(
            CoachError::AnalysisFailed.to_string(),
            "Failed to analyze resume"
        );
    }
}
