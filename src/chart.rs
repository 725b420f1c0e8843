// src/chart.rs
//! Chart-ready series for graphical front ends.
//!
//! The sentiment chart is a bar chart of the VADER scores when present,
//! otherwise a polarity/subjectivity scatter point. Emotions get their own
//! bar chart, only when at least one emotion was detected.

use serde::Serialize;

use crate::engine::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub title: &'static str,
    pub y_label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fixed y-axis range, if the chart wants one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x: f64,
    pub y: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Dashed guides: neutral polarity and mid subjectivity.
    pub guide_x: f64,
    pub guide_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SentimentChart {
    Bar(BarSeries),
    Scatter(ScatterPoint),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub sentiment: Option<SentimentChart>,
    pub emotions: Option<BarSeries>,
}

impl ChartData {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let sentiment = if let Some(v) = result.vader() {
            Some(SentimentChart::Bar(BarSeries {
                title: "VADER Sentiment Scores",
                y_label: "Score",
                labels: ["Negative", "Neutral", "Positive", "Compound"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                values: vec![v.negative, v.neutral, v.positive, v.compound],
                y_range: Some((-1.0, 1.0)),
            }))
        } else {
            result.textblob().map(|t| {
                SentimentChart::Scatter(ScatterPoint {
                    title: "TextBlob Analysis",
                    x_label: "Polarity (-1 to 1)",
                    y_label: "Subjectivity (0 to 1)",
                    x: t.polarity,
                    y: t.subjectivity,
                    x_range: (-1.0, 1.0),
                    y_range: (0.0, 1.0),
                    guide_x: 0.0,
                    guide_y: 0.5,
                })
            })
        };

        let emotions = result.emotions().any().then(|| {
            let (labels, values): (Vec<String>, Vec<f64>) = result
                .emotions()
                .non_zero()
                .map(|(e, n)| (e.as_str().to_string(), n as f64))
                .unzip();
            BarSeries {
                title: "Emotion Analysis",
                y_label: "Score",
                labels,
                values,
                y_range: None,
            }
        });

        Self {
            sentiment,
            emotions,
        }
    }
}
