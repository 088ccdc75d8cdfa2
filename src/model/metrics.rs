//! Model evaluation metrics displayed on the marketing page

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One evaluation indicator of the production fraud model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetric {
    pub name: String,
    pub value: f64,
    /// Upper bound of the metric scale
    pub full_mark: f64,
}

/// Published evaluation figures for the deployed classifier
pub fn evaluation_metrics() -> Vec<ModelMetric> {
    [
        ("Accuracy", 94.0),
        ("Precision", 92.0),
        ("Recall", 89.0),
        ("F1-Score", 91.0),
        ("ROC-AUC", 96.0),
    ]
    .into_iter()
    .map(|(name, value)| ModelMetric {
        name: name.to_string(),
        value,
        full_mark: 100.0,
    })
    .collect()
}
