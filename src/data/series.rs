//! Accuracy Series Module
//! Hard-coded accuracy measurements for each noise-mask ratio.

/// Noise-mask ratios, one series each.
pub const MASK_RATIOS: [f64; 3] = [0.1, 0.3, 0.5];

/// Noise-sample ratios, one x-axis group each.
pub const MU_VALUES: [f64; 3] = [0.2, 0.4, 0.6];

/// One named sequence of accuracy values, one value per group.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Series labelled by its noise-mask ratio, e.g. "mask=0.1".
    pub fn for_mask_ratio(ratio: f64, values: Vec<f64>) -> Self {
        Self::new(format!("mask={}", ratio), values)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered x-axis group labels. `Series::values[i]` pairs with label `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLabels(pub Vec<String>);

impl GroupLabels {
    /// Labels of the form "μ=0.2".
    pub fn from_mu(values: &[f64]) -> Self {
        Self(values.iter().map(|mu| format!("μ={}", mu)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Everything drawn on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub series: Vec<Series>,
    pub groups: GroupLabels,
}

/// Accuracy for mask ratios 0.1, 0.3 and 0.5 across μ = 0.2, 0.4, 0.6.
pub fn mask_accuracy_dataset() -> Dataset {
    let a = vec![0.7400, 0.7300, 0.7000];
    let b = vec![0.7305, 0.7195, 0.6925];
    let c = vec![0.7407, 0.7256, 0.6855];

    let series = MASK_RATIOS
        .iter()
        .zip([a, b, c])
        .map(|(&ratio, values)| Series::for_mask_ratio(ratio, values))
        .collect();

    Dataset {
        series,
        groups: GroupLabels::from_mu(&MU_VALUES),
    }
}
