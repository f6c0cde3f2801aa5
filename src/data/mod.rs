//! Data module - Built-in accuracy series

mod series;

pub use series::{mask_accuracy_dataset, Series};
