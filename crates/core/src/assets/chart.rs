use serde::{Deserialize, Serialize};

use crate::types::AssetId;

/// A single plotted value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(alias = "X")]
    pub x: f64,
    #[serde(alias = "Y")]
    pub y: f64,
}

/// A chart with titled axes and an ordered series of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub id: AssetId,
    pub description: String,
    pub title: String,
    #[serde(alias = "xAxesTitle")]
    pub x_axis_title: String,
    #[serde(alias = "yAxesTitle")]
    pub y_axis_title: String,
    pub data_points: Vec<Point>,
}
