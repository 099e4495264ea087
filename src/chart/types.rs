use serde::Serialize;

/// One plotted line. `name` is None when there is only one group size to
/// show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<usize>,
}

impl Series {
    pub fn unnamed(x: Vec<f64>, y: Vec<usize>) -> Self {
        Series { name: None, x, y }
    }

    pub fn named(name: &str, x: Vec<f64>, y: Vec<usize>) -> Self {
        Series {
            name: Some(name.to_string()),
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub series: Vec<Series>,
}
