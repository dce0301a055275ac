use serde::{Deserialize, Serialize};

/// One value of a year-over-year comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: u32,
}

impl YearValue {
    pub fn new(year: i32, value: u32) -> Self {
        Self { year, value }
    }
}

/// Row of a year-over-year chart
///
/// `label` is the category (a `dd/MM` day, a package name, a lead-time
/// range...). `values` keeps the order of the years the row was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub values: Vec<YearValue>,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, year: i32, value: u32) {
        self.values.push(YearValue::new(year, value));
    }

    /// Value for a year, `None` if the row was not built for it
    pub fn value_for(&self, year: i32) -> Option<u32> {
        self.values.iter().find(|v| v.year == year).map(|v| v.value)
    }
}

/// Money (or any fractional) value of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearAmount {
    pub year: i32,
    pub value: f64,
}

/// Row of a year-over-year chart with fractional values (revenue, running sums)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountPoint {
    pub label: String,
    pub values: Vec<YearAmount>,
}

impl AmountPoint {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, year: i32, value: f64) {
        self.values.push(YearAmount { year, value });
    }

    pub fn value_for(&self, year: i32) -> Option<f64> {
        self.values.iter().find(|v| v.year == year).map(|v| v.value)
    }
}
