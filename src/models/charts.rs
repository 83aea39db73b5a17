//! Static datasets behind the insights charts.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: &'static [u64],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDataset {
    pub title: &'static str,
    pub labels: &'static [&'static str],
    pub series: &'static [Series],
    pub y_min: u64,
    pub y_max: Option<u64>,
}

impl ChartDataset {
    /// Upper bound of the y axis: the configured max or the largest value.
    pub fn y_upper(&self) -> u64 {
        self.y_max.unwrap_or_else(|| {
            self.series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .max()
                .unwrap_or(0)
        })
    }
}

pub const SOIL_NUTRIENTS: ChartDataset = ChartDataset {
    title: "Soil Nutrients",
    labels: &[
        "Nitrogen",
        "Phosphorus",
        "Potassium",
        "pH Level",
        "Moisture",
        "Organic Matter",
    ],
    series: &[
        Series {
            name: "Current Levels",
            values: &[75, 68, 82, 70, 85, 78],
        },
        Series {
            name: "Optimal Levels",
            values: &[80, 75, 85, 75, 80, 80],
        },
    ],
    y_min: 0,
    y_max: Some(100),
};

pub const WATER_USAGE: ChartDataset = ChartDataset {
    title: "Water Usage (Liters/day)",
    labels: &["Traditional", "Smart Irrigation", "Savings"],
    series: &[Series {
        name: "Water Usage (Liters/day)",
        values: &[1000, 600, 400],
    }],
    y_min: 0,
    y_max: None,
};

pub const CROP_YIELD: ChartDataset = ChartDataset {
    title: "Crop Yield Index",
    labels: &["2019", "2020", "2021", "2022", "2023", "2024"],
    series: &[
        Series {
            name: "Traditional Farming",
            values: &[100, 105, 103, 108, 110, 112],
        },
        Series {
            name: "Smart Farming",
            values: &[100, 115, 125, 138, 145, 155],
        },
    ],
    y_min: 90,
    y_max: None,
};
