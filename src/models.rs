use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "台灣")]
    Taiwan,
    #[serde(rename = "美國")]
    UnitedStates,
    #[serde(rename = "日本")]
    Japan,
    #[serde(rename = "韓國")]
    SouthKorea,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::Taiwan,
        Country::UnitedStates,
        Country::Japan,
        Country::SouthKorea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Country::Taiwan => "台灣",
            Country::UnitedStates => "美國",
            Country::Japan => "日本",
            Country::SouthKorea => "韓國",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "全部")]
    All,
    #[serde(rename = "政治")]
    Politics,
    #[serde(rename = "娛樂")]
    Entertainment,
    #[serde(rename = "體育")]
    Sports,
    #[serde(rename = "科技")]
    Technology,
    #[serde(rename = "財經")]
    Finance,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Politics,
        Category::Entertainment,
        Category::Sports,
        Category::Technology,
        Category::Finance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "全部",
            Category::Politics => "政治",
            Category::Entertainment => "娛樂",
            Category::Sports => "體育",
            Category::Technology => "科技",
            Category::Finance => "財經",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "過去24小時")]
    PastDay,
    #[serde(rename = "過去一週")]
    PastWeek,
    #[serde(rename = "過去一個月")]
    PastMonth,
    #[serde(rename = "過去三個月")]
    PastQuarter,
    #[serde(rename = "過去一年")]
    PastYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::PastDay,
        TimeRange::PastWeek,
        TimeRange::PastMonth,
        TimeRange::PastQuarter,
        TimeRange::PastYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::PastDay => "過去24小時",
            TimeRange::PastWeek => "過去一週",
            TimeRange::PastMonth => "過去一個月",
            TimeRange::PastQuarter => "過去三個月",
            TimeRange::PastYear => "過去一年",
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            TimeRange::PastDay => 1,
            TimeRange::PastWeek => 7,
            TimeRange::PastMonth => 30,
            TimeRange::PastQuarter => 90,
            TimeRange::PastYear => 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub country: Country,
    pub category: Category,
    pub time_range: TimeRange,
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub title: String,
    pub source: String,
    pub published_at: DateTime<Local>,
    pub view_count: i64,
    pub url: String,
    pub summary: String,
    pub matched_keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub session_id: String,
    pub keyword: String,
    pub related_keywords: Vec<String>,
    pub total_count: usize,
    pub results: Vec<ResultRow>,
    pub total_time_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeRangeOption {
    pub label: &'static str,
    pub days: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOptions {
    pub countries: Vec<Country>,
    pub categories: Vec<Category>,
    pub time_ranges: Vec<TimeRangeOption>,
}

impl SearchOptions {
    pub fn listing() -> Self {
        Self {
            countries: Country::ALL.to_vec(),
            categories: Category::ALL.to_vec(),
            time_ranges: TimeRange::ALL
                .iter()
                .map(|range| TimeRangeOption {
                    label: range.label(),
                    days: range.days(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_to_form_labels() {
        assert_eq!(serde_json::to_value(Country::Taiwan).unwrap(), "台灣");
        assert_eq!(serde_json::to_value(Category::Finance).unwrap(), "財經");
        assert_eq!(serde_json::to_value(TimeRange::PastDay).unwrap(), "過去24小時");
    }

    #[test]
    fn search_request_accepts_form_values() {
        let req: SearchRequest = serde_json::from_str(
            r#"{"country":"日本","category":"體育","time_range":"過去一個月","keyword":"棒球"}"#,
        )
        .unwrap();

        assert_eq!(req.country, Country::Japan);
        assert_eq!(req.category, Category::Sports);
        assert_eq!(req.time_range, TimeRange::PastMonth);
        assert_eq!(req.time_range.days(), 30);
        assert_eq!(req.keyword, "棒球");
    }

    #[test]
    fn unknown_form_value_is_rejected() {
        let result: Result<SearchRequest, _> = serde_json::from_str(
            r#"{"country":"火星","category":"全部","time_range":"過去一週","keyword":"AI"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn time_ranges_cover_the_form_windows() {
        let days: Vec<i64> = TimeRange::ALL.iter().map(|range| range.days()).collect();
        assert_eq!(days, [1, 7, 30, 90, 365]);
    }

    #[test]
    fn options_listing_matches_form_vocabulary() {
        let options = SearchOptions::listing();

        assert_eq!(options.countries.len(), 4);
        assert_eq!(options.categories.len(), 6);
        assert_eq!(options.time_ranges.len(), 5);
        assert_eq!(options.time_ranges[1].label, "過去一週");
        assert_eq!(options.time_ranges[1].days, 7);
    }
}
