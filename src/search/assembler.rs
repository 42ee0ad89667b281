use chrono::{DateTime, Duration, Local};

use crate::models::{ResultRow, SearchRequest};

const SOURCE_NAME: &str = "新聞網站";
const ARTICLE_URL: &str = "https://example.com";
const LABEL_COUNT: usize = 3;
const ROWS_PER_LABEL: usize = 7;

// Placeholder rows standing in for a real search API call: the original
// keyword plus the first two related terms each label a block of seven
// articles. View counts and timestamps decay with the global row index.
pub fn build_results(
    request: &SearchRequest,
    related: &[String],
    now: DateTime<Local>,
) -> Vec<ResultRow> {
    let mut labels = vec![request.keyword.as_str()];
    labels.extend(related.iter().map(String::as_str));
    labels.truncate(LABEL_COUNT);

    let mut rows = Vec::with_capacity(labels.len() * ROWS_PER_LABEL);
    for (block, label) in labels.iter().enumerate() {
        for index in 1..=ROWS_PER_LABEL {
            let global = (block * ROWS_PER_LABEL + index - 1) as i64;
            rows.push(ResultRow {
                title: format!("{} 相關新聞 {}", label, index),
                source: SOURCE_NAME.to_string(),
                published_at: now - Duration::days(global),
                view_count: 1000 - 30 * global,
                url: ARTICLE_URL.to_string(),
                summary: format!("這是一篇包含「{}」的新聞摘要...", label),
                matched_keyword: (*label).to_string(),
            });
        }
    }

    // View counts already decrease with the global index; descending order
    // is still part of the contract.
    rows.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    rows
}
