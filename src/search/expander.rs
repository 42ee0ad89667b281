const FALLBACK_SUFFIXES: [&str; 10] = [
    "趨勢", "發展", "應用", "新聞", "分析", "報導", "評論", "研究", "創新", "未來",
];

#[derive(Debug, Clone)]
pub struct KeywordCategory {
    pub name: &'static str,
    pub terms: [&'static str; 10],
}

#[derive(Debug, Clone)]
pub struct KeywordTable {
    categories: Vec<KeywordCategory>,
}

impl KeywordTable {
    pub fn new(categories: Vec<KeywordCategory>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            KeywordCategory {
                name: "AI",
                terms: [
                    "人工智慧",
                    "機器學習",
                    "深度學習",
                    "神經網路",
                    "自然語言處理",
                    "電腦視覺",
                    "機器人",
                    "自動化",
                    "演算法",
                    "大數據",
                ],
            },
            KeywordCategory {
                name: "科技",
                terms: [
                    "創新",
                    "數位轉型",
                    "物聯網",
                    "雲端運算",
                    "區塊鏈",
                    "5G",
                    "資訊安全",
                    "軟體開發",
                    "硬體設備",
                    "智慧城市",
                ],
            },
            KeywordCategory {
                name: "教育",
                terms: [
                    "線上學習",
                    "遠距教學",
                    "教育科技",
                    "課程設計",
                    "學習平台",
                    "教學方法",
                    "教育資源",
                    "學習成效",
                    "教師培訓",
                    "教育創新",
                ],
            },
        ])
    }

    // Two passes over the table in definition order: a category-name match
    // wins over a term match.
    pub fn related_keywords(&self, keyword: &str) -> Vec<String> {
        let needle = keyword.to_lowercase();

        for category in &self.categories {
            if category.name.to_lowercase().contains(&needle) {
                return category.terms.iter().map(|term| term.to_string()).collect();
            }
        }

        for category in &self.categories {
            if category.name.to_lowercase().contains(&needle)
                || category
                    .terms
                    .iter()
                    .any(|term| term.to_lowercase().contains(&needle))
            {
                return category.terms.iter().map(|term| term.to_string()).collect();
            }
        }

        FALLBACK_SUFFIXES
            .iter()
            .map(|suffix| format!("{}{}", keyword, suffix))
            .collect()
    }
}
