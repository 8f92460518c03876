//! Плоская булева грамматика AND/OR/NOT по описанию товара.
//!
//! Приоритет фиксированный: AND > OR > NOT. В смешанном запросе
//! ("A AND B OR C") срабатывает только первый по приоритету оператор,
//! остальные связки трактуются как обычные ключевые слова.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordFilter {
    /// пустой запрос — пропускает всё
    All,
    Contains(String),
    AllOf(Vec<String>),
    AnyOf(Vec<String>),
    Except { include: String, exclude: String },
}

impl KeywordFilter {
    pub fn compile(query: &str) -> KeywordFilter {
        let q = query.trim().to_uppercase();
        if q.is_empty() {
            return KeywordFilter::All;
        }

        // связка считается найденной только как отдельный токен
        let tokens: Vec<&str> = q.split_whitespace().collect();
        if tokens.contains(&"AND") {
            return KeywordFilter::AllOf(
                tokens
                    .iter()
                    .filter(|t| **t != "AND")
                    .map(|t| t.to_string())
                    .collect(),
            );
        }
        if tokens.contains(&"OR") {
            return KeywordFilter::AnyOf(
                tokens
                    .iter()
                    .filter(|t| **t != "OR")
                    .map(|t| t.to_string())
                    .collect(),
            );
        }
        if tokens.contains(&"NOT") {
            // режем строку по первому вхождению NOT; пустая правая часть
            // входит в любое описание, такой запрос не пропустит ничего
            let (left, right) = q.split_once("NOT").unwrap_or((q.as_str(), ""));
            return KeywordFilter::Except {
                include: left.trim().to_string(),
                exclude: right.trim().to_string(),
            };
        }
        KeywordFilter::Contains(q)
    }

    /// Отсутствующее описание не проходит ни один ключевой фильтр;
    /// пустой запрос пропускает и его.
    pub fn matches(&self, description: Option<&str>) -> bool {
        let desc = match description {
            Some(d) => d.to_uppercase(),
            None => return matches!(self, KeywordFilter::All),
        };
        match self {
            KeywordFilter::All => true,
            KeywordFilter::Contains(s) => desc.contains(s.as_str()),
            KeywordFilter::AllOf(words) => words.iter().all(|w| desc.contains(w.as_str())),
            KeywordFilter::AnyOf(words) => words.iter().any(|w| desc.contains(w.as_str())),
            KeywordFilter::Except { include, exclude } => {
                desc.contains(include.as_str()) && !desc.contains(exclude.as_str())
            }
        }
    }
}
