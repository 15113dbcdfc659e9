use std::collections::BTreeMap;

/// Optional parameters for listing records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRecordsOptions {
    /// Equality filters; keys are sent verbatim as query keys.
    pub filters: BTreeMap<String, String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<String>,
    /// `asc` or `desc` (any case). Other values are dropped and only the
    /// column is sent.
    pub sort_direction: Option<String>,
}

impl ListRecordsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(column.into(), value.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn sort_by(mut self, column: impl Into<String>) -> Self {
        self.sort_by = Some(column.into());
        self
    }

    pub fn sort_direction(mut self, direction: impl Into<String>) -> Self {
        self.sort_direction = Some(direction.into());
        self
    }

    /// Translate the options into query parameters.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }

        if let Some(column) = self.sort_by.as_deref().filter(|c| !c.is_empty()) {
            let direction = self
                .sort_direction
                .as_deref()
                .map(str::to_ascii_lowercase)
                .filter(|d| d == "asc" || d == "desc");
            let sort = match direction {
                Some(direction) => format!("{}:{}", column, direction),
                None => column.to_string(),
            };
            pairs.push(("sort".to_string(), sort));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_list_records_options_default() {
        let options = ListRecordsOptions::default();
        assert!(options.filters.is_empty());
        assert!(options.limit.is_none());
        assert!(options.offset.is_none());
        assert!(options.to_query_pairs().is_empty());
    }

    #[test]
    fn test_filters_limit_offset() {
        let options = ListRecordsOptions::new()
            .filter("color", "Blue")
            .filter("", "ignored")
            .limit(10)
            .offset(0);
        assert_eq!(
            options.to_query_pairs(),
            vec![pair("color", "Blue"), pair("limit", "10"), pair("offset", "0")]
        );
    }

    #[test]
    fn test_sort_direction_is_normalized() {
        let options = ListRecordsOptions::new().sort_by("quantity").sort_direction("DESC");
        assert_eq!(options.to_query_pairs(), vec![pair("sort", "quantity:desc")]);

        let options = ListRecordsOptions::new().sort_by("quantity").sort_direction("asc");
        assert_eq!(options.to_query_pairs(), vec![pair("sort", "quantity:asc")]);
    }

    #[test]
    fn test_invalid_sort_direction_keeps_column() {
        let options = ListRecordsOptions::new().sort_by("quantity").sort_direction("upward");
        assert_eq!(options.to_query_pairs(), vec![pair("sort", "quantity")]);

        let options = ListRecordsOptions::new().sort_by("quantity");
        assert_eq!(options.to_query_pairs(), vec![pair("sort", "quantity")]);
    }

    #[test]
    fn test_direction_without_column_is_ignored() {
        let options = ListRecordsOptions::new().sort_direction("asc");
        assert!(options.to_query_pairs().is_empty());

        let options = ListRecordsOptions::new().sort_by("").sort_direction("asc");
        assert!(options.to_query_pairs().is_empty());
    }
}
