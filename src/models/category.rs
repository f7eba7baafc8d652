// src/models/category.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Represents the 'categories' table. Read-only reference data.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: i64,

    /// Label such as "Science". The column is named `type`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub label: String,
}

/// Renders categories as `"1:Science, 2:Art, "`, the listing shown in
/// validation messages.
pub fn formatted_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{}:{}, ", c.id, c.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_list_keeps_trailing_separator() {
        let categories = vec![
            Category { id: 1, label: "Science".into() },
            Category { id: 2, label: "Art".into() },
        ];
        assert_eq!(formatted_list(&categories), "1:Science, 2:Art, ");
        assert_eq!(formatted_list(&[]), "");
    }
}
