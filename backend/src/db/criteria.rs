use rusqlite::types::ToSql;

/// Accumulates `WHERE` conditions and their bound parameters.
///
/// Conditions are joined with `AND`. Text matching uses `LIKE` with the value
/// wrapped in `%` on both sides, which SQLite compares case-insensitively for
/// ASCII. Wildcard characters in the value are escaped so they match literally.
#[derive(Debug, Default)]
pub(crate) struct Predicate {
    clauses: Vec<String>,
    params: Vec<String>,
}

impl Predicate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `column` contains `value`. A `None` or empty value adds nothing.
    pub(crate) fn contains(self, column: &str, value: Option<&str>) -> Self {
        self.contains_any(&[column], value)
    }

    /// At least one of `columns` contains `value`. A `None` or empty value adds nothing.
    pub(crate) fn contains_any(mut self, columns: &[&str], value: Option<&str>) -> Self {
        let Some(value) = provided(value) else {
            return self;
        };
        let pattern = like_pattern(value);
        let alternatives: Vec<String> = columns
            .iter()
            .map(|column| {
                self.params.push(pattern.clone());
                format!("{column} LIKE ? ESCAPE '\\'")
            })
            .collect();
        self.clauses.push(format!("({})", alternatives.join(" OR ")));
        self
    }

    /// `column` is non-zero, applied only when `enabled`.
    pub(crate) fn is_true(mut self, column: &str, enabled: bool) -> Self {
        if enabled {
            self.clauses.push(format!("{column} <> 0"));
        }
        self
    }

    /// The `WHERE ...` suffix, or an empty string when there are no conditions.
    pub(crate) fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub(crate) fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p as &dyn ToSql).collect()
    }
}

/// `Some` unless the value is absent or empty. Whitespace is kept and matched literally.
pub(crate) fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
