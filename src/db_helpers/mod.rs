use crate::errors::RequestError;

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

/// Appends `WHERE`/`AND` equality filters to a base query, numbering the
/// placeholders in the order the params will be bound.
struct QueryBuilder {
    query: String,
    params: Vec<String>,
    seperator: &'static str,
}

impl QueryBuilder {
    fn new(initial: &str) -> Self {
        Self {
            query: initial.to_owned(),
            params: vec![],
            seperator: " WHERE ",
        }
    }

    fn add_param(mut self, filter: &str, param: Option<String>) -> Self {
        if let Some(value) = param {
            let filter = format!("{}{} = ${}", self.seperator, filter, self.params.len() + 1);
            self.query.push_str(&filter);
            self.seperator = " AND ";
            self.params.push(value);
        }
        self
    }

    fn push(mut self, clause: &str) -> Self {
        self.query.push(' ');
        self.query.push_str(clause);
        self
    }

    fn build(self) -> (String, Vec<String>) {
        (self.query, self.params)
    }
}

/// SQLite reports every foreign key failure with this message; there is no
/// more specific code to match on.
fn is_foreign_key_violation(error: &RequestError) -> bool {
    match error {
        RequestError::DatabaseError(sqlx::Error::Database(e)) => {
            e.message().contains("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}
