//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the bookmarks table.

use crate::model::{BookmarkPatch, NewBookmark};
use crate::sql::BindValue;

pub const BOOKMARKS_TABLE: &str = "bookmarks";

/// Columns in SELECT / RETURNING order.
const COLUMNS: &[&str] = &["id", "title", "url", "description", "rating"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(BOOKMARKS_TABLE))
}

fn column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a value and return its placeholder with the given cast.
    fn push_param(&mut self, v: BindValue, pg_type: &str) -> String {
        self.params.push(v);
        format!("${}::{}", self.params.len(), pg_type)
    }
}

/// SELECT every row, ordered by id.
pub fn select_all(schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(),
        qualified_table(schema),
        quoted("id")
    );
    q
}

pub fn select_by_id(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(id.into(), "int8");
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        column_list(),
        qualified_table(schema),
        quoted("id"),
        ph
    );
    q
}

/// INSERT the validated fields; id is left to the column default.
pub fn insert(schema: &str, new: &NewBookmark) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders = [
        q.push_param(new.title.as_str().into(), "text"),
        q.push_param(new.url.as_str().into(), "text"),
        q.push_param(new.description.as_deref().into(), "text"),
        q.push_param(new.rating.into(), "float8"),
    ];
    q.sql = format!(
        "INSERT INTO {} ({}, {}, {}, {}) VALUES ({}) RETURNING {}",
        qualified_table(schema),
        quoted("title"),
        quoted("url"),
        quoted("description"),
        quoted("rating"),
        placeholders.join(", "),
        column_list()
    );
    q
}

/// UPDATE by id: SET only the columns present in the patch.
/// Returns `None` when the patch carries nothing to write.
pub fn update(schema: &str, id: i64, patch: &BookmarkPatch) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(title) = &patch.title {
        let ph = q.push_param(title.as_str().into(), "text");
        sets.push(format!("{} = {}", quoted("title"), ph));
    }
    if let Some(url) = &patch.url {
        let ph = q.push_param(url.as_str().into(), "text");
        sets.push(format!("{} = {}", quoted("url"), ph));
    }
    if let Some(description) = &patch.description {
        let ph = q.push_param(description.as_str().into(), "text");
        sets.push(format!("{} = {}", quoted("description"), ph));
    }
    if let Some(rating) = patch.rating {
        let ph = q.push_param(rating.into(), "float8");
        sets.push(format!("{} = {}", quoted("rating"), ph));
    }
    if sets.is_empty() {
        return None;
    }
    let id_ph = q.push_param(id.into(), "int8");
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        qualified_table(schema),
        sets.join(", "),
        quoted("id"),
        id_ph
    );
    Some(q)
}

pub fn delete(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(id.into(), "int8");
    q.sql = format!("DELETE FROM {} WHERE {} = {}", qualified_table(schema), quoted("id"), ph);
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_orders_by_id() {
        let q = select_all("public");
        assert_eq!(
            q.sql,
            r#"SELECT "id", "title", "url", "description", "rating" FROM "public"."bookmarks" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_binds_values_in_order() {
        let q = insert(
            "public",
            &NewBookmark {
                title: "Test new bookmark".into(),
                url: "www.ham.com".into(),
                description: None,
                rating: 4.0,
            },
        );
        assert!(q.sql.starts_with(r#"INSERT INTO "public"."bookmarks" ("title", "url", "description", "rating") VALUES ($1::text, $2::text, $3::text, $4::float8) RETURNING"#));
        assert_eq!(
            q.params,
            vec![
                BindValue::Text("Test new bookmark".into()),
                BindValue::Text("www.ham.com".into()),
                BindValue::Null,
                BindValue::F64(4.0),
            ]
        );
    }

    #[test]
    fn update_sets_only_supplied_columns() {
        let patch = BookmarkPatch {
            url: Some("www.ham.com".into()),
            rating: Some(3.7),
            ..Default::default()
        };
        let q = update("app", 2, &patch).unwrap();
        assert_eq!(
            q.sql,
            r#"UPDATE "app"."bookmarks" SET "url" = $1::text, "rating" = $2::float8 WHERE "id" = $3::int8"#
        );
        assert_eq!(q.params.last(), Some(&BindValue::I64(2)));
    }

    #[test]
    fn empty_update_builds_nothing() {
        assert!(update("public", 1, &BookmarkPatch::default()).is_none());
    }

    #[test]
    fn schema_identifier_is_quoted() {
        let q = delete(r#"we"ird"#, 9);
        assert_eq!(q.sql, r#"DELETE FROM "we""ird"."bookmarks" WHERE "id" = $1::int8"#);
    }
}
