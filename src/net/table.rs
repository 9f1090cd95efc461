//! Generic row-endpoint client for the hosted table store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty/`Err` since the browser session
//! cookie is what authorizes row access.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so backend
//! failures degrade page behavior without crashing hydration. Row-level
//! authorization lives behind the endpoint; a denied row set simply comes
//! back smaller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Sort direction for [`TableQuery::order_by`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sort {
    /// Ascending column order.
    Asc,
    /// Descending column order.
    Desc,
}

/// A query against one table's row endpoint.
///
/// Filter values are appended to the path verbatim; callers pass ids, enum
/// wire values, and other URL-safe tokens, never free text.
#[derive(Clone, Debug)]
pub struct TableQuery {
    table: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Sort)>,
    limit: Option<usize>,
}

impl TableQuery {
    /// Start a query against `table`.
    #[must_use]
    pub fn new(table: &str) -> Self {
        Self { table: table.to_owned(), filters: Vec::new(), order: None, limit: None }
    }

    /// Keep only rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_owned(), value.to_owned()));
        self
    }

    /// Sort rows by `column`.
    #[must_use]
    pub fn order_by(mut self, column: &str, sort: Sort) -> Self {
        self.order = Some((column.to_owned(), sort));
        self
    }

    /// Return at most `limit` rows.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the row-endpoint path with query string.
    #[must_use]
    pub fn to_path(&self) -> String {
        let mut params: Vec<String> = self
            .filters
            .iter()
            .map(|(column, value)| format!("{column}=eq.{value}"))
            .collect();
        if let Some((column, sort)) = &self.order {
            let direction = match sort {
                Sort::Asc => "asc",
                Sort::Desc => "desc",
            };
            params.push(format!("order={column}.{direction}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }

        let path = rows_path(&self.table);
        if params.is_empty() { path } else { format!("{path}?{}", params.join("&")) }
    }
}

fn rows_path(table: &str) -> String {
    format!("/api/tables/{table}/rows")
}

#[cfg(any(test, feature = "hydrate"))]
fn row_path(table: &str, id: &str) -> String {
    format!("/api/tables/{table}/rows/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("table request failed: {status}")
}

/// Fetch the rows selected by `query`.
///
/// # Errors
///
/// Returns a message when the request fails or the payload does not match
/// the row schema. On the server this resolves to an empty row set.
pub async fn select_rows<T: DeserializeOwned>(query: &TableQuery) -> Result<Vec<T>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&query.to_path())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Ok(Vec::new())
    }
}

/// Insert one row and return the created row as stored.
///
/// # Errors
///
/// Returns a message when the request fails; on the server, always.
pub async fn insert_row<B: Serialize, T: DeserializeOwned>(table: &str, row: &B) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&rows_path(table))
            .json(row)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, row);
        Err("not available on the server".to_owned())
    }
}

/// Apply a partial update to the row with the given id.
///
/// # Errors
///
/// Returns a message when the request fails; on the server, always.
pub async fn update_row<B: Serialize>(table: &str, id: &str, patch: &B) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&row_path(table, id))
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, id, patch);
        Err("not available on the server".to_owned())
    }
}
