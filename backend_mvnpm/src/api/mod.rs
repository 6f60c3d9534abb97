// backend_mvnpm/src/api/mod.rs

pub mod pom;

// Percent-decode helper ------------------------------------------------------
// Scoped package names reach us as "%40scope%2Fpkg" when the frontend
// encodes them into the query string.
pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    urlencoding::decode(trimmed)
        .unwrap_or_else(|_| trimmed.into())
        .into_owned()
}

// Re-export all route handlers for main.rs
pub use pom::{get_dependency, get_pom, get_pom_sha1};
