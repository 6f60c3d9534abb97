// backend_mvnpm/src/npm/model.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// A package-version document as published by the npm registry
/// (`GET {registry}/{name}/{version}`).
///
/// npm metadata is loosely shaped: several fields are published either as a
/// bare string or as an object depending on the package's age and tooling.
/// Those fields accept both forms here.
#[derive(Deserialize, Clone, Debug)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub bugs: Option<Bugs>,
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
    // Sorted map so everything derived from it (pom bytes, checksums) is
    // reproducible for a given document.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

/// Either `"Jane Doe <jane@example.com> (https://example.com)"` or
/// `{ "name": ..., "email": ..., "url": ... }`.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum Author {
    Raw(String),
    Detailed {
        name: String,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl Author {
    /// The display name, with a raw `Name <email> (url)` form reduced to
    /// its name part.
    pub fn name(&self) -> &str {
        match self {
            Author::Raw(raw) => raw.split('<').next().unwrap_or("").trim(),
            Author::Detailed { name, .. } => name,
        }
    }
}

/// Either `"github:user/repo"` or `{ "type": "git", "url": ... }`.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum Repository {
    Raw(String),
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        url: String,
    },
}

impl Repository {
    pub fn url(&self) -> &str {
        match self {
            Repository::Raw(url) => url,
            Repository::Detailed { url, .. } => url,
        }
    }
}

/// Either a bare issue-tracker URL or `{ "url": ..., "email": ... }`.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum Bugs {
    Raw(String),
    Detailed {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

impl Bugs {
    pub fn url(&self) -> Option<&str> {
        match self {
            Bugs::Raw(url) => Some(url),
            Bugs::Detailed { url, .. } => url.as_deref(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Maintainer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}
