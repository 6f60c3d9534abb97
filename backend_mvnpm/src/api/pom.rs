// backend_mvnpm/src/api/pom.rs
use log::{error, info};
use rocket::http::{ContentType, Status};
use rocket::serde::{json::Json, Serialize};
use rocket::State;

use super::clean;
use crate::maven::pom;
use crate::npm::model::Package;
use crate::npm::registry::{RegistryClient, RegistryError};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DependencyResponse {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub snippet: String,
}

// ------------- POM ----------------------------------------------------------
/// Get the generated pom.xml for an npm package
/// ### Arguments:
/// - `name` (required): npm package name, scoped names allowed
/// - `version` (optional): exact version, defaults to the latest release
/// ### Examples:
/// - GET /api/pom?name=lit
/// - GET /api/pom?name=%40lit%2Freactive-element&version=1.3.0
#[get("/pom?<name>&<version>")]
pub async fn get_pom(
    name: &str,
    version: Option<&str>,
    registry: &State<RegistryClient>,
) -> Result<(ContentType, String), Status> {
    let package = fetch(name, version, registry).await?;
    Ok((ContentType::XML, pom::to_pom_xml(&package)))
}

// ------------- POM CHECKSUM -------------------------------------------------
/// Get the SHA-1 of the generated pom.xml, as Maven repositories publish it
/// ### Arguments:
/// - `name` (required): npm package name
/// - `version` (optional): exact version, defaults to the latest release
/// ### Examples:
/// - GET /api/pom/sha1?name=lit
#[get("/pom/sha1?<name>&<version>")]
pub async fn get_pom_sha1(
    name: &str,
    version: Option<&str>,
    registry: &State<RegistryClient>,
) -> Result<String, Status> {
    let package = fetch(name, version, registry).await?;
    Ok(pom::pom_sha1(&package))
}

// ------------- DEPENDENCY SNIPPET -------------------------------------------
/// Resolve the Maven coordinates and copy-paste snippet for an npm package
/// ### Arguments:
/// - `name` (required): npm package name
/// - `version` (optional): exact version, defaults to the latest release
/// ### Examples:
/// - GET /api/dependency?name=lit
#[get("/dependency?<name>&<version>")]
pub async fn get_dependency(
    name: &str,
    version: Option<&str>,
    registry: &State<RegistryClient>,
) -> Result<Json<DependencyResponse>, Status> {
    let package = fetch(name, version, registry).await?;
    let version = pom::clean_version(&package.version);

    Ok(Json(DependencyResponse {
        group_id: pom::GROUP_ID.to_string(),
        artifact_id: package.name.clone(),
        snippet: pom::dependency_snippet(&package.name, &version),
        version,
    }))
}

async fn fetch(
    name: &str,
    version: Option<&str>,
    registry: &State<RegistryClient>,
) -> Result<Package, Status> {
    let name = clean(name);
    if name.is_empty() {
        return Err(Status::BadRequest);
    }

    info!("📦 resolving {name}");
    registry.package(&name, version).await.map_err(|e| match e {
        RegistryError::NotFound(_) => {
            info!("❓ unknown package: {name}");
            Status::NotFound
        }
        RegistryError::Transport(err) => {
            error!("❌ registry request failed: {err}");
            Status::BadGateway
        }
        RegistryError::Payload { .. } => {
            error!("❌ {e}");
            Status::BadGateway
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::local::blocking::Client;
    use rocket::routes;

    // Unroutable registry: only paths that never reach the network are
    // exercised here.
    fn client() -> Client {
        let rocket = rocket::build()
            .manage(RegistryClient::new("http://127.0.0.1:1"))
            .mount("/api", routes![get_pom, get_pom_sha1, get_dependency]);
        Client::tracked(rocket).expect("valid rocket instance")
    }

    #[test]
    fn blank_name_is_rejected() {
        let client = client();
        let response = client.get("/api/pom?name=").dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let client = client();
        let response = client.get("/api/dependency?name=%20%20").dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn sha1_route_validates_the_name_too() {
        let client = client();
        let response = client.get("/api/pom/sha1?name=").dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }
}
