// backend_mvnpm/src/main.rs
#[macro_use] extern crate rocket;

mod api;
mod maven;
mod npm;

use log::info;
use rocket::{fs::FileServer, http::Method};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use serde::Serialize;
use std::{fs, path::Path};

use crate::npm::registry::{RegistryClient, DEFAULT_REGISTRY_URL};

#[derive(Serialize)]
struct FrontendConfig {
    api_url: String,
}

fn write_frontend_config(site_root: &str, api_url: &str) -> std::io::Result<()> {
    let config_dir = Path::new(site_root).join("config");
    fs::create_dir_all(&config_dir)?;
    let config = FrontendConfig {
        api_url: api_url.to_string(),
    };
    let json = serde_json::to_string_pretty(&config).unwrap();
    fs::write(config_dir.join("config.json"), json)?;
    Ok(())
}

#[launch]
fn rocket() -> _ {
    let api_url = std::env::var("API_URL")
        .expect("Please set API_URL to something like \"https://api.mvnpm.org\"");
    let registry_url =
        std::env::var("NPM_REGISTRY_URL").unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());
    let site_root = std::env::var("SITE_ROOT").unwrap_or_else(|_| "/public_site".to_string());

    write_frontend_config(&site_root, &api_url).expect("Failed to write frontend config");

    info!("📦 npm registry: {registry_url}");

    let allowed_origins = AllowedOrigins::some_exact(&[
        // local SPA on port 80
        "http://127.0.0.1",
        "http://localhost",
        // local testing
        "http://127.0.0.1:8080",
        "http://localhost:8080",
        "http://127.0.0.1:8000",
        "http://localhost:8000",
        // production
        api_url.as_str(),
    ]);

    let cors = CorsOptions {
        allowed_origins,
        allowed_methods: vec![Method::Get, Method::Options]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: AllowedHeaders::some(&["Content-Type"]),
        allow_credentials: false,
        ..Default::default()
    }
    .to_cors()
    .expect("Error configuring CORS");

    rocket::build()
        .attach(cors)
        .manage(RegistryClient::new(registry_url))
        .mount("/api", routes![
            api::get_pom,
            api::get_pom_sha1,
            api::get_dependency
        ])
        // The compiled frontend is always available under /
        .mount("/", FileServer::from(site_root))
}
