// frontend_mvnpm/src/api/pom.rs
use gloo::net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;

use crate::config_file::get_env_var;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DependencyResponse {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub snippet: String,
}

/// Resolve the Maven dependency snippet for an npm package
pub fn api_dependency<F>(coordinates: String, callback: Option<F>)
where
    F: Fn(Result<DependencyResponse, String>) + 'static,
{
    let api_url = get_env_var("API_URL");

    spawn_local(async move {
        let url = format!(
            "{api_url}/api/dependency?name={}",
            urlencoding::encode(&coordinates)
        );

        let req = Request::get(&url);

        match req.send().await {
            Ok(response) => {
                if !response.ok() {
                    if let Some(cb) = callback {
                        let message = match response.status() {
                            404 => format!("Package not found: {coordinates}"),
                            status => format!("Request failed with status: {status}"),
                        };
                        cb(Err(message));
                    }
                    return;
                }

                match response.json::<DependencyResponse>().await {
                    Ok(dependency) => {
                        if let Some(cb) = callback {
                            cb(Ok(dependency));
                        }
                    }
                    Err(e) => {
                        if let Some(cb) = callback {
                            cb(Err(format!("Failed to parse response: {}", e)));
                        }
                    }
                }
            }
            Err(e) => {
                if let Some(cb) = callback {
                    cb(Err(format!("Request failed: {}", e)));
                }
            }
        }
    });
}
