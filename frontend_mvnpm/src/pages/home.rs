// frontend_mvnpm/src/pages/home.rs
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::pom::{api_dependency, DependencyResponse};
use crate::components::coordinates_field::CoordinatesField;
use crate::config_file::load_config;

#[function_component(Home)]
pub fn home() -> Html {
    let ready = use_state(|| false);
    let dependency = use_state(|| None::<DependencyResponse>);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                load_config().await;
                ready.set(true);
            });
            || ()
        });
    }

    let onsearch = {
        let dependency = dependency.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |coordinates: String| {
            let dependency = dependency.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();

            is_loading.set(true);
            error_message.set(None);

            api_dependency(
                coordinates,
                Some(move |result: Result<DependencyResponse, String>| {
                    match result {
                        Ok(resolved) => {
                            dependency.set(Some(resolved));
                        }
                        Err(err) => {
                            dependency.set(None);
                            error_message.set(Some(err));
                        }
                    }
                    is_loading.set(false);
                }),
            );
        })
    };

    if !*ready {
        return html! { "Loading..." };
    }

    html! {
        <section class="p-6">
            <h1 class="text-2xl font-bold mb-2">{ "mvnpm" }</h1>
            <p class="mb-2">{ "Use npm packages like any other Maven dependency. Type a package name and press Enter." }</p>

            <div id="coordinates-field">
                <CoordinatesField
                    placeholder="npm package, e.g. lit"
                    disabled={*is_loading}
                    {onsearch}
                />
            </div>

            { if *is_loading {
                html! { <p class="mt-2">{ "Resolving..." }</p> }
            } else {
                html! {}
            }}

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mt-2" style="color: red;">{ error }</div> }
            } else {
                html! {}
            }}

            { if let Some(dependency) = (*dependency).as_ref() {
                html! {
                    <pre class="mt-4">
                        <code id="pom-dependency-code" content={dependency.snippet.clone()}>
                            { &dependency.snippet }
                        </code>
                    </pre>
                }
            } else {
                html! {}
            }}
        </section>
    }
}
