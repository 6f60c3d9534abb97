// frontend_mvnpm/src/pages/about.rs
use yew::prelude::*;

/// This component shows the About screen.
///
/// A leaf with no properties and no state; its output never changes.
#[function_component(About)]
pub fn about() -> Html {
    html! { "Hello About!" }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::About;
    use std::time::Duration;
    use wasm_bindgen_test::*;
    use yew::prelude::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_point() -> web_sys::Element {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(20)).await;
    }

    #[wasm_bindgen_test]
    async fn shows_exactly_the_about_text() {
        let root = mount_point();
        yew::Renderer::<About>::with_root(root.clone()).render();
        settle().await;

        assert_eq!(root.text_content().unwrap_or_default(), "Hello About!");
        // a bare text node, nothing an attribute could have altered
        assert_eq!(root.inner_html(), "Hello About!");
    }

    // Forces a framework re-render above the component and checks the
    // output stays byte-identical.
    #[function_component(Host)]
    fn host() -> Html {
        let tick = use_state(|| 0u32);
        {
            let tick = tick.clone();
            use_effect_with((), move |_| {
                tick.set(1);
                || ()
            });
        }
        html! { <About /> }
    }

    #[wasm_bindgen_test]
    async fn re_render_is_idempotent() {
        let root = mount_point();
        yew::Renderer::<Host>::with_root(root.clone()).render();
        settle().await;
        let first = root.inner_html();

        settle().await;
        assert_eq!(root.inner_html(), first);
        assert_eq!(root.text_content().unwrap_or_default(), "Hello About!");
    }
}
