// frontend_mvnpm/src/pages/doc.rs
use yew::prelude::*;

const EXAMPLE_SNIPPET: &str = r#"<dependency>
  <groupId>org.mavenpm</groupId>
  <artifactId>lit</artifactId>
  <version>2.2.5</version>
</dependency>"#;

#[function_component(Doc)]
pub fn doc() -> Html {
    html! {
        <section class="p-6">
            <h1 class="text-2xl font-bold mb-2">{ "Documentation" }</h1>
            <p>{ "Use npm like any other Maven dependency..." }</p>
            <p class="mt-2">
                { "Every package published to the npm registry is available as a Maven artifact under the " }
                <code>{ "org.mavenpm" }</code>
                { " groupId. The artifactId is the npm package name, and versions follow the npm release. Add one to your pom.xml like any other dependency:" }
            </p>
            <pre class="mt-2">
                <code>{ EXAMPLE_SNIPPET }</code>
            </pre>
            <p class="mt-2">
                { "Transitive npm dependencies resolve the same way: each one is mirrored with runtime scope, so Maven pulls the whole tree for you." }
            </p>
        </section>
    }
}
