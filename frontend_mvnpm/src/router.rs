// frontend_mvnpm/src/router.rs
use crate::pages::about::About;
use crate::pages::doc::Doc;
use crate::pages::home::Home;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/doc")]
    Doc,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <nav class="mb-4">
                <Link<Route> to={Route::Home} classes="mr-2">{ "Search" }</Link<Route>>
                <Link<Route> to={Route::Doc} classes="mr-2">{ "Documentation" }</Link<Route>>
                <Link<Route> to={Route::About}>{ "About" }</Link<Route>>
            </nav>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Doc => html! { <Doc /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <h1>{ "404 - Page not found" }</h1> },
    }
}
