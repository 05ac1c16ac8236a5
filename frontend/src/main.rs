use shared::AuthRoute;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod hooks;
mod pages;
mod services;

use components::{AuthLayout, Toaster};
use config::AppConfig;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/sign-in")]
    SignIn,
    #[at("/sign-up")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AuthRoute> for Route {
    fn from(route: AuthRoute) -> Self {
        match route {
            AuthRoute::SignIn => Route::SignIn,
            AuthRoute::SignUp => Route::SignUp,
        }
    }
}

/// Where a route without a page of its own sends the user.
fn redirect_target(route: &Route) -> Option<Route> {
    match route {
        Route::Root | Route::NotFound => Some(Route::SignIn),
        Route::SignIn | Route::SignUp => None,
    }
}

fn switch(routes: Route) -> Html {
    if let Some(target) = redirect_target(&routes) {
        return html! { <Redirect<Route> to={target} /> };
    }
    match routes {
        Route::SignUp => html! { <AuthLayout><pages::sign_up::SignUp /></AuthLayout> },
        Route::SignIn | Route::Root | Route::NotFound => {
            html! { <AuthLayout><pages::sign_in::SignIn /></AuthLayout> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <BrowserRouter>
                <Toaster>
                    <Switch<Route> render={switch} />
                </Toaster>
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("starting {}", config.flow.app_name);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_routes_map_to_their_paths() {
        for auth in [AuthRoute::SignIn, AuthRoute::SignUp] {
            assert_eq!(Route::from(auth).to_path(), auth.path());
        }
    }

    #[test]
    fn shell_declares_the_favicon() {
        let index = include_str!("../index.html");
        assert!(index.contains(r#"rel="icon""#));
        assert!(index.contains("assets/favicon.svg"));
        assert!(include_str!("../assets/favicon.svg").starts_with("<svg"));
    }

    #[test]
    fn root_and_unknown_paths_redirect_to_sign_in() {
        let root = Route::recognize("/");
        let unknown = Route::recognize("/forgot-password");
        assert_eq!(root, Some(Route::Root));
        assert_eq!(unknown, Some(Route::NotFound));

        for route in [root, unknown].into_iter().flatten() {
            assert_eq!(redirect_target(&route), Some(Route::SignIn));
        }
    }

    #[test]
    fn form_routes_render_in_place() {
        assert_eq!(Route::recognize("/sign-in"), Some(Route::SignIn));
        assert_eq!(Route::recognize("/sign-up"), Some(Route::SignUp));
        assert_eq!(redirect_target(&Route::SignIn), None);
        assert_eq!(redirect_target(&Route::SignUp), None);
    }
}
