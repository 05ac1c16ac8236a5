use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Two-pane frame shared by the sign-in and sign-up pages.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="auth-layout">
            <div class="auth-illustration" />
            <div class="auth-content">
                { props.children.clone() }
            </div>
        </div>
    }
}
