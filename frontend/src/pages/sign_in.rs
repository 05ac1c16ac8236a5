use shared::SignInForm;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{PasswordField, TextField};
use crate::hooks::{use_auth_flows, use_form, use_title};
use crate::Route;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    use_title("Login");
    let form = use_form::<SignInForm>();
    let flows = use_auth_flows();
    let remember_me = use_state(|| false);

    let on_submit = form.handle_submit(move |input| {
        let flows = flows.clone();
        async move { flows.sign_in(input).await }
    });

    let on_remember_toggle = {
        let remember_me = remember_me.clone();
        Callback::from(move |_: Event| remember_me.set(!*remember_me))
    };

    let submitting = form.is_submitting();

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <h1>{ "Acessar Painel" }</h1>
                    <p>{ "Entre com suas credenciais!" }</p>
                </div>

                <form onsubmit={on_submit} novalidate=true>
                    <TextField
                        id="email"
                        label="E-mail"
                        input_type="email"
                        placeholder="Digite seu e-mail"
                        value={form.value(SignInForm::EMAIL)}
                        oninput={form.register(SignInForm::EMAIL)}
                        error={form.error(SignInForm::EMAIL)}
                    />
                    <PasswordField
                        id="password"
                        label="Senha"
                        placeholder="Digite sua senha"
                        value={form.value(SignInForm::PASSWORD)}
                        oninput={form.register(SignInForm::PASSWORD)}
                        error={form.error(SignInForm::PASSWORD)}
                    />

                    <div class="auth-options">
                        <label class="checkbox" for="remember-me">
                            <input
                                type="checkbox"
                                id="remember-me"
                                checked={*remember_me}
                                onchange={on_remember_toggle}
                            />
                            { "Lembrar de mim" }
                        </label>
                        <a href="/forgot-password" class="auth-link">{ "Esqueci minha senha" }</a>
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                        { if submitting { "Entrando..." } else { "Entrar" } }
                    </button>
                </form>

                <p class="auth-footer">
                    { "Não tem conta ainda? " }
                    <Link<Route> to={Route::SignUp} classes={classes!("auth-link")}>
                        { "Solicitar Acesso" }
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
