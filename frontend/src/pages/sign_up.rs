use shared::{Department, SignUpForm};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{PasswordField, SelectField, TextField};
use crate::hooks::{use_auth_flows, use_form, use_title};
use crate::Route;

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    use_title("Solicitar Acesso");
    let form = use_form::<SignUpForm>();
    let flows = use_auth_flows();

    let on_submit = form.handle_submit(move |input| {
        let flows = flows.clone();
        async move { flows.sign_up(input).await }
    });

    let departments: Vec<AttrValue> = Department::all()
        .iter()
        .map(|d| AttrValue::Static(d.as_str()))
        .collect();

    let submitting = form.is_submitting();

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <h1>{ "Solicitar Acesso" }</h1>
                    <p>{ "Preencha todos os campos corretamente!" }</p>
                </div>

                <form onsubmit={on_submit} novalidate=true>
                    <TextField
                        id="fullName"
                        label="Nome Completo"
                        placeholder="Digite seu nome completo"
                        value={form.value(SignUpForm::FULL_NAME)}
                        oninput={form.register(SignUpForm::FULL_NAME)}
                        error={form.error(SignUpForm::FULL_NAME)}
                    />
                    <TextField
                        id="email"
                        label="E-mail"
                        input_type="email"
                        placeholder="Digite seu e-mail"
                        value={form.value(SignUpForm::EMAIL)}
                        oninput={form.register(SignUpForm::EMAIL)}
                        error={form.error(SignUpForm::EMAIL)}
                    />
                    <PasswordField
                        id="password"
                        label="Senha"
                        placeholder="Digite sua senha"
                        value={form.value(SignUpForm::PASSWORD)}
                        oninput={form.register(SignUpForm::PASSWORD)}
                        error={form.error(SignUpForm::PASSWORD)}
                    />
                    <PasswordField
                        id="confirmPassword"
                        label="Confirmar Senha"
                        placeholder="Confirme sua senha"
                        value={form.value(SignUpForm::CONFIRM_PASSWORD)}
                        oninput={form.register(SignUpForm::CONFIRM_PASSWORD)}
                        error={form.error(SignUpForm::CONFIRM_PASSWORD)}
                    />
                    <SelectField
                        id="department"
                        label="Departamento"
                        placeholder="Selecione um departamento"
                        value={form.value(SignUpForm::DEPARTMENT)}
                        options={departments}
                        onchange={form.register(SignUpForm::DEPARTMENT)}
                        error={form.error(SignUpForm::DEPARTMENT)}
                    />

                    <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                        { if submitting { "Enviando..." } else { "Enviar" } }
                    </button>
                </form>

                <p class="auth-footer">
                    { "Já possui conta? " }
                    <Link<Route> to={Route::SignIn} classes={classes!("auth-link")}>
                        { "Entrar" }
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
