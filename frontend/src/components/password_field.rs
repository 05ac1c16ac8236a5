use shared::PasswordVisibility;
use yew::prelude::*;

use super::text_field::TextField;

#[derive(Properties, PartialEq)]
pub struct PasswordFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Password input with its own show/hide toggle. The toggle only changes how
/// the value is rendered.
#[function_component(PasswordField)]
pub fn password_field(props: &PasswordFieldProps) -> Html {
    let visibility = use_state(PasswordVisibility::default);

    let on_toggle = {
        let visibility = visibility.clone();
        Callback::from(move |_: MouseEvent| visibility.set(visibility.toggle()))
    };

    html! {
        <TextField
            id={props.id.clone()}
            label={props.label.clone()}
            value={props.value.clone()}
            oninput={props.oninput.clone()}
            input_type={AttrValue::Static(visibility.input_type())}
            placeholder={props.placeholder.clone()}
            error={props.error.clone()}
            disabled={props.disabled}
        >
            <button
                type="button"
                class={classes!("password-toggle", visibility.is_revealed().then_some("revealed"))}
                aria-label={visibility.toggle_label()}
                onclick={on_toggle}
            >
                { if visibility.is_revealed() { "🙈" } else { "👁" } }
            </button>
        </TextField>
    }
}
