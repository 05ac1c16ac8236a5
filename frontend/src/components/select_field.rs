use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub options: Vec<AttrValue>,
    pub onchange: Callback<String>,
    /// Shown while nothing is selected; submits as an empty value.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                onchange.emit(select.value());
            }
        })
    };

    html! {
        <div class={classes!("form-group", props.error.as_ref().map(|_| "has-error"))}>
            <label for={props.id.clone()}>{ &*props.label }</label>
            <select id={props.id.clone()} onchange={on_change} disabled={props.disabled} required=true>
                if let Some(placeholder) = props.placeholder.clone() {
                    <option value="" selected={props.value.is_empty()} disabled=true>
                        { &*placeholder }
                    </option>
                }
                { for props.options.iter().map(|option| {
                    html! {
                        <option value={option.clone()} selected={props.value == option.as_str()}>
                            { &**option }
                        </option>
                    }
                })}
            </select>
            if let Some(err) = props.error.clone() {
                <p class="field-error">{ err }</p>
            }
        </div>
    }
}
