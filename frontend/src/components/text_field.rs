use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub disabled: bool,
    /// Extra controls rendered inside the input wrapper, after the input.
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <div class={classes!("form-group", props.error.as_ref().map(|_| "has-error"))}>
            <label for={props.id.clone()}>{ &*props.label }</label>
            <div class="input-wrapper">
                <input
                    id={props.id.clone()}
                    name={props.id.clone()}
                    type={props.input_type.clone()}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                    required=true
                />
                { props.children.clone() }
            </div>
            if let Some(err) = props.error.clone() {
                <p class="field-error">{ err }</p>
            }
        </div>
    }
}
