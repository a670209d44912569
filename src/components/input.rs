use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const FIELD_BASE: &str = "flex w-full rounded-md border border-slate-600 bg-slate-800 px-3 py-2 text-sm text-slate-100 placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-0";

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub id: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub class: Classes,
    pub value: AttrValue,
    pub oninput: Callback<String>,
}

/// Controlled single-line input. Emits the full new value on every keystroke.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_change = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            id={props.id.clone()}
            name={props.id.clone()}
            type={props.input_type.clone()}
            autocomplete={props.autocomplete.clone()}
            required={props.required}
            class={classes!(FIELD_BASE, "h-10", props.class.clone())}
            value={props.value.clone()}
            oninput={oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TextareaProps {
    pub id: AttrValue,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub class: Classes,
    pub value: AttrValue,
    pub oninput: Callback<String>,
}

#[function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> Html {
    let oninput = {
        let on_change = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    html! {
        <textarea
            id={props.id.clone()}
            name={props.id.clone()}
            rows={props.rows.to_string()}
            required={props.required}
            class={classes!(FIELD_BASE, "min-h-[80px]", props.class.clone())}
            value={props.value.clone()}
            oninput={oninput}
        />
    }
}
