//! Text input with a label

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LabeledInputProps {
    #[props(into)]
    pub label: String,
    /// Used for both `id` and `name`
    #[props(into)]
    pub name: String,
    #[props(into)]
    pub value: String,
    #[props(into, default)]
    pub placeholder: String,
    pub oninput: EventHandler<String>,
}

#[component]
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    rsx! {
        div {
            class: "form-group",
            label {
                class: "form-label",
                r#for: "{props.name}",
                "{props.label}"
            }
            input {
                class: "form-input",
                r#type: "text",
                id: "{props.name}",
                name: "{props.name}",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
