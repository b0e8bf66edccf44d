//! Select with a label; options are ordered `(value, label)` pairs

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LabeledSelectProps {
    #[props(into)]
    pub label: String,
    /// Used for both `id` and `name`
    #[props(into)]
    pub name: String,
    /// Currently selected option value
    #[props(into)]
    pub value: String,
    pub options: Vec<(&'static str, &'static str)>,
    pub onchange: EventHandler<String>,
}

#[component]
pub fn LabeledSelect(props: LabeledSelectProps) -> Element {
    rsx! {
        div {
            class: "form-group",
            label {
                class: "form-label",
                r#for: "{props.name}",
                "{props.label}"
            }
            select {
                class: "form-select",
                id: "{props.name}",
                name: "{props.name}",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                for (value, label) in props.options.iter().copied() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == props.value,
                        "{label}"
                    }
                }
            }
        }
    }
}
