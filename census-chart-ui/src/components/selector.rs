//! Dropdown selector used for year, city and district.
//!
//! Open/closed is local focus state: toggling the button or clicking anywhere
//! outside the menu closes it without touching the selection.

use dioxus::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum SelectorSize {
    /// Year selector
    Small,
    /// City and district selectors, with a clear button
    #[default]
    Large,
}

impl SelectorSize {
    fn width(self) -> &'static str {
        match self {
            SelectorSize::Small => "80px",
            SelectorSize::Large => "192px",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectorProps {
    /// Legend shown on the border
    pub title: String,
    pub options: Vec<String>,
    /// Current value; `None` shows the placeholder
    pub value: Option<String>,
    pub placeholder: String,
    #[props(default)]
    pub size: SelectorSize,
    #[props(default = false)]
    pub disabled: bool,
    /// Called with the picked option, or an empty string when cleared
    pub on_select: EventHandler<String>,
}

#[component]
pub fn Selector(props: SelectorProps) -> Element {
    let mut open = use_signal(|| false);
    let on_select = props.on_select;
    let is_open = open() && !props.disabled;
    let label = props.value.clone().unwrap_or_else(|| props.placeholder.clone());
    let show_clear = props.size == SelectorSize::Large && props.value.is_some();
    let text_color = if props.disabled { "rgba(209, 213, 219, 0.8)" } else { "#374151" };
    let cursor = if props.disabled { "not-allowed" } else { "pointer" };
    let container_style = format!(
        "position: relative; display: inline-block; width: {};",
        props.size.width()
    );
    let button_style = format!(
        "position: relative; display: flex; justify-content: space-between; align-items: center; width: 100%; padding: 12px; background: #fff; border: 1px solid #D1D5DB; border-radius: 6px; color: {}; cursor: {};",
        text_color, cursor
    );

    rsx! {
        div {
            style: "{container_style}",
            if is_open {
                // Backdrop: any click outside the menu closes it
                div {
                    style: "position: fixed; inset: 0; z-index: 20;",
                    onclick: move |_| open.set(false),
                }
            }
            button {
                r#type: "button",
                disabled: props.disabled,
                style: "{button_style}",
                onclick: move |_| {
                    let was_open = open();
                    open.set(!was_open);
                },
                span {
                    style: "position: absolute; top: -8px; left: 12px; padding: 0 4px; font-size: 12px; background: rgba(255, 255, 255, 0.95); border-radius: 4px;",
                    "{props.title}"
                }
                span { "{label}" }
                span { style: "margin-left: 4px;", "▾" }
            }
            if show_clear {
                button {
                    r#type: "button",
                    disabled: props.disabled,
                    style: "position: absolute; right: 36px; top: 13px; z-index: 1; border: none; background: none; color: {text_color}; cursor: {cursor};",
                    onclick: move |_| on_select.call(String::new()),
                    "×"
                }
            }
            if is_open {
                div {
                    role: "menu",
                    style: "position: absolute; right: 0; z-index: 30; margin-top: 2px; width: 100%; max-height: 256px; overflow-y: auto; background: #fff; border-radius: 6px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); padding: 4px;",
                    for option in props.options.iter() {
                        SelectorOption {
                            key: "{option}",
                            label: option.clone(),
                            selected: props.value.as_ref() == Some(option),
                            on_pick: move |value: String| {
                                on_select.call(value);
                                open.set(false);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SelectorOptionProps {
    label: String,
    selected: bool,
    on_pick: EventHandler<String>,
}

#[component]
fn SelectorOption(props: SelectorOptionProps) -> Element {
    let background = if props.selected { "rgba(173, 138, 248, 0.4)" } else { "transparent" };
    let value = props.label.clone();
    let on_pick = props.on_pick;

    rsx! {
        div {
            style: "display: block; padding: 8px 16px; color: #374151; cursor: pointer; border-radius: 4px; background: {background};",
            onclick: move |_| on_pick.call(value.clone()),
            "{props.label}"
        }
    }
}
