//! Loading spinner component.
//!
//! The `census-spin` keyframes live in `index.html`.

use dioxus::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum SpinnerSize {
    /// Overlay on the submit button
    Small,
    #[default]
    Large,
}

impl SpinnerSize {
    fn diameter(self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Large => 64,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default)]
    pub size: SpinnerSize,
    /// Text under the spinner; omitted when empty
    #[props(default = String::new())]
    pub label: String,
}

/// Rotating ring with an optional label.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    let diameter = props.size.diameter();
    let ring = format!(
        "width: {d}px; height: {d}px; border: {b}px solid #E0D7F7; border-top-color: #651FFF; border-radius: 50%; animation: census-spin 0.8s linear infinite;",
        d = diameter,
        b = (diameter / 8).max(2),
    );

    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center;",
            div { style: "{ring}" }
            if !props.label.is_empty() {
                h1 {
                    style: "padding: 40px 0; font-size: 30px; font-weight: 400;",
                    "{props.label}"
                }
            }
        }
    }
}
