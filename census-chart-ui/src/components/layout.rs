//! Page chrome: fixed header bar and the vertical brand text.

use dioxus::prelude::*;

/// Fixed top bar with the home link and a (disabled) settings button.
#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header {
            style: "position: fixed; top: 0; left: 0; z-index: 50; width: 100%; height: 48px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 16px; background: #651FFF; color: #fff; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);",
                // Full reload resets every signal
                a { href: "/", style: "color: #fff; font-weight: 700; text-decoration: none;", "LOGO" }
                button {
                    r#type: "button",
                    disabled: true,
                    style: "width: 32px; height: 32px; border: 1px solid rgba(255, 255, 255, 0.3); border-radius: 8px; background: none; color: #fff; cursor: not-allowed;",
                    "⚙"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PageLayoutProps {
    pub children: Element,
}

#[component]
pub fn PageLayout(props: PageLayoutProps) -> Element {
    rsx! {
        main {
            style: "position: relative; width: 100%; min-height: 100vh; font-family: 'Noto Sans TC', system-ui, sans-serif;",
            PageHeader {}
            div {
                style: "display: flex; width: 100%;",
                div {
                    style: "position: relative; width: 146px; flex-shrink: 0;",
                    div {
                        style: "position: fixed; left: 0; top: 0; z-index: -1; transform: rotate(90deg) translate(-16px, -61%); transform-origin: left top; letter-spacing: 3.2rem; font-size: 200px; font-weight: 700; color: rgba(101, 31, 255, 0.08);",
                        "TAIWAN"
                    }
                }
                div {
                    style: "position: relative; width: 100%; padding-top: 56px;",
                    {props.children}
                }
            }
        }
    }
}
