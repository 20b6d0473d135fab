//! Heading, the three cascading selectors and the submit button.

use super::{LoadingSpinner, Selector, SelectorSize, SpinnerSize};
use crate::state::AppState;
use census_core::catalog::Catalog;
use census_core::selection::{CITY_PLACEHOLDER, DISTRICT_PLACEHOLDER, YEAR_PLACEHOLDER};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SearchFormProps {
    /// Called when the enabled submit button is pressed
    pub on_submit: EventHandler<()>,
}

/// Search form bound to `AppState::selection`.
#[component]
pub fn SearchForm(props: SearchFormProps) -> Element {
    let mut state = use_context::<AppState>();
    let catalog = Catalog::global();
    let selection = state.selection.read().clone();
    let control = state.submit_control();
    let on_submit = props.on_submit;

    let button_style = if control.disabled {
        "background: #E5E5E5; color: rgba(0, 0, 0, 0.25); cursor: not-allowed;"
    } else {
        "background: #651FFF; color: #fff; cursor: pointer;"
    };

    rsx! {
        h1 {
            style: "padding-bottom: 56px; font-size: 32px; font-weight: 400; text-align: center;",
            "人口數、戶數按戶別及性別統計"
        }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; align-items: center; margin-bottom: 16px;",
            Selector {
                title: "年份".to_string(),
                options: catalog.years().to_vec(),
                value: selection.year().map(str::to_string),
                placeholder: YEAR_PLACEHOLDER.to_string(),
                size: SelectorSize::Small,
                on_select: move |year: String| state.selection.write().set_year(catalog, &year),
            }
            Selector {
                title: "縣/市".to_string(),
                options: catalog.cities().to_vec(),
                value: selection.city().map(str::to_string),
                placeholder: CITY_PLACEHOLDER.to_string(),
                size: SelectorSize::Large,
                on_select: move |city: String| state.selection.write().set_city(catalog, &city),
            }
            Selector {
                title: "區".to_string(),
                options: selection.district_options(catalog).to_vec(),
                value: selection.district().map(str::to_string),
                placeholder: DISTRICT_PLACEHOLDER.to_string(),
                size: SelectorSize::Large,
                disabled: !selection.is_city_chosen(catalog),
                on_select: move |district: String| state.selection.write().set_district(catalog, &district),
            }
            button {
                r#type: "submit",
                disabled: control.disabled,
                style: "position: relative; width: 96px; height: 48px; padding: 10px 0; border: none; border-radius: 4px; font-weight: 700; {button_style}",
                onclick: move |_| on_submit.call(()),
                span { "SUBMIT" }
                if control.processing {
                    div {
                        style: "position: absolute; inset: 0; display: flex; justify-content: center; align-items: center;",
                        LoadingSpinner { size: SpinnerSize::Small }
                    }
                }
            }
        }
    }
}
