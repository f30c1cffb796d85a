//! Form submit button.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

fn button_class(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Md => "button",
        ButtonSize::Lg => "button button--lg",
    }
}

/// `type="submit"` button labelled with `title`.
#[component]
pub fn SubmitButton(title: &'static str, #[prop(optional)] size: ButtonSize) -> impl IntoView {
    view! {
        <button class=button_class(size) type="submit">
            {title}
        </button>
    }
}
