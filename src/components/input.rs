//! Text input with leading icon and inline validation message.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

/// Decorative icon shown at the start of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIcon {
    Mail,
    Lock,
}

impl InputIcon {
    fn class(self) -> &'static str {
        match self {
            Self::Mail => "text-input__icon text-input__icon--mail",
            Self::Lock => "text-input__icon text-input__icon--lock",
        }
    }
}

fn wrapper_class(has_error: bool) -> &'static str {
    if has_error { "text-input text-input--invalid" } else { "text-input" }
}

/// Controlled text input.
///
/// The placeholder doubles as the accessible label. `error` is rendered below
/// the control whenever it is `Some`.
#[component]
pub fn TextInput(
    name: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    icon: InputIcon,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div class=move || wrapper_class(has_error())>
            <label class="text-input__field">
                <span class=icon.class() aria-hidden="true"></span>
                <input
                    class="text-input__control"
                    name=name
                    type=input_type
                    placeholder=placeholder
                    aria-label=placeholder
                    aria-invalid=move || if has_error() { "true" } else { "false" }
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </label>
            <Show when=has_error>
                <p class="text-input__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
