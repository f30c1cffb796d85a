//! Sign-up page: welcome panel plus the account-creation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page receives its auth collaborator and config from `App` as props and
//! passes the collaborator straight into `SignUpForm`. Nothing here reads a
//! global auth context.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{ButtonSize, SubmitButton};
use crate::components::input::{InputIcon, TextInput};
use crate::config::ClientConfig;
use crate::net::auth::{AuthError, AuthHandle};
use crate::net::types::SignUpResponse;
use crate::state::sign_up::{SignUpFormState, dispatch_sign_up};
use crate::util::sign_up_schema::SignUpField;

pub const PAGE_TITLE: &str = "Timos | Cadastro";

/// Static rendering attributes of one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FieldView {
    input_type: &'static str,
    placeholder: &'static str,
    icon: InputIcon,
}

fn field_view(field: SignUpField) -> FieldView {
    match field {
        SignUpField::Email => FieldView { input_type: "email", placeholder: "E-mail", icon: InputIcon::Mail },
        SignUpField::Password => FieldView { input_type: "password", placeholder: "Senha", icon: InputIcon::Lock },
        SignUpField::PasswordConfirmation => {
            FieldView { input_type: "password", placeholder: "Confirmar senha", icon: InputIcon::Lock }
        }
    }
}

/// Route-level sign-up screen.
#[component]
pub fn SignUpPage(auth: AuthHandle, config: ClientConfig) -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE/>
        <main class="signup-page">
            <section class="signup-page__welcome">
                <h1 class="signup-page__heading">"Bem-vindo(a) ao Timos!"</h1>
                <p class="signup-page__tagline">"Não esqueça nunca mais de seus empréstimos."</p>
                <div class="signup-page__art">
                    <img class="floating" src="/assets/guy.svg" width="300" height="500" alt=""/>
                    <img class="floating-reverse" src="/assets/laptop.svg" width="200" height="200" alt=""/>
                </div>
            </section>
            <section class="signup-page__card">
                <SignUpForm auth=auth sign_in_href=config.sign_in_href/>
            </section>
        </main>
    }
}

/// Email / password / confirmation form.
///
/// Submitting validates the whole form; only a fully valid form is handed to
/// `auth`. Every valid submit dispatches, including repeats.
#[component]
pub fn SignUpForm(auth: AuthHandle, #[prop(into)] sign_in_href: String) -> impl IntoView {
    let form = RwSignal::new(SignUpFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(task) = submit_form(form, auth.clone()) {
            leptos::task::spawn_local(async move {
                let _ = task.await;
            });
        }
    };

    let input_for = move |field: SignUpField| {
        let FieldView { input_type, placeholder, icon } = field_view(field);
        let value = Signal::derive(move || form.with(|f| f.value(field).to_owned()));
        let error = Signal::derive(move || form.with(|f| f.error(field).map(str::to_owned)));
        let on_input = Callback::new(move |value: String| form.update(|f| f.set_field(field, value)));
        view! {
            <TextInput
                name=field.name()
                input_type=input_type
                placeholder=placeholder
                icon=icon
                value=value
                error=error
                on_input=on_input
            />
        }
    };

    view! {
        <form class="signup-form" novalidate=true on:submit=on_submit>
            <div class="signup-form__fields">
                <img class="signup-form__logo" src="/assets/logo.svg" width="80" height="80" alt="Timos"/>
                <p class="signup-form__title">"Cadastro"</p>
                {SignUpField::ALL.into_iter().map(input_for).collect_view()}
            </div>
            <div class="signup-form__actions">
                <SubmitButton title="Criar conta" size=ButtonSize::Lg/>
                <div class="signup-form__divider" aria-hidden="true">
                    <hr/>
                    <span class="signup-form__dot"></span>
                    <hr/>
                </div>
                <p class="signup-form__sign-in">
                    "Já possui uma conta? "
                    <a class="signup-form__link" href=sign_in_href>
                        "Entre agora"
                    </a>
                </p>
            </div>
        </form>
    }
}

/// Validate the form now and, when it passes, return the task that makes
/// the single `sign_up` call and then releases the in-flight slot.
///
/// Returns `None` when validation fails; the errors are already on `form`.
fn submit_form(
    form: RwSignal<SignUpFormState>,
    auth: AuthHandle,
) -> Option<impl Future<Output = Result<SignUpResponse, AuthError>> + 'static> {
    let credentials = form.try_update(SignUpFormState::begin_submit)?.ok()?;
    Some(async move {
        let result = dispatch_sign_up(auth.as_ref(), credentials).await;
        form.update(SignUpFormState::finish_submit);
        result
    })
}
