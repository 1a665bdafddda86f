use yew::prelude::*;
use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};

use crate::config;
use crate::interaction::form::{
    ContactFormMachine, FieldValue, SubmitOutcome, FAILURE_MESSAGE, SUCCESS_MESSAGE,
    VALIDATION_FAILED_MESSAGE,
};

// Field order: name, email, business, message.
const FIELD_COUNT: usize = 4;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let business = use_state(String::new);
    let message = use_state(String::new);
    let field_errors = use_state(|| [false; FIELD_COUNT]);
    let submitting = use_state(|| false);
    let status = use_state(|| None::<(&'static str, &'static str)>);
    let machine = use_mut_ref(ContactFormMachine::default);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let business = business.clone();
        let message = message.clone();
        let field_errors = field_errors.clone();
        let submitting = submitting.clone();
        let status = status.clone();
        let machine = machine.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = [
                FieldValue::required_text(&name),
                FieldValue::required_email(&email),
                FieldValue::optional_text(&business),
                FieldValue::required_text(&message),
            ];
            let outcome = machine.borrow_mut().begin_submit(&fields);

            match outcome {
                SubmitOutcome::Ignored => {}
                SubmitOutcome::Rejected(failed) => {
                    let mut flags = [false; FIELD_COUNT];
                    for (flag, failed) in flags.iter_mut().zip(failed) {
                        *flag = failed;
                    }
                    field_errors.set(flags);
                    status.set(Some((VALIDATION_FAILED_MESSAGE, "error")));
                }
                SubmitOutcome::Accepted => {
                    field_errors.set([false; FIELD_COUNT]);
                    status.set(None);
                    submitting.set(true);

                    let form_data = match FormData::new() {
                        Ok(fd) => fd,
                        Err(_) => {
                            machine.borrow_mut().finish(false);
                            submitting.set(false);
                            status.set(Some((FAILURE_MESSAGE, "error")));
                            return;
                        }
                    };
                    let _ = form_data.append_with_str("name", &name);
                    let _ = form_data.append_with_str("email", &email);
                    let _ = form_data.append_with_str("business", &business);
                    let _ = form_data.append_with_str("message", &message);

                    let name = name.clone();
                    let email = email.clone();
                    let business = business.clone();
                    let message = message.clone();
                    let submitting = submitting.clone();
                    let status = status.clone();
                    let machine = machine.clone();

                    spawn_local(async move {
                        let result = Request::post(config::get_form_endpoint())
                            .header("Accept", "application/json")
                            .body(form_data)
                            .send()
                            .await;

                        let ok = matches!(&result, Ok(response) if response.ok());
                        match &result {
                            Ok(response) if response.ok() => {
                                status.set(Some((SUCCESS_MESSAGE, "success")));
                                name.set(String::new());
                                email.set(String::new());
                                business.set(String::new());
                                message.set(String::new());
                            }
                            Ok(response) => {
                                log!("contact form submission failed with status:", response.status());
                                status.set(Some((FAILURE_MESSAGE, "error")));
                            }
                            Err(e) => {
                                log!("contact form request failed:", e.to_string());
                                status.set(Some((FAILURE_MESSAGE, "error")));
                            }
                        }

                        // Cleanup runs on both outcomes.
                        machine.borrow_mut().finish(ok);
                        submitting.set(false);
                    });
                }
            }
        })
    };

    let clear_error = |field_errors: &UseStateHandle<[bool; FIELD_COUNT]>, index: usize| {
        if field_errors[index] {
            let mut flags = **field_errors;
            flags[index] = false;
            field_errors.set(flags);
        }
    };

    let oninput_name = {
        let name = name.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            clear_error(&field_errors, 0);
        })
    };

    let oninput_email = {
        let email = email.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            clear_error(&field_errors, 1);
        })
    };

    let oninput_business = {
        let business = business.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            business.set(input.value());
            clear_error(&field_errors, 2);
        })
    };

    let oninput_message = {
        let message = message.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
            clear_error(&field_errors, 3);
        })
    };

    let label = machine.borrow().submit_label();

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
            <div class="form-field">
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    required={true}
                    placeholder="Your name"
                    class={classes!("form-input", field_errors[0].then(|| "error"))}
                    value={(*name).clone()}
                    oninput={oninput_name}
                />
            </div>
            <div class="form-field">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    required={true}
                    placeholder="you@restaurant.com"
                    class={classes!("form-input", field_errors[1].then(|| "error"))}
                    value={(*email).clone()}
                    oninput={oninput_email}
                />
            </div>
            <div class="form-field">
                <label for="contact-business">{"Business"}</label>
                <input
                    id="contact-business"
                    name="business"
                    type="text"
                    placeholder="Restaurant or venue (optional)"
                    class={classes!("form-input", field_errors[2].then(|| "error"))}
                    value={(*business).clone()}
                    oninput={oninput_business}
                />
            </div>
            <div class="form-field">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    required={true}
                    rows="5"
                    placeholder="Tell us what you need"
                    class={classes!("form-input", field_errors[3].then(|| "error"))}
                    value={(*message).clone()}
                    oninput={oninput_message}
                ></textarea>
            </div>
            {
                if let Some((text, tone)) = *status {
                    html! { <p id="form-status" class={classes!("form-status", tone)}>{text}</p> }
                } else {
                    html! { <p id="form-status" class="form-status"></p> }
                }
            }
            <button
                id="form-submit"
                type="submit"
                class="btn btn--primary"
                disabled={*submitting}
            >
                {label}
            </button>
        </form>
    }
}
