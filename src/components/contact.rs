use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlFormElement;
use yew::prelude::*;

/// Contact form stub. Submission is intercepted, acknowledged inline and
/// the fields reset; nothing is sent anywhere.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let sent = use_state(|| false);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("contact form submitted (stub, not transmitted)");

            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }

            sent.set(true);
            let sent = sent.clone();
            Timeout::new(5_000, move || sent.set(false)).forget();
        })
    };

    html! {
        <form class="contact-form" ref={form_ref} {onsubmit}>
            <div class="form-field">
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" name="name" type="text" required=true />
            </div>
            <div class="form-field">
                <label for="contact-email">{"Email"}</label>
                <input id="contact-email" name="email" type="email" required=true />
            </div>
            <div class="form-field">
                <label for="contact-message">{"Message"}</label>
                <textarea id="contact-message" name="message" rows="5" required=true></textarea>
            </div>
            <button type="submit" class="button primary">{"Send Message"}</button>
            {
                if *sent {
                    html! {
                        <p class="form-acknowledgement">
                            {"Thank you for your message! We will get back to you soon."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
