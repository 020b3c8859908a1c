use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::feedback::{Feedback, FeedbackBoard};
use super::transport::HttpFormTransport;
use super::validation::{ContactSubmission, EMAIL, FULL_NAME, MESSAGE, PHONE};
use super::workflow::{ContactWorkflow, FormView};
use crate::analytics::{AnalyticsEvent, AnalyticsSink, ConsoleAnalytics};
use crate::config::{self, SiteConfig};
use crate::timer::BrowserScheduler;

const SUBMIT_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";

/// The submit control is styled as a `.button`, so it is counted like every
/// other call to action. A `<button>` has no href.
fn track_submit_click(analytics: &impl AnalyticsSink) {
    analytics.track(AnalyticsEvent::cta_click(SUBMIT_LABEL, None));
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Fields {
    full_name: String,
    email: String,
    phone: String,
    message: String,
}

impl Fields {
    fn to_submission(&self) -> ContactSubmission {
        ContactSubmission::from_pairs([
            (FULL_NAME, self.full_name.as_str()),
            (EMAIL, self.email.as_str()),
            (PHONE, self.phone.as_str()),
            (MESSAGE, self.message.as_str()),
        ])
    }
}

#[derive(Clone)]
struct YewFormView {
    in_flight: UseStateHandle<bool>,
    fields: UseStateHandle<Fields>,
    board: Rc<FeedbackBoard<BrowserScheduler>>,
}

impl FormView for YewFormView {
    fn set_in_flight(&self, in_flight: bool) {
        self.in_flight.set(in_flight);
    }

    fn show_feedback(&self, feedback: Feedback) {
        self.board.show(feedback);
    }

    fn clear_fields(&self) {
        self.fields.set(Fields::default());
    }
}

#[function_component]
pub fn ContactForm() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let fields = use_state(Fields::default);
    let in_flight = use_state(|| false);
    let message = use_state(|| None::<Feedback>);

    let board = {
        let message = message.clone();
        use_memo(
            move |visible_ms: &u32| FeedbackBoard::new(BrowserScheduler, *visible_ms, move |f| message.set(f)),
            site.feedback_visible_ms,
        )
    };
    let workflow = use_memo(
        |_| ContactWorkflow::new(HttpFormTransport::new(config::get_form_endpoint()), ConsoleAnalytics),
        (),
    );

    let onsubmit = {
        let view = YewFormView {
            in_flight: in_flight.clone(),
            fields: fields.clone(),
            board,
        };
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = fields.to_submission();
            let workflow = workflow.clone();
            let view = view.clone();
            spawn_local(async move {
                workflow.submit(&view, submission).await;
            });
        })
    };

    let on_input = |update: fn(&mut Fields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            update(&mut next, input.value());
            fields.set(next);
        })
    };
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            fields.set(Fields {
                message: area.value(),
                ..(*fields).clone()
            });
        })
    };

    html! {
        <form id="contact-form" class="contact__form" novalidate={true} {onsubmit}>
            <div class="form__group">
                <input type="text" name={FULL_NAME} class="form__input" placeholder="Full Name"
                    value={fields.full_name.clone()}
                    oninput={on_input(|f, v| f.full_name = v)} />
            </div>
            <div class="form__group">
                <input type="email" name={EMAIL} class="form__input" placeholder="Email Address"
                    value={fields.email.clone()}
                    oninput={on_input(|f, v| f.email = v)} />
            </div>
            <div class="form__group">
                <input type="tel" name={PHONE} class="form__input" placeholder="Phone Number"
                    value={fields.phone.clone()}
                    oninput={on_input(|f, v| f.phone = v)} />
            </div>
            <div class="form__group">
                <textarea name={MESSAGE} class="form__input form__textarea" rows="5" placeholder="Your Message"
                    value={fields.message.clone()}
                    oninput={on_message} />
            </div>
            <button type="submit" class="button form__submit" disabled={*in_flight}
                onclick={Callback::from(|_: MouseEvent| track_submit_click(&ConsoleAnalytics))}>
                { if *in_flight { SENDING_LABEL } else { SUBMIT_LABEL } }
            </button>
            {
                if let Some(feedback) = (*message).as_ref() {
                    html! {
                        <div id="form-message" class={classes!("form__message", feedback.kind.class())} style="display: block;">
                            { &feedback.text }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::RecordingAnalytics;
    use crate::analytics::CTA_CLICK;

    #[test]
    fn submit_click_counts_as_cta_without_href() {
        let analytics = RecordingAnalytics::default();
        track_submit_click(&analytics);

        let events = analytics.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, CTA_CLICK);
        assert_eq!(events[0].event_data["button_text"], SUBMIT_LABEL);
        assert!(events[0].event_data["button_href"].is_null());
    }

    #[test]
    fn fields_map_onto_submission_names() {
        let fields = Fields {
            full_name: "Ada Obi".into(),
            email: "ada@example.com".into(),
            phone: "".into(),
            message: "Hello".into(),
        };
        let submission = fields.to_submission();
        assert_eq!(submission.field(FULL_NAME), Some("Ada Obi"));
        assert_eq!(submission.missing_fields(), vec![PHONE]);
    }
}
