use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::{AnalyticsEvent, AnalyticsSink, ConsoleAnalytics};
use crate::scroll::dom::scroll_to_anchor;

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub secondary: bool,
}

/// Call-to-action button. Clicks are tracked, and in-page targets scroll
/// smoothly instead of jumping.
#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let label = props.label.clone();
        Callback::from(move |e: MouseEvent| {
            ConsoleAnalytics.track(AnalyticsEvent::cta_click(&label, Some(&*href)));
            if scroll_to_anchor(&href) {
                e.prevent_default();
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={classes!("button", props.secondary.then_some("button--ghost"))} {onclick}>
            {props.label.clone()}
        </a>
    }
}
