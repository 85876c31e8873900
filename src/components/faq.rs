use web_sys::MouseEvent;
use yew::prelude::*;

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "How quickly can I get started?",
        "Drop the NetPulse agent onto any host and it starts reporting within a minute. \
         The dashboard picks up new agents automatically, so most teams see their first \
         live topology map before the coffee is done.",
    ),
    (
        "Does NetPulse work with my existing stack?",
        "Yes. Agents run on Linux, macOS and Windows, and the collector speaks standard \
         protocols (SNMP, NetFlow, sFlow). Webhooks and a REST API cover everything else.",
    ),
    (
        "How is my monitoring data secured?",
        "All agent traffic is TLS-encrypted in transit and encrypted at rest. We store \
         aggregated metrics only; packet payloads never leave your network.",
    ),
    (
        "What happens when I outgrow the Starter plan?",
        "Plans scale per monitored host, and you can move between tiers at any time. \
         Usage above your tier is billed at the same per-host rate, never a penalty rate.",
    ),
    (
        "Can I try it before paying?",
        "Every plan starts with a 14-day trial, no card required. When the trial ends \
         your dashboards stay readable; only ingestion pauses until you pick a plan.",
    ),
];

/// One item open at a time; clicking the open item closes it.
fn toggle_exclusive(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct AccordionItemProps {
    question: String,
    answer: String,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(AccordionItem)]
fn accordion_item(props: &AccordionItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("accordion-item", props.open.then(|| "active"))}>
            <button class="accordion-header" {onclick}>
                <span class="accordion-question">{&props.question}</span>
                <span class="accordion-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="accordion-body">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="accordion">
            { for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_| open.set(toggle_exclusive(*open, index)))
                };
                html! {
                    <AccordionItem
                        question={question.to_string()}
                        answer={answer.to_string()}
                        open={*open == Some(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_exclusive;

    #[test]
    fn opening_a_second_item_closes_the_first() {
        let open = toggle_exclusive(None, 0);
        assert_eq!(open, Some(0));
        let open = toggle_exclusive(open, 1);
        assert_eq!(open, Some(1));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle_exclusive(Some(2), 2), None);
    }
}
