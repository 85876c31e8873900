use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::faq::Faq;
use crate::components::nav::activate_nav_link;
use crate::components::vanta::VantaBackground;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "📡",
        "Live Topology",
        "Every host, switch and link on one auto-discovered map, refreshed in real time \
         as your network changes.",
    ),
    (
        "⚡",
        "Instant Alerts",
        "Latency spikes, packet loss and dying interfaces page you in seconds, with the \
         affected path highlighted.",
    ),
    (
        "📊",
        "Deep Analytics",
        "Per-flow breakdowns and 13 months of retention turn capacity planning from \
         guesswork into a query.",
    ),
    (
        "🔒",
        "Private by Default",
        "Metrics are aggregated at the edge. Packet payloads never leave your own \
         infrastructure.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    (
        "Install the agent",
        "One command per host. Agents are a single static binary with no kernel modules.",
    ),
    (
        "Watch the map build",
        "Discovery runs automatically and your topology appears within minutes.",
    ),
    (
        "Set your thresholds",
        "Pick the latency and loss budgets that matter to you, or keep the defaults.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Hero CTAs and footer links share the nav anchors' scroll behavior.
    let on_anchor_click = Callback::from(move |e: MouseEvent| {
        let _ = activate_nav_link(&e);
    });

    html! {
        <div class="home-page">
            <section id="home" class="hero">
                <VantaBackground mount_id="hero-background" />
                <div class="hero-content">
                    <h1>{"See your whole network breathe"}</h1>
                    <p>
                        {"NetPulse maps every host and link you run, watches them in real \
                          time, and pages you the moment something drifts."}
                    </p>
                    <div class="cta-buttons">
                        <a href="#pricing" class="button primary" onclick={on_anchor_click.clone()}>
                            {"Start Free Trial"}
                        </a>
                        <a href="#features" class="button secondary" onclick={on_anchor_click.clone()}>
                            {"Explore Features"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <h2>{"Built for the people on call"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>{"Up and running in an afternoon"}</h2>
                <ol class="steps">
                    { for STEPS.iter().enumerate().map(|(index, (title, body))| html! {
                        <li class="step">
                            <span class="step-number">{index + 1}</span>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        </li>
                    }) }
                </ol>
            </section>

            <section id="pricing" class="pricing">
                <h2>{"Simple per-host pricing"}</h2>
                <div class="pricing-grid">
                    <div class="pricing-card">
                        <h3>{"Starter"}</h3>
                        <p class="price">{"$0"}<span>{"/mo"}</span></p>
                        <ul>
                            <li>{"Up to 5 hosts"}</li>
                            <li>{"24 hours of retention"}</li>
                            <li>{"Email alerts"}</li>
                        </ul>
                        <a href="#contact" class="button secondary" onclick={on_anchor_click.clone()}>
                            {"Get Started"}
                        </a>
                    </div>
                    <div class="pricing-card highlighted">
                        <h3>{"Team"}</h3>
                        <p class="price">{"$49"}<span>{"/mo"}</span></p>
                        <ul>
                            <li>{"Up to 100 hosts"}</li>
                            <li>{"13 months of retention"}</li>
                            <li>{"Pager and webhook alerts"}</li>
                            <li>{"Flow analytics"}</li>
                        </ul>
                        <a href="#contact" class="button primary" onclick={on_anchor_click.clone()}>
                            {"Start Free Trial"}
                        </a>
                    </div>
                    <div class="pricing-card">
                        <h3>{"Enterprise"}</h3>
                        <p class="price">{"Custom"}</p>
                        <ul>
                            <li>{"Unlimited hosts"}</li>
                            <li>{"On-premises collector"}</li>
                            <li>{"SSO and audit logs"}</li>
                        </ul>
                        <a href="#contact" class="button secondary" onclick={on_anchor_click.clone()}>
                            {"Talk to Us"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="faq" class="faq">
                <h2>{"Frequently asked questions"}</h2>
                <Faq />
            </section>

            <section id="contact" class="contact">
                <h2>{"Get in touch"}</h2>
                <p>{"Questions about a rollout, a plan, or anything else? We read everything."}</p>
                <ContactForm />
            </section>

            <footer class="site-footer">
                <div class="footer-links">
                    <a href="#home" onclick={on_anchor_click.clone()}>{"Home"}</a>
                    <a href="#features" onclick={on_anchor_click.clone()}>{"Features"}</a>
                    <a href="#pricing" onclick={on_anchor_click.clone()}>{"Pricing"}</a>
                    <a href="#faq" onclick={on_anchor_click.clone()}>{"FAQ"}</a>
                    <a href="https://status.netpulse.example">{"Status"}</a>
                </div>
                <p class="footer-copy">{"© 2026 NetPulse. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
                :root {
                    --blue: #2563eb;
                    --blue-soft: #7EB2FF;
                    --navy: #0f1d40;
                    --ink: #0b1530;
                    --text: #e8edf8;
                    --muted: #9aa7c7;
                }

                body {
                    margin: 0;
                    background: var(--ink);
                    color: var(--text);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI",
                        Roboto, Helvetica, Arial, sans-serif;
                }

                .home-page section {
                    padding: 6rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .home-page h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2.5rem;
                    text-align: center;
                    background: linear-gradient(45deg, #fff, var(--blue-soft));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                /* Hero */

                .hero {
                    position: relative;
                    min-height: 100vh;
                    max-width: none;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                }

                .vanta-background {
                    position: absolute;
                    inset: 0;
                    background: var(--navy);
                    z-index: 0;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 720px;
                    padding: 0 1.5rem;
                }

                .hero-content h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                }

                .hero-content p {
                    font-size: 1.25rem;
                    color: var(--muted);
                    margin-bottom: 2.5rem;
                }

                .cta-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .button {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .button.primary {
                    background: var(--blue);
                    color: #fff;
                    border: 1px solid var(--blue);
                }

                .button.primary:hover {
                    background: #1d4fd8;
                }

                .button.secondary {
                    color: var(--blue-soft);
                    border: 1px solid rgba(126, 178, 255, 0.4);
                }

                .button.secondary:hover {
                    border-color: var(--blue-soft);
                }

                /* Features */

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                    gap: 1.5rem;
                }

                .feature-card {
                    background: rgba(15, 29, 64, 0.6);
                    border: 1px solid rgba(37, 99, 235, 0.15);
                    border-radius: 12px;
                    padding: 2rem 1.5rem;
                    transition: border-color 0.2s ease;
                }

                .feature-card:hover {
                    border-color: rgba(37, 99, 235, 0.45);
                }

                .feature-icon {
                    font-size: 2rem;
                }

                .feature-card h3 {
                    margin: 1rem 0 0.5rem;
                }

                .feature-card p {
                    color: var(--muted);
                    line-height: 1.6;
                }

                /* How it works */

                .steps {
                    list-style: none;
                    padding: 0;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .step {
                    display: flex;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }

                .step-number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--blue);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }

                .step h3 {
                    margin: 0 0 0.4rem;
                }

                .step p {
                    color: var(--muted);
                    margin: 0;
                }

                /* Pricing */

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    align-items: start;
                }

                .pricing-card {
                    background: rgba(15, 29, 64, 0.6);
                    border: 1px solid rgba(37, 99, 235, 0.15);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                }

                .pricing-card.highlighted {
                    border-color: var(--blue);
                    transform: scale(1.03);
                }

                .price {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin: 1rem 0;
                }

                .price span {
                    font-size: 1rem;
                    color: var(--muted);
                }

                .pricing-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    color: var(--muted);
                }

                .pricing-card li {
                    padding: 0.4rem 0;
                }

                /* FAQ accordion */

                .accordion {
                    max-width: 720px;
                    margin: 0 auto;
                }

                .accordion-item {
                    background: rgba(15, 29, 64, 0.6);
                    border: 1px solid rgba(37, 99, 235, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .accordion-header {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .accordion-header:hover {
                    color: var(--blue-soft);
                }

                .accordion-icon {
                    color: var(--blue-soft);
                    font-size: 1.4rem;
                }

                .accordion-body {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .accordion-item.active .accordion-body {
                    max-height: 400px;
                    padding: 0 1.5rem 1.25rem;
                }

                .accordion-body p {
                    color: var(--muted);
                    line-height: 1.6;
                    margin: 0;
                }

                /* Contact */

                .contact {
                    text-align: center;
                }

                .contact > p {
                    color: var(--muted);
                    margin-bottom: 2.5rem;
                }

                .contact-form {
                    max-width: 520px;
                    margin: 0 auto;
                    text-align: left;
                }

                .form-field {
                    margin-bottom: 1.25rem;
                }

                .form-field label {
                    display: block;
                    margin-bottom: 0.4rem;
                    color: var(--muted);
                }

                .form-field input,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(37, 99, 235, 0.25);
                    background: rgba(11, 21, 48, 0.8);
                    color: var(--text);
                    font-size: 1rem;
                }

                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: var(--blue);
                }

                .contact-form .button {
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                }

                .form-acknowledgement {
                    margin-top: 1.25rem;
                    color: var(--blue-soft);
                }

                /* Footer */

                .site-footer {
                    border-top: 1px solid rgba(37, 99, 235, 0.15);
                    padding: 3rem 2rem;
                    text-align: center;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-bottom: 1.5rem;
                }

                .footer-links a {
                    color: var(--muted);
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: var(--blue-soft);
                }

                .footer-copy {
                    color: var(--muted);
                    font-size: 0.9rem;
                }

                @media (max-width: 768px) {
                    .home-page section {
                        padding: 4rem 1rem;
                    }

                    .hero-content h1 {
                        font-size: 2.5rem;
                    }

                    .home-page h2 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
