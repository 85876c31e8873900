use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom;
use crate::section_tracker::{SectionTracker, TrackerEvent};
use crate::Route;

/// Menu entries, in document order of the sections they target.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("features", "Features"),
    ("how-it-works", "How It Works"),
    ("pricing", "Pricing"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

/// Shared click handler for every in-page anchor (nav menu, hero CTAs,
/// footer links). Returns the activated section id when the click resolved
/// to a section on this page; otherwise leaves the event alone so the
/// browser performs its default navigation.
pub fn activate_nav_link(e: &MouseEvent) -> Option<String> {
    let href = e
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        .and_then(|el| el.get_attribute("href"))?;
    let id = href.strip_prefix('#')?;

    let window = web_sys::window()?;
    let document = window.document()?;
    let mut tracker = SectionTracker::new(
        dom::query_sections(&document),
        dom::header_offset(&document),
    );
    let effects = tracker.handle(TrackerEvent::NavLinkActivated(id.to_string()));
    let top = effects.scroll_to?;

    e.prevent_default();
    dom::scroll_to_y(&window, top);
    if effects.close_menu {
        dom::signal_navigation(&window);
    }
    debug!("navigating to #{}", id);
    tracker.active().map(str::to_string)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let active_section = use_state_eq(|| None::<String>);

    // Keep the highlighted entry in step with free scrolling. Extents are
    // re-read on every event, never cached across reflows.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let mut tracker = SectionTracker::new(
                        dom::query_sections(&document),
                        dom::header_offset(&document),
                    );
                    tracker.handle(TrackerEvent::ScrollChanged(scroll_y));
                    active_section.set(tracker.active().map(str::to_string));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Collapse the mobile menu on any in-page navigation, wherever the
    // anchor lives (nav menu, hero CTAs, footer links).
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let navigated_callback = Closure::wrap(Box::new(move || {
                    menu_open.set(false);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        dom::NAVIGATED_EVENT,
                        navigated_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            dom::NAVIGATED_EVENT,
                            navigated_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Menu collapse arrives through the navigated signal, same as for
    // anchors outside this component.
    let on_nav_click = {
        let active_section = active_section.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = activate_nav_link(&e) {
                // Optimistic highlight; the scroll animation catches up.
                active_section.set(Some(id));
            }
        })
    };

    html! {
        <>
        <header class="site-header">
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="site-logo">
                    {"NetPulse"}
                </Link<Route>>

                <button
                    class={classes!("hamburger", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("site-nav", (*menu_open).then(|| "active"))}>
                    <ul>
                        { for NAV_SECTIONS.iter().map(|(id, label)| {
                            let is_active = active_section.as_deref() == Some(*id);
                            html! {
                                <li>
                                    <a
                                        href={format!("#{}", id)}
                                        class={classes!(is_active.then(|| "active"))}
                                        onclick={on_nav_click.clone()}
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
        <style>
            {r#"
            .site-header {
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                z-index: 100;
                background: rgba(11, 21, 48, 0.85);
                backdrop-filter: blur(10px);
                border-bottom: 1px solid rgba(37, 99, 235, 0.15);
            }

            .header-content {
                max-width: 1100px;
                margin: 0 auto;
                padding: 1.25rem 2rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }

            .site-logo {
                font-size: 1.4rem;
                font-weight: 700;
                color: #fff;
                text-decoration: none;
            }

            .site-nav ul {
                display: flex;
                gap: 1.75rem;
                list-style: none;
                margin: 0;
                padding: 0;
            }

            .site-nav a {
                color: #9aa7c7;
                text-decoration: none;
                transition: color 0.2s ease;
            }

            .site-nav a:hover,
            .site-nav a.active {
                color: #7EB2FF;
            }

            .hamburger {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
                cursor: pointer;
                padding: 0.5rem;
            }

            .hamburger span {
                width: 24px;
                height: 2px;
                background: #fff;
                transition: transform 0.3s ease, opacity 0.3s ease;
            }

            .hamburger.active span:nth-child(1) {
                transform: translateY(7px) rotate(45deg);
            }

            .hamburger.active span:nth-child(2) {
                opacity: 0;
            }

            .hamburger.active span:nth-child(3) {
                transform: translateY(-7px) rotate(-45deg);
            }

            @media (max-width: 768px) {
                .hamburger {
                    display: flex;
                }

                .site-nav {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: rgba(11, 21, 48, 0.97);
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }

                .site-nav.active {
                    max-height: 320px;
                }

                .site-nav ul {
                    flex-direction: column;
                    gap: 0;
                    padding: 1rem 2rem;
                }

                .site-nav li {
                    padding: 0.6rem 0;
                }
            }
            "#}
        </style>
        </>
    }
}
