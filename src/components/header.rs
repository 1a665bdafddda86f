use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, KeyboardEvent, Window};

use crate::interaction::nav::NavState;
use crate::interaction::scroll::{ScrollState, SectionBounds};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    let mut sections = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section[id]") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let id = el.id();
                if id.is_empty() {
                    continue;
                }
                sections.push(SectionBounds {
                    id,
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                });
            }
        }
    }
    sections
}

fn read_scroll_state(window: &Window, document: &Document) -> ScrollState {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    ScrollState::compute(scroll_y, &section_bounds(document))
}

#[function_component(Header)]
pub fn header() -> Html {
    let nav = use_state(NavState::default);
    let scroll = use_state_eq(ScrollState::default);

    // Scroll tracking: passive listener, run once at mount. Section bounds are
    // read from layout inside the handler so late-loading content stays correct.
    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let document = window.document()?;
                    scroll.set(read_scroll_state(&window, &document));

                    let window_for_cb = window.clone();
                    let scroll_for_cb = scroll.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        if let Some(document) = window_for_cb.document() {
                            scroll_for_cb.set(read_scroll_state(&window_for_cb, &document));
                        }
                    }) as Box<dyn FnMut()>);

                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    window
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                            &options,
                        )
                        .ok()?;
                    Some((window, callback))
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Escape closes the panel. The document listener only exists while the
    // panel is open; the effect cleanup drops it on close and on unmount.
    {
        let nav = nav.clone();
        let deps_is_open = nav.is_open;
        use_effect_with_deps(
            move |is_open: &bool| {
                let listener = (*is_open)
                    .then(|| web_sys::window().and_then(|w| w.document()))
                    .flatten()
                    .map(|document| {
                        let nav = nav.clone();
                        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                nav.set(NavState { is_open: false });
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        (document, callback)
                    });

                move || {
                    if let Some((document, callback)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            deps_is_open,
        );
    }

    // Page background scroll lock while the panel is open.
    use_effect_with_deps(
        move |is_open: &bool| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                if *is_open {
                    let _ = body.style().set_property("overflow", "hidden");
                } else {
                    let _ = body.style().remove_property("overflow");
                }
            }
            || ()
        },
        nav.is_open,
    );

    let toggle_nav = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            nav.set(nav.toggled());
        })
    };

    let close_nav = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            nav.set(nav.closed());
        })
    };

    let is_open = nav.is_open;
    let active_id = scroll.active_section_id.as_deref();

    html! {
        <>
            <header id="header" class={classes!("header", scroll.scrolled_past_threshold.then(|| "scrolled"))}>
                <div class="header__inner">
                    <a href="#home" class="header__logo">{"Gratitude Foodservice"}</a>
                    <nav class="nav" aria-label="Primary">
                        {
                            NAV_LINKS.iter().map(|(href, label)| {
                                let active = active_id == Some(href.trim_start_matches('#'));
                                html! {
                                    <a href={*href} class={classes!("nav__link", active.then(|| "active"))}>
                                        {*label}
                                    </a>
                                }
                            }).collect::<Html>()
                        }
                        <a href="#contact" class="nav__cta">{"Get in Touch"}</a>
                    </nav>
                    <button
                        class={classes!("nav-toggle", is_open.then(|| "active"))}
                        aria-expanded={nav.aria_expanded()}
                        aria-label="Toggle navigation"
                        onclick={toggle_nav}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <nav
                id="mobile-nav"
                class={classes!("mobile-nav", is_open.then(|| "open"))}
                aria-hidden={nav.aria_hidden()}
            >
                {
                    NAV_LINKS.iter().map(|(href, label)| {
                        html! {
                            <a href={*href} class="mobile-nav__link" onclick={close_nav.clone()}>
                                {*label}
                            </a>
                        }
                    }).collect::<Html>()
                }
                <a href="#contact" class="mobile-nav__cta" onclick={close_nav.clone()}>
                    {"Get in Touch"}
                </a>
            </nav>
            <div
                class={classes!("mobile-nav-backdrop", is_open.then(|| "active"))}
                onclick={close_nav}
            ></div>
        </>
    }
}
