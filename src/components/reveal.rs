use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::interaction::reveal::RevealSet;

const REVEAL_SELECTOR: &str = ".reveal";
const VISIBLE_CLASS: &str = "visible";
const INDEX_ATTR: &str = "data-reveal-index";

fn reveal_immediately(elements: &[Element]) {
    for el in elements {
        let _ = el.class_list().add_1(VISIBLE_CLASS);
    }
}

/// Wires the one-shot reveal animation over every `.reveal` element. Each
/// element gets an index attribute tying it to a [`RevealSet`] slot; the
/// observer callback consults the set so a slot can never reveal twice, and
/// unobserves the element on its first reveal. Without IntersectionObserver
/// support everything is revealed at init instead.
pub fn mount(document: &Document) {
    let nodes = match document.query_selector_all(REVEAL_SELECTOR) {
        Ok(nodes) => nodes,
        Err(_) => return,
    };
    let mut elements = Vec::new();
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            elements.push(el);
        }
    }
    if elements.is_empty() {
        return;
    }

    let supported = web_sys::window().map_or(false, |w| {
        js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    });
    if !supported {
        reveal_immediately(&elements);
        return;
    }

    let set = Rc::new(RefCell::new(RevealSet::new(elements.len())));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let index = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok());
                let newly_visible = index.map_or(false, |i| set.borrow_mut().mark_visible(i));
                if newly_visible {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    // Fire slightly before the element's bottom edge reaches the viewport.
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -40px 0px");

    // Construction failing degrades the same way as no support, so the
    // elements only carry index attributes once the observer exists.
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                reveal_immediately(&elements);
                return;
            }
        };
    for (i, el) in elements.iter().enumerate() {
        let _ = el.set_attribute(INDEX_ATTR, &i.to_string());
        observer.observe(el);
    }
    // Observer and callback live for the page session.
    callback.forget();
}
