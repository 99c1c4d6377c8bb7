//! Visual polish for the landing page: navbar scroll shading, staggered
//! fade-in of cards, floating hero particles, smooth anchor scrolling and
//! body scroll locking.
//!
//! The style computations are pure; the browser glue at the bottom is wasm-only.

use std::collections::VecDeque;

use rand::Rng;

/// Scroll offset (px) after which the navbar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Interval between two particle spawns.
pub const PARTICLE_INTERVAL_MS: u32 = 500;

/// Particles are removed this long after spawning.
pub const PARTICLE_LIFETIME_MS: u32 = 10_000;

/// Elements with this class fade in when scrolled into view.
pub const REVEAL_CLASS: &str = "reveal";

/// Added to a `.reveal` element once it became visible.
pub const VISIBLE_CLASS: &str = "visible";

/// Key that dismisses overlays.
pub const ESCAPE_KEY: &str = "Escape";

/// Script for `document::eval`: forwards every Escape press on the document,
/// whichever element has focus, through `dioxus.send`.
pub const ESCAPE_LISTENER: &str = r#"
document.addEventListener("keydown", (event) => {
    if (event.key === "Escape") {
        dioxus.send(event.key);
    }
});
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavStyle {
    pub fn css(&self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background, self.box_shadow
        )
    }
}

pub fn nav_style(scroll_y: f64) -> NavStyle {
    if scroll_y > NAV_SCROLL_THRESHOLD {
        NavStyle {
            background: "rgba(255, 255, 255, 0.98)",
            box_shadow: "0 4px 20px rgba(0, 0, 0, 0.1)",
        }
    } else {
        NavStyle {
            background: "rgba(255, 255, 255, 0.9)",
            box_shadow: "none",
        }
    }
}

/// Inline transition for the `index`-th revealed card (100 ms stagger).
pub fn reveal_transition(index: usize) -> String {
    let delay = index as f64 * 0.1;
    format!("transition: opacity 0.6s ease {delay:.1}s, transform 0.6s ease {delay:.1}s;")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    /// Horizontal position in percent of the hero width.
    pub left_pct: f64,
    /// Duration of the float-up animation in seconds.
    pub duration_s: f64,
    born_tick: u64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation: floatUp {:.2}s linear forwards;",
            self.left_pct, self.duration_s
        )
    }
}

/// Particles currently alive in the hero, advanced once per spawn interval.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    tick: u64,
    next_id: u64,
    particles: VecDeque<Particle>,
}

impl ParticleField {
    /// Spawn one particle and drop those older than [`PARTICLE_LIFETIME_MS`].
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tick += 1;
        let lifetime_ticks = u64::from(PARTICLE_LIFETIME_MS / PARTICLE_INTERVAL_MS);
        while self
            .particles
            .front()
            .is_some_and(|p| self.tick - p.born_tick >= lifetime_ticks)
        {
            self.particles.pop_front();
        }
        self.particles.push_back(Particle {
            id: self.next_id,
            left_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(5.0..10.0),
            born_tick: self.tick,
        });
        self.next_id += 1;
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to(id: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to(_id: &str) {}

/// Restyle the element matching `selector` from [`nav_style`] on every window scroll.
#[cfg(target_arch = "wasm32")]
pub fn shade_on_scroll(selector: &'static str) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let source = window.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        let style = nav_style(source.scroll_y().unwrap_or(0.0));
        if let Some(nav) = source
            .document()
            .and_then(|d| d.query_selector(selector).ok().flatten())
        {
            nav.set_attribute("style", &style.css()).ok();
        }
    });
    if window
        .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        // lives as long as the page
        handler.forget();
    }
}

/// Fade in every `.reveal` element the first time it enters the viewport.
#[cfg(target_arch = "wasm32")]
pub fn observe_reveals() {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    target.class_list().add_1(VISIBLE_CLASS).ok();
                    observer.unobserve(&target);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
}

/// Disable page scrolling behind an overlay.
#[cfg(target_arch = "wasm32")]
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    body.style().set_property("overflow", value).ok();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn lock_body_scroll(_locked: bool) {}
