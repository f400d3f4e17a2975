use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use log::warn;

/// Easing shared by every entrance transition on the page.
pub const EASE_OUT: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Sections start revealing 100px before they are fully inside the viewport.
pub const SECTION_ROOT_MARGIN: &str = "-100px";

const MOUNT_REVEAL_DELAY_MS: u32 = 50;

/// One visual state of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
}

impl Pose {
    pub const HIDDEN: Pose = Pose { opacity: 0.0, x: 0.0, y: 0.0, scale: 1.0, scale_x: 1.0 };
    pub const SHOWN: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, scale_x: 1.0 };

    fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) scaleX({})",
            self.x, self.y, self.scale, self.scale_x
        )
    }
}

/// A one-shot transition from `from` to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub delay: f64,
    pub origin: Option<&'static str>,
}

impl Motion {
    /// Fades in from transparent, in place.
    pub fn fade(duration: f64, delay: f64) -> Self {
        Self {
            from: Pose::HIDDEN,
            to: Pose::SHOWN,
            duration,
            delay,
            origin: None,
        }
    }

    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.from.x = x;
        self.from.y = y;
        self
    }

    pub fn grow_from(mut self, scale: f64) -> Self {
        self.from.scale = scale;
        self
    }

    pub fn settle_at(mut self, opacity: f64) -> Self {
        self.to.opacity = opacity;
        self
    }

    /// Horizontal rule drawn outwards from `origin` ("left" or "right"); it stays opaque.
    pub fn draw_from(origin: &'static str, duration: f64, delay: f64) -> Self {
        Self {
            from: Pose { scale_x: 0.0, ..Pose::SHOWN },
            to: Pose::SHOWN,
            duration,
            delay,
            origin: Some(origin),
        }
    }

    /// Inline CSS for the element, `revealed` selecting the end pose.
    pub fn style(&self, revealed: bool) -> String {
        let pose = if revealed { &self.to } else { &self.from };
        let mut style = format!(
            "opacity: {}; transform: {}; transition: opacity {}s {} {}s, transform {}s {} {}s;",
            pose.opacity,
            pose.transform(),
            self.duration,
            EASE_OUT,
            self.delay,
            self.duration,
            EASE_OUT,
            self.delay,
        );
        if let Some(origin) = self.origin {
            style.push_str(&format!(" transform-origin: {};", origin));
        }
        style
    }
}

/// Flips once on the first intersection and ignores everything after.
#[derive(Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true only for the observation that triggers the reveal.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    root_margin: &str,
    on_reveal: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let mut latch = RevealLatch::default();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if latch.observe(intersecting) {
            on_reveal();
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing section immediately: {:?}", err);
            None
        }
    }
}

/// True once the referenced section has scrolled into view. Never goes back to false.
#[hook]
pub fn use_reveal(node: NodeRef, root_margin: &'static str) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = node.cast::<Element>().and_then(|element| {
                    let revealed = revealed.clone();
                    observe_once(&element, root_margin, move || revealed.set(true))
                });
                if observed.is_none() {
                    revealed.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

/// Hero variant: reveals right after the first paint.
#[hook]
pub fn use_reveal_on_mount() -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(MOUNT_REVEAL_DELAY_MS, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: Motion,
    pub revealed: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div class={classes!("reveal", props.class.clone())} style={props.motion.style(props.revealed)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_across_scroll_in_and_out() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn latch_stays_closed_without_intersection() {
        let mut latch = RevealLatch::default();
        for _ in 0..5 {
            assert!(!latch.observe(false));
        }
        assert!(!latch.is_revealed());
    }

    #[test]
    fn fade_up_moves_from_offset_to_rest() {
        let motion = Motion::fade(0.8, 0.3).offset(0.0, -30.0);
        assert_eq!(
            motion.style(false),
            "opacity: 0; transform: translate(0px, -30px) scale(1) scaleX(1); \
             transition: opacity 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0.3s, \
             transform 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0.3s;"
        );
        assert!(motion.style(true).starts_with("opacity: 1; transform: translate(0px, 0px) scale(1) scaleX(1);"));
    }

    #[test]
    fn shades_settle_below_full_opacity() {
        let motion = Motion::fade(1.2, 0.3).offset(-150.0, 0.0).settle_at(0.9);
        assert!(motion.style(true).starts_with("opacity: 0.9;"));
        assert!(motion.style(false).contains("translate(-150px, 0px)"));
    }

    #[test]
    fn rules_draw_from_their_origin_without_fading() {
        let motion = Motion::draw_from("right", 1.0, 1.1);
        let hidden = motion.style(false);
        assert!(hidden.starts_with("opacity: 1;"));
        assert!(hidden.contains("scaleX(0)"));
        assert!(hidden.ends_with("transform-origin: right;"));
        assert!(motion.style(true).contains("scaleX(1)"));
    }

    #[test]
    fn grow_from_scales_up_to_rest() {
        let motion = Motion::fade(0.6, 1.0).grow_from(0.8);
        assert!(motion.style(false).contains("scale(0.8)"));
        assert!(motion.style(true).contains("scale(1)"));
    }
}
