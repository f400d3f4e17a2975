use yew::prelude::*;
use crate::components::{
    about::About,
    faq::Faq,
    features::Features,
    footer::Footer,
    image_section::ImageSection,
    navbar::Navbar,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="scroll-snap-container">
            <section class="scroll-snap-section">
                <Navbar />
            </section>
            <section class="scroll-snap-section">
                <ImageSection />
            </section>
            <section class="scroll-snap-section">
                <Features />
            </section>
            <section class="scroll-snap-section">
                <About />
            </section>
            <section class="scroll-snap-section">
                <Faq />
                <Footer />
            </section>
            <style>
                {r#"
                .scroll-snap-container {
                    scroll-snap-type: y proximity;
                    overflow-x: hidden;
                }

                .scroll-snap-section {
                    scroll-snap-align: start;
                    position: relative;
                }

                .cta-link {
                    display: inline-block;
                    text-decoration: none;
                }

                .cta-link.cta-inert {
                    pointer-events: none;
                    cursor: default;
                }

                .cta-button {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 1rem 0.75rem;
                    background: #ffffff;
                    border-radius: 1.5rem;
                    box-shadow: inset 0 12px 8px 0 rgba(174, 203, 192, 1);
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .cta-footer .cta-button {
                    padding: 1rem 1.5rem;
                    border-radius: 2rem;
                }

                .cta-link:hover .cta-button {
                    transform: scale(1.05);
                }

                .cta-label {
                    color: #000000;
                    font-size: 1.125rem;
                    font-weight: 500;
                }

                .cta-icon {
                    position: relative;
                    display: flex;
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal,
                    .beam,
                    .hero-rule,
                    .corner-glow {
                        opacity: 1 !important;
                        transform: none !important;
                        transition: none !important;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::ServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;
    use crate::components::install_link::InstallLink;
    use crate::content::{LOGO, PRODUCT_SHOT};

    #[derive(Properties, PartialEq)]
    struct HomeHarnessProps {
        link: InstallLink,
    }

    #[function_component(HomeHarness)]
    fn home_harness(props: &HomeHarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router {history}>
                <ContextProvider<InstallLink> context={props.link.clone()}>
                    <Home />
                </ContextProvider<InstallLink>>
            </Router>
        }
    }

    fn render_home(link: InstallLink) -> String {
        block_on(
            ServerRenderer::<HomeHarness>::with_props(move || HomeHarnessProps { link })
                .hydratable(false)
                .render(),
        )
    }

    // Text between every `open` and the next `close`, in document order.
    fn collect(markup: &str, open: &str, close: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut rest = markup;
        while let Some(start) = rest.find(open) {
            rest = &rest[start + open.len()..];
            match rest.find(close) {
                Some(end) => {
                    found.push(rest[..end].to_string());
                    rest = &rest[end + close.len()..];
                }
                None => break,
            }
        }
        found
    }

    fn headings(markup: &str) -> Vec<String> {
        ["h1", "h2", "h3", "h4"]
            .iter()
            .flat_map(|tag| collect(markup, &format!("<{tag}"), &format!("</{tag}>")))
            .collect()
    }

    #[test]
    fn headings_and_alt_text_ignore_install_link() {
        let pending = render_home(InstallLink::Pending);
        let ready = render_home(InstallLink::Ready("https://example.com/install".to_string()));

        let alts = collect(&pending, r#"alt=""#, "\"");
        assert!(alts.iter().any(|alt| alt == LOGO.alt), "{alts:?}");
        assert!(alts.iter().any(|alt| alt == PRODUCT_SHOT.alt), "{alts:?}");
        assert_eq!(alts, collect(&ready, r#"alt=""#, "\""));

        let titles = headings(&pending);
        assert!(!titles.is_empty());
        assert_eq!(titles, headings(&ready));
    }

    #[test]
    fn hero_and_footer_share_one_install_link() {
        let pending = render_home(InstallLink::Pending);
        assert_eq!(pending.matches(r#"aria-disabled="true""#).count(), 2);

        let ready = render_home(InstallLink::Ready("https://example.com/install".to_string()));
        assert_eq!(ready.matches(r#"href="https://example.com/install""#).count(), 2);
        assert_eq!(ready.matches(r#"aria-disabled="true""#).count(), 0);
    }
}
