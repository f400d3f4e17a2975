use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen_futures::spawn_local;
use log::{error, info};
use crate::install_info::{HttpInstallInfoSource, InstallInfoSource};
use crate::components::icons::{Arrow, Star};

/// Where the "Start Now" buttons point. Shared by every CTA on the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InstallLink {
    #[default]
    Pending,
    Ready(String),
    Unavailable,
}

/// Runs the source once and folds every failure into `Unavailable`.
pub async fn load_install_link<S: InstallInfoSource>(source: &S) -> InstallLink {
    match source.fetch().await {
        Ok(info) => {
            info!("GitHub App installation link loaded");
            InstallLink::Ready(info.installation_url)
        }
        Err(e) => {
            error!("Failed to fetch GitHub App info: {}", e);
            InstallLink::Unavailable
        }
    }
}

/// Anchor attributes for a CTA in a given link state.
#[derive(Clone, Debug, PartialEq)]
pub struct CtaAnchor {
    pub href: String,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    pub inert: bool,
}

impl CtaAnchor {
    pub fn for_link(link: &InstallLink) -> Self {
        match link {
            InstallLink::Ready(url) => Self {
                href: url.clone(),
                target: Some("_blank"),
                rel: Some("noopener noreferrer"),
                inert: false,
            },
            InstallLink::Pending | InstallLink::Unavailable => Self {
                href: "#".to_string(),
                target: None,
                rel: None,
                inert: true,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InstallLinkProviderProps {
    #[prop_or_default]
    pub children: Children,
}

// Fetched once per page load; route changes keep the value.
#[function_component(InstallLinkProvider)]
pub fn install_link_provider(props: &InstallLinkProviderProps) -> Html {
    let link = use_state(|| InstallLink::Pending);

    {
        let link = link.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let source = HttpInstallInfoSource::from_config();
                    info!("Fetching GitHub App info from {}", source.endpoint());
                    link.set(load_install_link(&source).await);
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<InstallLink> context={(*link).clone()}>
            { for props.children.iter() }
        </ContextProvider<InstallLink>>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum CtaVariant {
    Hero,
    Footer,
}

#[derive(Properties, PartialEq)]
pub struct StartNowButtonProps {
    pub variant: CtaVariant,
}

#[function_component(StartNowButton)]
pub fn start_now_button(props: &StartNowButtonProps) -> Html {
    let link = use_context::<InstallLink>().unwrap_or_default();
    let anchor = CtaAnchor::for_link(&link);

    let onclick = {
        let inert = anchor.inert;
        Callback::from(move |e: MouseEvent| {
            if inert {
                e.prevent_default();
            }
        })
    };

    let variant_class = match props.variant {
        CtaVariant::Hero => "cta-hero",
        CtaVariant::Footer => "cta-footer",
    };

    html! {
        <a
            href={anchor.href.clone()}
            target={anchor.target}
            rel={anchor.rel}
            aria-disabled={anchor.inert.then_some("true")}
            class={classes!("cta-link", variant_class, anchor.inert.then_some("cta-inert"))}
            {onclick}
        >
            <span class="cta-button">
                if props.variant == CtaVariant::Hero {
                    <span class="cta-icon"><Star /></span>
                }
                <span class="cta-label">{"Start Now"}</span>
                <span class="cta-icon"><Arrow /></span>
            </span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install_info::{InstallInfoError, InstallationInfo};
    use futures::executor::block_on;
    use yew::ServerRenderer;

    struct Fixed(Result<InstallationInfo, InstallInfoError>);

    impl InstallInfoSource for Fixed {
        async fn fetch(&self) -> Result<InstallationInfo, InstallInfoError> {
            self.0.clone()
        }
    }

    #[derive(Properties, PartialEq)]
    struct ButtonHarnessProps {
        link: InstallLink,
        variant: CtaVariant,
    }

    #[function_component(ButtonHarness)]
    fn button_harness(props: &ButtonHarnessProps) -> Html {
        html! {
            <ContextProvider<InstallLink> context={props.link.clone()}>
                <StartNowButton variant={props.variant} />
            </ContextProvider<InstallLink>>
        }
    }

    fn render_anchor(link: InstallLink, variant: CtaVariant) -> String {
        let markup = block_on(
            ServerRenderer::<ButtonHarness>::with_props(move || ButtonHarnessProps { link, variant })
                .hydratable(false)
                .render(),
        );
        let start = markup.find("<a").expect("rendered an anchor");
        let end = start + markup[start..].find('>').expect("anchor tag closes");
        markup[start..=end].to_string()
    }

    #[test]
    fn pending_button_renders_inert() {
        let anchor = render_anchor(InstallLink::Pending, CtaVariant::Hero);
        assert!(anchor.contains(r##"href="#""##), "{anchor}");
        assert!(anchor.contains(r#"aria-disabled="true""#), "{anchor}");
        assert!(anchor.contains("cta-inert"), "{anchor}");
        assert!(!anchor.contains("target="), "{anchor}");
        assert!(!anchor.contains("rel="), "{anchor}");
    }

    #[test]
    fn unavailable_button_renders_inert() {
        let anchor = render_anchor(InstallLink::Unavailable, CtaVariant::Footer);
        assert!(anchor.contains(r##"href="#""##), "{anchor}");
        assert!(anchor.contains(r#"aria-disabled="true""#), "{anchor}");
        assert!(anchor.contains("cta-footer"), "{anchor}");
        assert!(!anchor.contains("target="), "{anchor}");
    }

    #[test]
    fn ready_button_renders_live_link() {
        let link = InstallLink::Ready("https://example.com/install".to_string());
        let anchor = render_anchor(link, CtaVariant::Hero);
        assert!(anchor.contains(r#"href="https://example.com/install""#), "{anchor}");
        assert!(anchor.contains(r#"target="_blank""#), "{anchor}");
        assert!(anchor.contains(r#"rel="noopener noreferrer""#), "{anchor}");
        assert!(!anchor.contains("aria-disabled"), "{anchor}");
        assert!(!anchor.contains("cta-inert"), "{anchor}");
    }

    #[test]
    fn pending_link_is_inert() {
        let anchor = CtaAnchor::for_link(&InstallLink::Pending);
        assert_eq!(anchor.href, "#");
        assert_eq!(anchor.target, None);
        assert!(anchor.inert);
    }

    #[test]
    fn ready_link_opens_in_new_tab() {
        let link = InstallLink::Ready("https://example.com/install".to_string());
        let anchor = CtaAnchor::for_link(&link);
        assert_eq!(anchor.href, "https://example.com/install");
        assert_eq!(anchor.target, Some("_blank"));
        assert_eq!(anchor.rel, Some("noopener noreferrer"));
        assert!(!anchor.inert);
    }

    #[test]
    fn successful_fetch_becomes_ready() {
        let source = Fixed(InstallationInfo::from_body(
            r#"{"installation_url": "https://example.com/install"}"#,
        ));
        let link = block_on(load_install_link(&source));
        assert_eq!(link, InstallLink::Ready("https://example.com/install".to_string()));
    }

    #[test]
    fn failures_leave_the_cta_inert() {
        let failures = [
            InstallInfoError::Network("connection refused".to_string()),
            InstallInfoError::Status(500),
            InstallInfoError::Decode("expected value at line 1 column 1".to_string()),
            InstallInfoError::InvalidUrl(String::new()),
        ];
        for failure in failures {
            let link = block_on(load_install_link(&Fixed(Err(failure))));
            assert_eq!(link, InstallLink::Unavailable);
            assert!(CtaAnchor::for_link(&link).inert);
        }
    }

    #[test]
    fn links_default_to_pending() {
        assert_eq!(InstallLink::default(), InstallLink::Pending);
    }
}
