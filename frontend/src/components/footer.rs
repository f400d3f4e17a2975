use yew::prelude::*;
use yew_router::prelude::*;
use chrono::{Datelike, Utc};
use crate::Route;
use crate::components::icons::{Github, LinkedIn, X};
use crate::components::install_link::{CtaVariant, StartNowButton};
use crate::content::{Social, CONTACT_EMAIL, CONTACT_ID, LOGO, QUICK_LINKS, SOCIAL_LINKS};

fn social_icon(kind: Social) -> Html {
    match kind {
        Social::LinkedIn => html! { <LinkedIn /> },
        Social::Github => html! { <Github /> },
        Social::X => html! { <X /> },
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-shell">
                <div class="footer-border"></div>
                <div class="footer-body">
                    <div class="footer-grid">
                        <div class="footer-brand">
                            <div class="footer-logo">
                                <img src={LOGO.src} alt={LOGO.alt} width={LOGO.width.to_string()} height={LOGO.height.to_string()} />
                            </div>
                            <h2>{"Ready to Build Smarter?"}</h2>
                            <div class="footer-cta cta-frame">
                                <StartNowButton variant={CtaVariant::Footer} />
                            </div>
                            <div class="footer-socials">
                                <p class="footer-muted">{"Our Social Handles"}</p>
                                <div class="social-row">
                                    { for SOCIAL_LINKS.iter().map(|link| html! {
                                        <a href={link.href} target="_blank" rel="noopener noreferrer" class="social-link" title={link.label}>
                                            { social_icon(link.kind) }
                                        </a>
                                    }) }
                                </div>
                            </div>
                            <div class="footer-copyright">
                                <span class="footer-muted">{format!("@{} ", year)}</span>
                                <span>{"All Rights Reserved"}</span>
                            </div>
                        </div>
                        <div class="footer-columns">
                            <div class="footer-column">
                                <h3>{"Quick Links"}</h3>
                                <ul>
                                    { for QUICK_LINKS.iter().map(|(label, anchor)| html! {
                                        <li><a href={format!("#{}", anchor)}>{*label}</a></li>
                                    }) }
                                </ul>
                            </div>
                            <div class="footer-column">
                                <div class="footer-contact" id={CONTACT_ID}>
                                    <h3>{"Contact"}</h3>
                                    <p class="footer-muted">
                                        {"Email: "}
                                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                                    </p>
                                </div>
                                <h3>{"Legal"}</h3>
                                <ul>
                                    <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                                    <li><Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>></li>
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    width: 100%;
                }

                .footer-shell {
                    position: relative;
                    margin: 0 -1rem;
                    padding: 0.25rem 0;
                    border-radius: 30px;
                    background: linear-gradient(to bottom, rgba(7, 61, 61, 0.2), rgba(0, 0, 0, 0.2));
                }

                .footer-border {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    border: 1px solid #0bb6c0;
                    border-radius: 30px;
                    mask-image: linear-gradient(to bottom, black 0%, black 70%, transparent 100%);
                    -webkit-mask-image: linear-gradient(to bottom, black 0%, black 70%, transparent 100%);
                }

                .footer-body {
                    margin: 2rem;
                    padding: 3rem 3rem 2rem;
                    border-radius: 30px;
                    background: rgba(29, 55, 55, 0.1);
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }

                .footer-logo img {
                    width: 15rem;
                    height: auto;
                    object-fit: contain;
                }

                .footer-brand h2 {
                    color: #ffffff;
                    font-size: 1.875rem;
                    font-weight: 400;
                    margin: 1rem 0 2.5rem;
                }

                .footer-cta {
                    display: inline-block;
                    border-radius: 2rem;
                }

                .footer-socials {
                    padding-top: 4.5rem;
                }

                .footer-muted {
                    color: #999999;
                    font-size: 1.125rem;
                }

                .social-row {
                    display: flex;
                    gap: 0.75rem;
                }

                .social-link {
                    width: 3.5rem;
                    height: 3.5rem;
                    transition: transform 0.3s ease;
                }

                .social-link:hover {
                    transform: scale(1.1);
                }

                .footer-copyright {
                    margin-top: 2rem;
                    color: #ffffff;
                }

                .footer-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .footer-column h3 {
                    color: #ffffff;
                    font-size: 1.875rem;
                    font-weight: 500;
                    margin: 0 0 2rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .footer-column li {
                    margin-bottom: 2rem;
                    font-size: 1.25rem;
                }

                .footer-column a {
                    color: #999999;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-column a:hover {
                    color: #ffffff;
                }

                .footer-contact {
                    padding-bottom: 3.75rem;
                }

                @media (max-width: 1024px) {
                    .footer-grid { grid-template-columns: 1fr; gap: 2rem; }
                    .footer-body { margin: 1rem; padding: 1.5rem; }
                }

                @media (max-width: 768px) {
                    .footer-columns { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
