use yew::prelude::*;
use crate::components::effects::gradients::BackgroundGradients;
use crate::components::effects::text::Text;
use crate::components::icons::Rocket;
use crate::components::install_link::{CtaVariant, StartNowButton};
use crate::content::HOME_ID;
use crate::motion::{use_reveal_on_mount, Motion, Reveal};

// Opacity of each light column behind the hero, left to right.
const LIGHT_COLUMNS: [(&str, f64); 11] = [
    ("153, 100, 100", 0.04),
    ("153, 100, 100", 0.04),
    ("153, 100, 100", 0.04),
    ("153, 100, 100", 0.04),
    ("153, 153, 153", 0.02),
    ("153, 153, 153", 0.06),
    ("153, 153, 153", 0.02),
    ("153, 100, 100", 0.04),
    ("153, 100, 100", 0.04),
    ("153, 100, 100", 0.04),
    ("153, 100, 100", 0.04),
];

/// The hero: headline, tagline and the first "Start Now" button. Animates on mount.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let revealed = use_reveal_on_mount();

    html! {
        <div class="hero" id={HOME_ID}>
            <BackgroundGradients {revealed} />
            <div class="hero-inner">
                <Reveal class="hero-badge-wrap" {revealed} motion={Motion::fade(0.8, 0.3).offset(0.0, -30.0)}>
                    <div class="hero-badge">
                        <Text />
                    </div>
                </Reveal>
                <Reveal class="hero-headline" {revealed} motion={Motion::fade(0.9, 0.5).offset(0.0, 40.0)}>
                    <h1><span class="text-fade-white">{"Transform How You"}</span></h1>
                    <div class="hero-headline-row">
                        <span class="headline-word muted">{"Build"}</span>
                        <Rocket />
                        <span class="headline-word">{"Software"}</span>
                    </div>
                </Reveal>
                <Reveal class="hero-tagline" {revealed} motion={Motion::fade(0.8, 0.7).offset(0.0, 30.0)}>
                    <p>
                        {"Seamlessly explore, debug, and empower your development"}
                        <br />
                        {"with AI that understands your entire project."}
                    </p>
                </Reveal>
                <Reveal class="hero-cta-row" {revealed} motion={Motion::fade(0.8, 0.9).offset(0.0, 40.0)}>
                    <div class="hero-rule hero-rule-left" style={Motion::draw_from("right", 1.0, 1.1).style(revealed)}></div>
                    <Reveal class="cta-frame" {revealed} motion={Motion::fade(0.6, 1.0).grow_from(0.8)}>
                        <StartNowButton variant={CtaVariant::Hero} />
                    </Reveal>
                    <div class="hero-rule hero-rule-right" style={Motion::draw_from("left", 1.0, 1.1).style(revealed)}></div>
                </Reveal>
            </div>
            <Reveal class="hero-columns" {revealed} motion={Motion::fade(1.2, 1.3).offset(0.0, 100.0)}>
                { for LIGHT_COLUMNS.iter().map(|(rgb, alpha)| html! {
                    <div class="light-column" style={format!(
                        "background: linear-gradient(to bottom, rgba({}, {}) 20%, rgba(0, 0, 0, 0.01) 100%);",
                        rgb, alpha
                    )}></div>
                }) }
            </Reveal>
            <style>
                {r#"
                .hero {
                    position: relative;
                    width: 100%;
                    min-height: 100vh;
                    overflow: hidden;
                }

                .hero-inner {
                    position: relative;
                    z-index: 10;
                    padding: 9rem 1rem 0;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                }

                .hero-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    margin-bottom: 2rem;
                }

                .badge-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #0BB6C0;
                    box-shadow: 0 0 8px #0BB6C0;
                }

                .badge-text {
                    color: #cccccc;
                    font-size: 0.9rem;
                }

                .hero-headline {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .hero-headline h1,
                .headline-word {
                    font-size: clamp(1.9rem, 6vw, 3.75rem);
                    font-weight: 400;
                    margin: 0;
                }

                .text-fade-white {
                    background: linear-gradient(to right, #ffffff 50%, #999999 75%);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-headline-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                .headline-word {
                    color: #ffffff;
                }

                .headline-word.muted {
                    color: #999999;
                }

                .hero-tagline p {
                    color: #ffffff;
                    font-size: 1.125rem;
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 0 3rem;
                }

                .hero-cta-row {
                    position: relative;
                    margin-top: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    max-width: 56rem;
                }

                .hero-rule {
                    position: absolute;
                    top: 50%;
                    width: 30%;
                    height: 1px;
                }

                .hero-rule-left {
                    left: 0;
                    background: linear-gradient(to right, transparent, #ffffff);
                }

                .hero-rule-right {
                    right: 0;
                    background: linear-gradient(to left, transparent, #ffffff);
                }

                .cta-frame {
                    border-radius: 1.5rem;
                    outline: 8px solid rgba(255, 255, 255, 0.2);
                    box-shadow: inset 0.22px 0.36px 2.9px 0 rgba(3, 78, 78, 1);
                }

                .hero-columns {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    align-items: flex-end;
                    gap: 40px;
                    z-index: 0;
                }

                .light-column {
                    width: 4.5rem;
                    height: 1000px;
                    backdrop-filter: blur(65px);
                }

                @media (max-width: 768px) {
                    .hero-rule-left { left: -3.5rem; }
                    .hero-rule-right { right: -3.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
