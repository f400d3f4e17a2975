use yew::prelude::*;
use crate::components::effects::design::{LeftDesign, RightDesign};
use crate::components::effects::gradients::Eclipse;
use crate::components::effects::shades::{LeftShade, RightShade};
use crate::content::PRODUCT_SHOT;
use crate::motion::{use_reveal, Motion, Reveal, SECTION_ROOT_MARGIN};

#[function_component(ImageSection)]
pub fn image_section() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), SECTION_ROOT_MARGIN);

    html! {
        <div ref={section} class="image-section">
            <div class="image-stage">
                <div class="side-design side-design-left">
                    <LeftDesign />
                </div>
                <Reveal class="side-shade side-shade-left" {revealed} motion={Motion::fade(1.2, 0.3).offset(-150.0, 0.0).settle_at(0.9)}>
                    <LeftShade />
                </Reveal>
                <div class="side-design side-design-right">
                    <RightDesign />
                </div>
                <Reveal class="side-shade side-shade-right" {revealed} motion={Motion::fade(1.2, 0.3).offset(150.0, 0.0).settle_at(0.9)}>
                    <RightShade />
                </Reveal>
                <div class="screenshot-frame">
                    <div class="screenshot-top-fade"></div>
                    <div class="screenshot-bottom-fade"></div>
                    <div class="screenshot-glow-wrap">
                        <div class="screenshot-glow"></div>
                        <Eclipse />
                    </div>
                    <div class="screenshot">
                        <img
                            src={PRODUCT_SHOT.src}
                            alt={PRODUCT_SHOT.alt}
                            width={PRODUCT_SHOT.width.to_string()}
                            height={PRODUCT_SHOT.height.to_string()}
                            loading="lazy"
                        />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .image-section {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    padding: 4rem 0;
                }

                .image-stage {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    max-width: 80rem;
                }

                .side-design {
                    position: absolute;
                    top: 50%;
                    z-index: 10;
                    transform: translateY(-50%);
                }

                .side-design-left { left: -7.5rem; }
                .side-design-right { right: -7.5rem; }

                .side-shade {
                    position: absolute;
                    bottom: -20rem;
                    z-index: 35;
                }

                .side-shade-left { left: -10rem; }
                .side-shade-right { right: -10rem; }

                .screenshot-frame {
                    position: relative;
                    z-index: 20;
                    width: 100%;
                    max-width: 56rem;
                    padding: 0 0.5rem;
                    background: linear-gradient(to left, rgba(153, 153, 153, 0.08) 80%, #000000 90%, rgba(153, 153, 153, 0.08) 100%);
                    border-radius: 38.66px 38.66px 77.32px 77.32px;
                }

                .screenshot-top-fade {
                    position: absolute;
                    inset: 0;
                    z-index: 20;
                    pointer-events: none;
                    border-radius: 38.66px 38.66px 0 0;
                    background: linear-gradient(to bottom, rgba(153, 153, 153, 0.08) 80%, rgba(0, 0, 0, 1) 80%);
                }

                .screenshot-bottom-fade {
                    position: absolute;
                    inset: 0;
                    z-index: 40;
                    pointer-events: none;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0) 0%, rgba(0, 0, 0, 0) 60%, rgba(0, 0, 0, 0.9) 90%, rgba(0, 0, 0, 1) 100%);
                }

                .screenshot-glow-wrap {
                    position: relative;
                }

                .screenshot-glow {
                    position: relative;
                    z-index: 20;
                    width: 100%;
                    height: 6.77px;
                    filter: blur(4.83px);
                    background: linear-gradient(to right, rgba(0, 32, 29, 0) 10%, rgba(2, 242, 242, 1) 30%, rgba(2, 242, 242, 1) 70%, rgba(0, 32, 29, 0) 90%);
                }

                .eclipse {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transform: translateY(2.5rem);
                    pointer-events: none;
                }

                .screenshot {
                    position: relative;
                    z-index: 30;
                }

                .screenshot img {
                    width: 100%;
                    height: auto;
                }

                @media (max-width: 1024px) {
                    .side-design { display: none; }
                    .side-shade svg { transform: scale(0.4); }
                }
                "#}
            </style>
        </div>
    }
}
