use yew::prelude::*;

// Circuit traces framing the product screenshot. Right side is the mirror image.
const TRACES: &[&str] = &[
    "M300 40H190L150 80H40",
    "M300 110H220L180 150H80",
    "M300 180H120",
    "M300 250H220L180 210H60",
    "M300 320H190L150 280H20",
];

const NODES: &[(f64, f64)] = &[(40.0, 80.0), (80.0, 150.0), (120.0, 180.0), (60.0, 210.0), (20.0, 280.0)];

fn circuit(gradient_id: &str) -> Html {
    html! {
        <>
            { for TRACES.iter().map(|d| html! {
                <path d={*d} stroke={format!("url(#{})", gradient_id)} stroke-width="1.5" />
            }) }
            { for NODES.iter().map(|(cx, cy)| html! {
                <circle cx={cx.to_string()} cy={cy.to_string()} r="4" fill="#0BB6C0" fill-opacity="0.8" />
            }) }
            <defs>
                <linearGradient id={gradient_id.to_string()} x1="0" y1="0" x2="300" y2="0" gradientUnits="userSpaceOnUse">
                    <stop stop-color="#0BB6C0" />
                    <stop offset="1" stop-color="#0BB6C0" stop-opacity="0" />
                </linearGradient>
            </defs>
        </>
    }
}

#[function_component(LeftDesign)]
pub fn left_design() -> Html {
    html! {
        <svg width="300" height="360" viewBox="0 0 300 360" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            { circuit("trace_fade_left") }
        </svg>
    }
}

#[function_component(RightDesign)]
pub fn right_design() -> Html {
    html! {
        <svg width="300" height="360" viewBox="0 0 300 360" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <g transform="scale(-1,1) translate(-300,0)">
                { circuit("trace_fade_right") }
            </g>
        </svg>
    }
}

/// Small stacked-lines glyph on the "Full-Project Understanding" card.
#[function_component(LineDesign)]
pub fn line_design() -> Html {
    html! {
        <svg width="160" height="110" viewBox="0 0 160 110" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <rect x="1" y="1" width="158" height="108" rx="18" fill="#041C1C" stroke="#0BB6C0" stroke-opacity="0.3" />
            <path d="M24 30H112" stroke="#0BB6C0" stroke-width="6" stroke-linecap="round" />
            <path d="M40 48H136" stroke="#58B4B4" stroke-width="6" stroke-linecap="round" stroke-opacity="0.8" />
            <path d="M40 66H100" stroke="#58B4B4" stroke-width="6" stroke-linecap="round" stroke-opacity="0.6" />
            <path d="M24 84H80" stroke="#0BB6C0" stroke-width="6" stroke-linecap="round" stroke-opacity="0.4" />
        </svg>
    }
}

/// Dashed connector running between the four "How it works" steps.
#[function_component(LineEffect)]
pub fn line_effect() -> Html {
    html! {
        <svg width="800" height="620" viewBox="0 0 800 620" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <path d="M200 20V150C200 180 220 200 250 200H550C580 200 600 220 600 250V600" stroke="url(#connector_fade)" stroke-width="2" stroke-dasharray="8 10" />
            <circle cx="200" cy="20" r="6" fill="#0BB6C0" />
            <circle cx="600" cy="600" r="6" fill="#0BB6C0" />
            <defs>
                <linearGradient id="connector_fade" x1="200" y1="20" x2="600" y2="600" gradientUnits="userSpaceOnUse">
                    <stop stop-color="#0BB6C0" />
                    <stop offset="0.5" stop-color="#58B4B4" stop-opacity="0.5" />
                    <stop offset="1" stop-color="#0BB6C0" />
                </linearGradient>
            </defs>
        </svg>
    }
}
