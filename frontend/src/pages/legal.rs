use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::content::CONTACT_EMAIL;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

const LEGAL_STYLE: &str = r#"
.legal-content {
    min-height: 100vh;
    padding: 8rem 2rem 4rem;
    color: #fff;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.legal-content h1 {
    font-size: 2rem;
    background: linear-gradient(to right, #ffffff 40%, #0BB6C0 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 2.5rem;
}

.legal-content section {
    background: rgba(7, 61, 61, 0.2);
    border: 1px solid rgba(11, 182, 192, 0.15);
    border-radius: 12px;
    width: 100%;
    max-width: 700px;
    padding: 2rem;
    margin: 1rem auto;
    box-sizing: border-box;
}

.legal-content h2 {
    color: #0BB6C0;
    font-size: 1.4rem;
    margin: 0 0 1rem;
}

.legal-content p,
.legal-content li {
    color: #999;
    line-height: 1.6;
}

.legal-links {
    margin-top: 2rem;
    color: #999;
}

.legal-links a {
    color: #0BB6C0;
    text-decoration: none;
}
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Access"}</h2>
                <p>{"When you install the BrainlyBot GitHub App we receive:"}</p>
                <ul>
                    <li>{"The contents of the repositories you select during installation"}</li>
                    <li>{"Pull request metadata, diffs and review comments on those repositories"}</li>
                    <li>{"Your GitHub account name and installation identifier"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <ul>
                    <li>{"Indexing your code so reviews understand the whole project"}</li>
                    <li>{"Writing review comments, summaries and suggested fixes on your pull requests"}</li>
                    <li>{"Remembering review preferences you give in comment threads"}</li>
                </ul>
                <p>{"Your code is never used to train models shared with other customers."}</p>
            </section>

            <section>
                <h2>{"3. Retention"}</h2>
                <p>{"Indexed code and review history are deleted when you uninstall the app or remove a repository from the installation."}</p>
            </section>

            <section>
                <h2>{"4. Contact"}</h2>
                <p>{format!("For privacy questions or data requests, email {}.", CONTACT_EMAIL)}</p>
            </section>
            { legal_links() }
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content terms-of-service">
            <h1>{"Terms of Service"}</h1>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"These Terms govern your use of the BrainlyBot GitHub App and this website (the \"Service\"). By installing the app you agree to them."}</p>
            </section>

            <section>
                <h2>{"2. Your Repositories"}</h2>
                <p>{"You keep all rights to your code. You grant BrainlyBot the access needed to read the repositories you select and to post reviews on their pull requests."}</p>
            </section>

            <section>
                <h2>{"3. AI Reviews"}</h2>
                <ul>
                    <li>{"Reviews and suggested fixes are generated automatically and may be wrong or incomplete."}</li>
                    <li>{"You are responsible for the changes you merge, including applied suggestions."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Acceptable Use"}</h2>
                <p>{"Do not use the Service for unlawful purposes or in a way that degrades it for other users."}</p>
            </section>

            <section>
                <h2>{"5. Termination"}</h2>
                <p>{"You can stop using the Service at any time by uninstalling the GitHub App."}</p>
            </section>
            { legal_links() }
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}
