//! Copy, images and links rendered on the landing page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
    pub image: Option<Image>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Social {
    LinkedIn,
    Github,
    X,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub kind: Social,
    pub label: &'static str,
    pub href: &'static str,
}

pub const HOME_ID: &str = "home";
pub const FEATURES_ID: &str = "features";
pub const HOW_IT_WORKS_ID: &str = "how-it-works";
pub const FAQ_ID: &str = "faq";
pub const CONTACT_ID: &str = "contact";

pub const LOGO: Image = Image { src: "/assets/Logo.png", alt: "Brainly Logo", width: 240, height: 120 };

pub const PRODUCT_SHOT: Image = Image { src: "/assets/Image.png", alt: "Image", width: 1000, height: 100 };

pub const ARCHITECTURE_CARD: Card = Card {
    title: "Architecture Insights",
    body: "Instantly visualize and understand your project's structure. Get high-level overviews, dependency graphs, and clear explanations of how everything fits together.",
    image: Some(Image { src: "/assets/Architecture.png", alt: "Architecture Diagram", width: 300, height: 200 }),
};

// The first card draws its own glyph instead of an image.
pub const FEATURE_CARDS: [Card; 3] = [
    Card {
        title: "Full-Project Understanding",
        body: "Install and let our AI understand your entire codebase and every file, dependency, and relationship.",
        image: None,
    },
    Card {
        title: "Context-Aware Code Generation",
        body: "Reviews your code changes and get suggestions with full awareness of your project's context.",
        image: Some(Image { src: "/assets/Brain.png", alt: "AI Brain", width: 150, height: 150 }),
    },
    Card {
        title: "Cross-File Debugging",
        body: "Debug complex issues that span multiple files and modules. Our AI traces bugs and logic across your whole project, saving you hours of manual searching.",
        image: Some(Image { src: "/assets/Spider.png", alt: "Debug Spider", width: 200, height: 200 }),
    },
];

pub const HOW_IT_WORKS_EYE: Image = Image { src: "/assets/Eye.png", alt: "Eye", width: 60, height: 30 };

pub const HOW_IT_WORKS_STEPS: [Card; 4] = [
    Card {
        title: "Connect Your Repository",
        body: "Link your GitHub repository in seconds. BrainlyBot automatically monitors pull requests and begins analyzing code changes the moment a PR is created or updated.",
        image: Some(Image { src: "/assets/Codebase.png", alt: "Codebase", width: 300, height: 100 }),
    },
    Card {
        title: "Automated Code Review",
        body: "Receive comprehensive code reviews within minutes of creating a pull request. Get context-aware feedback, security implications, suggestions across your entire codebase.",
        image: Some(Image { src: "/assets/Structure.png", alt: "Structure", width: 300, height: 100 }),
    },
    Card {
        title: "One-Click Fixes & Insights",
        body: "Apply suggested improvements directly with committable code fixes. Get AI-generated PR summaries, sequence diagrams showing architectural impact, and security analysis.",
        image: Some(Image { src: "/assets/Context.png", alt: "Context", width: 300, height: 100 }),
    },
    Card {
        title: "Chat, Learn, and Refine",
        body: "Interact directly in PR comments. Ask questions about changes, provide feedback on review and watch it learn your team's preferences. Every interaction improves future reviews across your repositories.",
        image: Some(Image { src: "/assets/Iterate.png", alt: "Iterate", width: 300, height: 100 }),
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I start using BrainlyBot?",
        answer: "Click \"Start Now\" and install the BrainlyBot GitHub App on the repositories you want reviewed. The next pull request you open gets a review automatically.",
    },
    FaqEntry {
        question: "What does a review include?",
        answer: "A summary of the change, inline comments on risky or unclear code, security notes and committable suggestions. Reviews are refreshed when you push new commits to the pull request.",
    },
    FaqEntry {
        question: "Does BrainlyBot understand code outside the diff?",
        answer: "Yes. The repository is indexed when the app is installed, so reviews take callers, shared types and related modules into account instead of looking at changed lines in isolation.",
    },
    FaqEntry {
        question: "Can I talk to the reviewer?",
        answer: "Reply to any review comment on GitHub. BrainlyBot answers in the thread and remembers the preferences you give it for future reviews.",
    },
    FaqEntry {
        question: "Which repositories does it get access to?",
        answer: "Only the repositories you select while installing the GitHub App. You can change the selection or uninstall the app from your GitHub settings at any time.",
    },
];

pub const QUICK_LINKS: &[(&str, &str)] = &[
    ("Home", HOME_ID),
    ("Features", FEATURES_ID),
    ("How It Works", HOW_IT_WORKS_ID),
    ("FAQ", FAQ_ID),
    ("Contact", CONTACT_ID),
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { kind: Social::LinkedIn, label: "LinkedIn", href: "https://linkedin.com/in/krishna525" },
    SocialLink { kind: Social::Github, label: "GitHub", href: "https://github.com/kr1shna-exe/codeboss" },
    SocialLink { kind: Social::X, label: "X", href: "https://x.com/KrishXCodes" },
];

pub const CONTACT_EMAIL: &str = "support@brainlybot.dev";

#[cfg(test)]
mod tests {
    use super::*;

    fn all_images() -> Vec<Image> {
        let mut images = vec![LOGO, PRODUCT_SHOT, HOW_IT_WORKS_EYE];
        images.extend(ARCHITECTURE_CARD.image);
        images.extend(FEATURE_CARDS.iter().filter_map(|card| card.image));
        images.extend(HOW_IT_WORKS_STEPS.iter().filter_map(|card| card.image));
        images
    }

    #[test]
    fn every_image_has_alt_text_and_asset_path() {
        for image in all_images() {
            assert!(!image.alt.trim().is_empty(), "{} has no alt text", image.src);
            assert!(image.src.starts_with("/assets/"), "{}", image.src);
        }
    }

    #[test]
    fn cards_have_copy() {
        let cards = std::iter::once(&ARCHITECTURE_CARD)
            .chain(FEATURE_CARDS.iter())
            .chain(HOW_IT_WORKS_STEPS.iter());
        for card in cards {
            assert!(!card.title.is_empty());
            assert!(card.body.len() > 40, "{} is missing body copy", card.title);
        }
    }

    #[test]
    fn quick_links_point_at_page_sections() {
        let ids = [HOME_ID, FEATURES_ID, HOW_IT_WORKS_ID, FAQ_ID, CONTACT_ID];
        assert_eq!(QUICK_LINKS.len(), ids.len());
        for (_, anchor) in QUICK_LINKS {
            assert!(ids.contains(anchor));
        }
    }

    #[test]
    fn social_links_are_absolute_https() {
        for link in SOCIAL_LINKS {
            assert!(link.href.starts_with("https://"), "{}", link.label);
        }
    }

    #[test]
    fn faq_questions_are_unique() {
        for (i, entry) in FAQ_ENTRIES.iter().enumerate() {
            assert!(entry.question.ends_with('?'));
            assert!(FAQ_ENTRIES[i + 1..].iter().all(|other| other.question != entry.question));
        }
    }
}
