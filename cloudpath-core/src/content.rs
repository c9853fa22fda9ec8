//! Static page copy: headline, before/after comparison, backend option tabs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

/// The "before" and "after" cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub before: Card,
    pub after: Card,
}

pub const COMPARISON: Comparison = Comparison {
    before: Card {
        title: "Before: Local Storage Only",
        bullets: &[
            "Data lost when browser cleared",
            "No user accounts or login",
            "No data sharing between devices",
            "No automated workflows",
            "Limited functionality",
        ],
    },
    after: Card {
        title: "After: Cloud-Powered",
        bullets: &[
            "Permanent data storage",
            "User authentication & accounts",
            "Access from any device",
            "Automated emails & notifications",
            "Unlimited scalability",
        ],
    },
};

/// Headline and section titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCopy {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub backends_title: &'static str,
    pub backends_subtitle: &'static str,
    pub steps_title: &'static str,
    pub steps_subtitle: &'static str,
    pub cta_title: &'static str,
    pub cta_body: &'static str,
    pub cta_actions: &'static [&'static str],
}

pub const PAGE: PageCopy = PageCopy {
    headline: "From Local App to Cloud-Powered Application",
    subtitle: "Transform your single-page application from localStorage to a powerful cloud backend with authentication, database storage, and automated workflows.",
    backends_title: "Step 1: Choose Your Backend Solution",
    backends_subtitle: "Select the best backend service for your application needs",
    steps_title: "Step 2: Implementation Steps",
    steps_subtitle: "Follow each implementation step to build your cloud-powered application",
    cta_title: "Ready to Get Started?",
    cta_body: "Choose your backend solution and start building your cloud-powered application today.",
    cta_actions: &["Connect Supabase", "View Documentation"],
};

/// Suggested AI prompt with its heading, shown as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackendPrompt {
    pub title: &'static str,
    pub text: &'static str,
}

/// Body of one backend tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackendOption {
    pub id: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    /// Features listed next to the heading (Supabase only).
    pub features: &'static [&'static str],
    /// Suggested AI prompt (every tab except Supabase).
    pub prompt: Option<BackendPrompt>,
    pub highlights_title: &'static str,
    pub highlights: &'static [&'static str],
    /// Highlights render as a numbered list.
    pub ordered: bool,
}

pub static BACKENDS: [BackendOption; 4] = [
    BackendOption {
        id: "supabase",
        label: "Supabase",
        heading: "Why Choose Supabase?",
        features: &[
            "Open source PostgreSQL database",
            "Built-in authentication",
            "Real-time subscriptions",
            "Edge functions for custom logic",
        ],
        prompt: None,
        highlights_title: "Setup Steps:",
        highlights: &[
            "Click the green Supabase button (top right)",
            "Connect your Supabase project",
            "Configure authentication providers",
            "Set up your database tables",
            "Deploy your application",
        ],
        ordered: true,
    },
    BackendOption {
        id: "firebase",
        label: "Firebase",
        heading: "Firebase Integration",
        features: &[],
        prompt: Some(BackendPrompt {
            title: "AI Prompt for Firebase Setup:",
            text: "Add Firebase authentication to my app with email/password login. Create a login form, registration form, and user dashboard. Include password reset functionality.",
        }),
        highlights_title: "What You Get:",
        highlights: &[
            "Google's scalable infrastructure",
            "Multiple auth providers (Google, Facebook, etc.)",
            "Real-time database",
            "Cloud functions",
            "Analytics and crash reporting",
        ],
        ordered: false,
    },
    BackendOption {
        id: "auth0",
        label: "Auth0",
        heading: "Auth0 Integration",
        features: &[],
        prompt: Some(BackendPrompt {
            title: "AI Prompt for Auth0:",
            text: "Integrate Auth0 authentication into my React app. Set up login/logout functionality with user profile management. Add role-based access control.",
        }),
        highlights_title: "Enterprise Features:",
        highlights: &[
            "Enterprise SSO (SAML, OIDC)",
            "Multi-factor authentication",
            "Advanced security features",
            "User management dashboard",
            "Compliance ready",
        ],
        ordered: false,
    },
    BackendOption {
        id: "custom",
        label: "Custom API",
        heading: "Custom Company API",
        features: &[],
        prompt: Some(BackendPrompt {
            title: "AI Prompt for Custom API:",
            text: "Connect my app to our company's existing API. Create login forms that authenticate against our internal system. Handle JWT tokens and user sessions.",
        }),
        highlights_title: "When to Choose This:",
        highlights: &[
            "Existing company infrastructure",
            "Specific compliance requirements",
            "Custom business logic",
            "Data sovereignty concerns",
            "Legacy system integration",
        ],
        ordered: false,
    },
];

/// Selected backend tab. Tabs wrap around like a tab strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackendTab(usize);

impl BackendTab {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn by_id(id: &str) -> Option<Self> {
        BACKENDS.iter().position(|b| b.id == id).map(Self)
    }

    pub fn option(self) -> &'static BackendOption {
        &BACKENDS[self.0]
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1) % BACKENDS.len())
    }

    pub fn prev(self) -> Self {
        Self((self.0 + BACKENDS.len() - 1) % BACKENDS.len())
    }
}
