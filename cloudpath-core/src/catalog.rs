//! Step and use-case catalog — the single canonical table of walkthrough content.
//!
//! The catalog is authored once as literal data and built into process-wide
//! read-only state on first access. Every step carries explicit display
//! fields (`category`, `execution_site`) so nothing downstream has to sniff
//! ids or location strings.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// Accent color of a use case and all of its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Purple,
    Blue,
    Green,
}

impl ColorTag {
    pub fn label(self) -> &'static str {
        match self {
            ColorTag::Purple => "purple",
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
        }
    }
}

/// Delivery channel for notification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyChannel {
    Email,
    Chat,
}

/// What kind of work a step illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepCategory {
    Form,
    Auth,
    Notification(NotifyChannel),
    Storage,
    Confirmation,
}

/// Where a step conceptually runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionSite {
    Client,
    Server,
}

/// One illustrated unit of work in a use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    /// Free text naming the execution site, e.g. "Server (Firebase Auth)".
    pub location: &'static str,
    /// Instructional AI prompt shown with the step.
    pub prompt: &'static str,
    pub description: &'static str,
    pub use_case_id: &'static str,
    pub color_tag: ColorTag,
    pub category: StepCategory,
    pub execution_site: ExecutionSite,
}

/// An ordered group of steps telling one end-to-end workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color_tag: ColorTag,
    /// Flow order of the use case.
    pub ordered_step_ids: Vec<&'static str>,
}

/// Integrity violations found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate step id: {0}")]
    DuplicateStep(String),

    #[error("duplicate use case id: {0}")]
    DuplicateUseCase(String),

    #[error("step {step_id} references unknown use case {use_case_id}")]
    DanglingUseCase { step_id: String, use_case_id: String },

    #[error("use case {use_case_id} lists unknown step {step_id}")]
    UnknownStep { use_case_id: String, step_id: String },

    #[error("use case {use_case_id} lists step {step_id} owned by {owner}")]
    ForeignStep {
        use_case_id: String,
        step_id: String,
        owner: String,
    },

    #[error("step {0} is not listed in exactly one use case")]
    UnorderedStep(String),

    #[error("use case {0} has no steps")]
    EmptyUseCase(String),
}

/// The complete, immutable walkthrough catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    use_cases: Vec<UseCase>,
    steps: Vec<Step>,
}

static GLOBAL: Lazy<Catalog> = Lazy::new(Catalog::builtin);

impl Catalog {
    /// Assemble a catalog from explicit tables. Call [`Catalog::validate`]
    /// before navigating over a hand-built catalog.
    pub fn new(use_cases: Vec<UseCase>, steps: Vec<Step>) -> Self {
        Self { use_cases, steps }
    }

    /// The process-wide built-in catalog.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    pub fn use_cases(&self) -> &[UseCase] {
        &self.use_cases
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn use_case(&self, index: usize) -> Option<&UseCase> {
        self.use_cases.get(index)
    }

    pub fn use_case_by_id(&self, id: &str) -> Option<&UseCase> {
        self.use_cases.iter().find(|u| u.id == id)
    }

    /// Position of a use case in catalog order.
    pub fn use_case_index(&self, id: &str) -> Option<usize> {
        self.use_cases.iter().position(|u| u.id == id)
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Steps of a use case in flow order. Empty for an out-of-range index.
    pub fn steps_of(&self, use_case_index: usize) -> Vec<&Step> {
        self.use_case(use_case_index)
            .map(|u| {
                u.ordered_step_ids
                    .iter()
                    .filter_map(|id| self.step(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of steps in a use case.
    pub fn step_count(&self, use_case_index: usize) -> usize {
        self.use_case(use_case_index)
            .map_or(0, |u| u.ordered_step_ids.len())
    }

    pub fn total_steps(&self) -> usize {
        self.use_cases.iter().map(|u| u.ordered_step_ids.len()).sum()
    }

    /// Check referential integrity of the two tables.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut step_ids = HashSet::new();
        for step in &self.steps {
            if !step_ids.insert(step.id) {
                return Err(CatalogError::DuplicateStep(step.id.into()));
            }
        }

        let mut use_case_ids = HashSet::new();
        for use_case in &self.use_cases {
            if !use_case_ids.insert(use_case.id) {
                return Err(CatalogError::DuplicateUseCase(use_case.id.into()));
            }
        }

        for step in &self.steps {
            if !use_case_ids.contains(step.use_case_id) {
                return Err(CatalogError::DanglingUseCase {
                    step_id: step.id.into(),
                    use_case_id: step.use_case_id.into(),
                });
            }
        }

        let mut listed: HashSet<&str> = HashSet::new();
        for use_case in &self.use_cases {
            if use_case.ordered_step_ids.is_empty() {
                return Err(CatalogError::EmptyUseCase(use_case.id.into()));
            }
            for &step_id in &use_case.ordered_step_ids {
                let step = self.step(step_id).ok_or_else(|| CatalogError::UnknownStep {
                    use_case_id: use_case.id.into(),
                    step_id: step_id.into(),
                })?;
                if step.use_case_id != use_case.id {
                    return Err(CatalogError::ForeignStep {
                        use_case_id: use_case.id.into(),
                        step_id: step_id.into(),
                        owner: step.use_case_id.into(),
                    });
                }
                if !listed.insert(step_id) {
                    return Err(CatalogError::UnorderedStep(step_id.into()));
                }
            }
        }

        if let Some(step) = self.steps.iter().find(|s| !listed.contains(s.id)) {
            return Err(CatalogError::UnorderedStep(step.id.into()));
        }

        Ok(())
    }

    /// The built-in registration / contact / workflow walkthrough.
    pub fn builtin() -> Self {
        use ExecutionSite::{Client, Server};
        use NotifyChannel::{Chat, Email};

        let use_cases = vec![
            UseCase {
                id: "registration",
                title: "User Registration & Onboarding",
                description: "Sign users up, create their account and profile, and welcome them by email.",
                color_tag: ColorTag::Purple,
                ordered_step_ids: vec!["reg-form", "reg-user", "reg-email", "reg-profile"],
            },
            UseCase {
                id: "contact",
                title: "Simple Contact Form",
                description: "Accept messages from visitors and email both the sender and the admin.",
                color_tag: ColorTag::Blue,
                ordered_step_ids: vec!["contact-form", "contact-email"],
            },
            UseCase {
                id: "workflow",
                title: "Complete Workflow Automation",
                description: "Capture leads, store them, alert the sales team and follow up automatically.",
                color_tag: ColorTag::Green,
                ordered_step_ids: vec![
                    "workflow-form",
                    "workflow-db",
                    "workflow-slack",
                    "workflow-email",
                ],
            },
        ];

        let steps = vec![
            Step {
                id: "reg-form",
                title: "Registration Form",
                location: "Client (Public Website)",
                prompt: "Create a user registration form with email, password, and profile fields (name, company). Add form validation and handle submission to Firebase Auth.",
                description: "This runs on your public website where users can access it without logging in.",
                use_case_id: "registration",
                color_tag: ColorTag::Purple,
                category: StepCategory::Form,
                execution_site: Client,
            },
            Step {
                id: "reg-user",
                title: "Create Firebase User",
                location: "Server (Firebase Auth)",
                prompt: "Set up Firebase Authentication to create user accounts. Configure email verification and handle authentication errors gracefully.",
                description: "Firebase automatically handles user creation and authentication on their secure servers.",
                use_case_id: "registration",
                color_tag: ColorTag::Purple,
                category: StepCategory::Auth,
                execution_site: Server,
            },
            Step {
                id: "reg-email",
                title: "Send Welcome Email",
                location: "Server (Supabase Edge Function)",
                prompt: "Create a Supabase Edge Function that triggers after user registration to send a welcome email using a service like SendGrid or Resend.",
                description: "This runs on Supabase servers and is triggered automatically when a new user registers.",
                use_case_id: "registration",
                color_tag: ColorTag::Purple,
                category: StepCategory::Notification(Email),
                execution_site: Server,
            },
            Step {
                id: "reg-profile",
                title: "Create User Profile",
                location: "Server (Firestore Database)",
                prompt: "Create a Firestore document for the user profile with their additional information (name, company, registration date, etc.).",
                description: "User data is stored securely in Firestore database on Google's servers.",
                use_case_id: "registration",
                color_tag: ColorTag::Purple,
                category: StepCategory::Confirmation,
                execution_site: Server,
            },
            Step {
                id: "contact-form",
                title: "Contact Form",
                location: "Client (Public Website)",
                prompt: "Create a contact form with fields for name, email, and message. Add form validation and handle submission.",
                description: "This form is publicly accessible on your website without requiring user login.",
                use_case_id: "contact",
                color_tag: ColorTag::Blue,
                category: StepCategory::Form,
                execution_site: Client,
            },
            Step {
                id: "contact-email",
                title: "Send Contact Email",
                location: "Server (Supabase Edge Function)",
                prompt: "Create a Supabase Edge Function that receives form data and sends emails to both the user (confirmation) and admin (notification).",
                description: "The email sending happens on Supabase servers to keep API keys secure.",
                use_case_id: "contact",
                color_tag: ColorTag::Blue,
                category: StepCategory::Notification(Email),
                execution_site: Server,
            },
            Step {
                id: "workflow-form",
                title: "Lead Capture Form",
                location: "Client (Public Website)",
                prompt: "Create a lead capture form with fields for name, email, company, and interest. Add validation and submission handling.",
                description: "This form collects leads from your public website visitors.",
                use_case_id: "workflow",
                color_tag: ColorTag::Green,
                category: StepCategory::Form,
                execution_site: Client,
            },
            Step {
                id: "workflow-db",
                title: "Store in Database",
                location: "Server (Supabase Database)",
                prompt: "Create a Supabase table for leads and insert form data. Set up RLS policies for security.",
                description: "Lead data is securely stored in Supabase PostgreSQL database.",
                use_case_id: "workflow",
                color_tag: ColorTag::Green,
                category: StepCategory::Storage,
                execution_site: Server,
            },
            Step {
                id: "workflow-slack",
                title: "Slack Notification",
                location: "Server (Supabase Edge Function)",
                prompt: "Create an Edge Function that sends a Slack webhook notification to your sales team when a new lead is captured.",
                description: "Slack notifications are sent from Supabase servers using secure webhook URLs.",
                use_case_id: "workflow",
                color_tag: ColorTag::Green,
                category: StepCategory::Notification(Chat),
                execution_site: Server,
            },
            Step {
                id: "workflow-email",
                title: "Welcome Email",
                location: "Server (Supabase Edge Function)",
                prompt: "Set up an automated email sequence that sends a welcome email to new leads with relevant information.",
                description: "Welcome emails are sent automatically from Supabase servers.",
                use_case_id: "workflow",
                color_tag: ColorTag::Green,
                category: StepCategory::Notification(Email),
                execution_site: Server,
            },
        ];

        Self::new(use_cases, steps)
    }
}
