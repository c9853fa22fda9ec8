//! Display attributes derived from a step's explicit fields.

use serde::Serialize;

use crate::catalog::{Catalog, ColorTag, ExecutionSite, NotifyChannel, Step, StepCategory};
use crate::navigator::NavError;

/// Icon category shown on the step card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepIcon {
    People,
    Database,
    Mail,
    Message,
    Check,
}

impl StepIcon {
    /// Terminal-friendly glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            StepIcon::People => "👥",
            StepIcon::Database => "🗄",
            StepIcon::Mail => "✉",
            StepIcon::Message => "💬",
            StepIcon::Check => "✔",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StepIcon::People => "people",
            StepIcon::Database => "database",
            StepIcon::Mail => "mail",
            StepIcon::Message => "message",
            StepIcon::Check => "check",
        }
    }
}

/// Badge styling bucket for the location text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationBucket {
    ClientFrontend,
    Server,
}

impl LocationBucket {
    pub fn label(self) -> &'static str {
        match self {
            LocationBucket::ClientFrontend => "client/frontend",
            LocationBucket::Server => "server",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayAttributes {
    pub icon: StepIcon,
    pub color_tag: ColorTag,
    pub badge_label: &'static str,
    pub location_bucket: LocationBucket,
}

impl DisplayAttributes {
    pub fn for_step(step: &Step) -> Self {
        let icon = match step.category {
            StepCategory::Form => StepIcon::People,
            StepCategory::Auth | StepCategory::Storage => StepIcon::Database,
            StepCategory::Notification(NotifyChannel::Email) => StepIcon::Mail,
            StepCategory::Notification(NotifyChannel::Chat) => StepIcon::Message,
            StepCategory::Confirmation => StepIcon::Check,
        };
        let location_bucket = match step.execution_site {
            ExecutionSite::Client => LocationBucket::ClientFrontend,
            ExecutionSite::Server => LocationBucket::Server,
        };
        Self {
            icon,
            color_tag: step.color_tag,
            badge_label: step.location,
            location_bucket,
        }
    }
}

pub fn lookup_step_display(catalog: &Catalog, step_id: &str) -> Result<DisplayAttributes, NavError> {
    catalog
        .step(step_id)
        .map(DisplayAttributes::for_step)
        .ok_or_else(|| NavError::UnknownStep(step_id.into()))
}

/// Legacy substring classification by id and location text. The explicit
/// fields must agree with it for every built-in step.
pub fn classify_by_text(id: &str, location: &str) -> (StepIcon, LocationBucket) {
    let icon = if id.contains("form") {
        StepIcon::People
    } else if id.contains("user") || id.contains("db") {
        StepIcon::Database
    } else if id.contains("email") {
        StepIcon::Mail
    } else if id.contains("slack") {
        StepIcon::Message
    } else if id.contains("profile") {
        StepIcon::Check
    } else {
        StepIcon::Database
    };
    let bucket = if location.contains("Client") || location.contains("Frontend") {
        LocationBucket::ClientFrontend
    } else {
        LocationBucket::Server
    };
    (icon, bucket)
}

/// Shades of one color tag as RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Solid fill (icon tile, active progress dot).
    pub accent: (u8, u8, u8),
    /// Pale tint behind the step-count badge.
    pub light: (u8, u8, u8),
    /// Step card outline.
    pub border: (u8, u8, u8),
    /// Step card title and badge text.
    pub text: (u8, u8, u8),
}

impl ColorTag {
    pub fn palette(self) -> Palette {
        match self {
            ColorTag::Purple => Palette {
                accent: (168, 85, 247),
                light: (250, 245, 255),
                border: (233, 213, 255),
                text: (147, 51, 234),
            },
            ColorTag::Blue => Palette {
                accent: (59, 130, 246),
                light: (239, 246, 255),
                border: (191, 219, 254),
                text: (37, 99, 235),
            },
            ColorTag::Green => Palette {
                accent: (34, 197, 94),
                light: (240, 253, 244),
                border: (187, 247, 208),
                text: (22, 163, 74),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_icons() {
        let catalog = Catalog::global();
        let expected = [
            ("reg-form", StepIcon::People),
            ("reg-user", StepIcon::Database),
            ("reg-email", StepIcon::Mail),
            ("reg-profile", StepIcon::Check),
            ("contact-form", StepIcon::People),
            ("contact-email", StepIcon::Mail),
            ("workflow-form", StepIcon::People),
            ("workflow-db", StepIcon::Database),
            ("workflow-slack", StepIcon::Message),
            ("workflow-email", StepIcon::Mail),
        ];
        for (id, icon) in expected {
            assert_eq!(lookup_step_display(catalog, id).unwrap().icon, icon, "{id}");
        }
    }

    #[test]
    fn explicit_fields_agree_with_text_rule() {
        for step in Catalog::global().steps() {
            let attrs = DisplayAttributes::for_step(step);
            assert_eq!(
                (attrs.icon, attrs.location_bucket),
                classify_by_text(step.id, step.location),
                "{}",
                step.id
            );
        }
    }

    #[test]
    fn only_forms_run_on_the_client() {
        for step in Catalog::global().steps() {
            let bucket = DisplayAttributes::for_step(step).location_bucket;
            assert_eq!(
                bucket == LocationBucket::ClientFrontend,
                step.id.ends_with("-form"),
                "{}",
                step.id
            );
        }
    }

    #[test]
    fn badge_is_location_text() {
        let attrs = lookup_step_display(Catalog::global(), "workflow-db").unwrap();
        assert_eq!(attrs.badge_label, "Server (Supabase Database)");
        assert_eq!(attrs.color_tag, ColorTag::Green);
    }

    #[test]
    fn unknown_step_lookup() {
        assert_eq!(
            lookup_step_display(Catalog::global(), "missing"),
            Err(NavError::UnknownStep("missing".into()))
        );
    }

    #[test]
    fn text_rule_defaults() {
        assert_eq!(
            classify_by_text("misc", "Frontend app"),
            (StepIcon::Database, LocationBucket::ClientFrontend)
        );
        assert_eq!(classify_by_text("misc", "Edge"), (StepIcon::Database, LocationBucket::Server));
    }
}
