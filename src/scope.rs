mod controller;
mod render;

pub use controller::ScopeController;
pub use render::{
    parse_scope_document, render_outreach_message, render_scope_document, DocumentOptions,
    OutreachArgs, DESIGN_LINK_PLACEHOLDER, SCOPE_FILE_NAME,
};

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

pub const MIN_PAGES: u32 = 1;
pub const MAX_PAGES: u32 = 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },
    #[error("pages/sections must be between 1 and 12, got {0}")]
    PagesOutOfRange(i64),
    #[error("pages/sections is not a number: {0:?}")]
    InvalidPages(String),
    #[error("unknown scope field: {0:?}")]
    UnknownField(String),
    #[error("scope document is missing the {0} line")]
    MissingField(&'static str),
    #[error("malformed scope document: {0}")]
    MalformedDocument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectType {
    UiConversion,
    LandingPage,
    Dashboard,
    Bugfix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DesignSource {
    Figma,
    Screenshots,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Animations {
    None,
    Basic,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Forms {
    None,
    Simple,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Deadline {
    Normal,
    Rush,
}

/// Wire value, display label and the full set of choices for a selectable option.
pub trait ScopeOption: Sized + Copy + PartialEq + 'static {
    const FIELD: &'static str;

    fn all() -> &'static [Self];
    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.label() == label)
    }

    fn parse(value: &str) -> Result<Self, ScopeError> {
        Self::all()
            .iter()
            .copied()
            .find(|o| o.as_str() == value)
            .ok_or_else(|| ScopeError::UnknownValue {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }
}

macro_rules! scope_option {
    ($ty:ident, $field:literal, [$($variant:ident => ($wire:literal, $label:literal)),+ $(,)?]) => {
        impl ScopeOption for $ty {
            const FIELD: &'static str = $field;

            fn all() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ScopeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as ScopeOption>::parse(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

scope_option!(ProjectType, "projectType", [
    UiConversion => ("uiConversion", "UI Conversion (Figma → React/Tailwind)"),
    LandingPage => ("landingPage", "Landing Page"),
    Dashboard => ("dashboard", "Dashboard"),
    Bugfix => ("bugfix", "Bug Fix / Refactor"),
]);

scope_option!(DesignSource, "designSource", [
    Figma => ("figma", "Figma file available"),
    Screenshots => ("screenshots", "Screenshots only"),
    None => ("none", "No design yet (needs guidance)"),
]);

scope_option!(Animations, "animations", [
    None => ("none", "None"),
    Basic => ("basic", "Basic"),
    Premium => ("premium", "Premium"),
]);

scope_option!(Forms, "forms", [
    None => ("none", "None"),
    Simple => ("simple", "Simple"),
    Advanced => ("advanced", "Advanced"),
]);

scope_option!(Deadline, "deadline", [
    Normal => ("normal", "Normal"),
    Rush => ("rush", "Rush"),
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeState {
    pub project_type: ProjectType,
    pub design_source: DesignSource,
    pub pages_or_sections: u32,
    pub animations: Animations,
    pub forms: Forms,
    pub deployment: bool,
    pub deadline: Deadline,
}

impl Default for ScopeState {
    fn default() -> Self {
        Self {
            project_type: ProjectType::UiConversion,
            design_source: DesignSource::Figma,
            pages_or_sections: 3,
            animations: Animations::Basic,
            forms: Forms::None,
            deployment: true,
            deadline: Deadline::Normal,
        }
    }
}

impl ScopeState {
    /// Preset used by the quick quote form: extras are fixed, only the brief varies.
    pub fn quick_quote(
        project_type: ProjectType,
        design_source: DesignSource,
        pages_or_sections: u32,
        deadline: Deadline,
    ) -> Self {
        Self {
            project_type,
            design_source,
            pages_or_sections: clamp_pages(pages_or_sections),
            deadline,
            ..Self::default()
        }
    }

    pub fn validate(self) -> Result<Self, ScopeError> {
        check_pages(i64::from(self.pages_or_sections))?;
        Ok(self)
    }

    /// Apply a `field=value` pair using wire names (`projectType`, `uiConversion`, ...).
    pub fn apply(&mut self, field: &str, value: &str) -> Result<(), ScopeError> {
        let value = value.trim();
        match field.trim() {
            "projectType" => self.project_type = value.parse()?,
            "designSource" => self.design_source = value.parse()?,
            "pagesOrSections" => self.pages_or_sections = parse_pages(value)?,
            "animations" => self.animations = value.parse()?,
            "forms" => self.forms = value.parse()?,
            "deployment" => {
                self.deployment = match value {
                    "true" | "yes" => true,
                    "false" | "no" => false,
                    _ => {
                        return Err(ScopeError::UnknownValue {
                            field: "deployment",
                            value: value.to_string(),
                        })
                    }
                }
            }
            "deadline" => self.deadline = value.parse()?,
            other => return Err(ScopeError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

pub fn clamp_pages(n: u32) -> u32 {
    n.clamp(MIN_PAGES, MAX_PAGES)
}

fn check_pages(n: i64) -> Result<u32, ScopeError> {
    if (i64::from(MIN_PAGES)..=i64::from(MAX_PAGES)).contains(&n) {
        Ok(n as u32)
    } else {
        Err(ScopeError::PagesOutOfRange(n))
    }
}

pub fn parse_pages(value: &str) -> Result<u32, ScopeError> {
    let n = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ScopeError::InvalidPages(value.to_string()))?;
    check_pages(n)
}

struct Bracket {
    min: u32,
    max: u32,
    days_min: u32,
    days_max: u32,
    package: &'static str,
}

impl ProjectType {
    fn bracket(&self) -> Bracket {
        match self {
            ProjectType::UiConversion => Bracket {
                min: 99,
                max: 199,
                days_min: 2,
                days_max: 3,
                package: "Rapid UI Conversion",
            },
            ProjectType::LandingPage => Bracket {
                min: 249,
                max: 449,
                days_min: 3,
                days_max: 5,
                package: "Landing Page Build",
            },
            ProjectType::Dashboard => Bracket {
                min: 399,
                max: 799,
                days_min: 5,
                days_max: 9,
                package: "Custom Dashboard",
            },
            ProjectType::Bugfix => Bracket {
                min: 79,
                max: 199,
                days_min: 1,
                days_max: 3,
                package: "Bug Fix & Refactor",
            },
        }
    }

    /// Pages/sections covered by the base price.
    fn free_units(&self) -> u32 {
        match self {
            ProjectType::Bugfix => 1,
            _ => 3,
        }
    }
}

pub const BASE_DELIVERABLES: [&str; 5] = [
    "Responsive layout (mobile → desktop)",
    "Clean component structure (React + TypeScript)",
    "Tailwind styling with consistent spacing + typography",
    "Accessible UI basics (labels, focus states)",
    "Professional handoff (run/build instructions)",
];

pub const RISK_SCREENSHOTS: &str =
    "Screenshots only: expect minor interpretation decisions + extra review.";
pub const RISK_NO_DESIGN: &str =
    "No design yet: scope may change as we finalize layout and components.";
pub const RISK_RUSH: &str = "Rush deadline: limited revision bandwidth; scope must be very clear.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeSummary {
    #[serde(flatten)]
    pub state: ScopeState,
    pub recommended_package: &'static str,
    pub price_min: u32,
    pub price_max: u32,
    pub timeline_days_min: u32,
    pub timeline_days_max: u32,
    pub price_text: String,
    pub timeline_text: String,
    pub deliverables: Vec<&'static str>,
    pub risks: Vec<&'static str>,
    pub project_type_label: &'static str,
    pub design_source_label: &'static str,
    pub animations_label: &'static str,
    pub forms_label: &'static str,
}

impl ScopeSummary {
    pub fn deployment_label(&self) -> &'static str {
        if self.state.deployment {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn deadline_label(&self) -> &'static str {
        self.state.deadline.label()
    }
}

pub fn estimate(state: &ScopeState) -> ScopeSummary {
    let base = state.project_type.bracket();
    let mut min = base.min;
    let mut max = base.max;
    let mut days_min = base.days_min;
    let mut days_max = base.days_max;

    let extra_units = state
        .pages_or_sections
        .saturating_sub(state.project_type.free_units());
    min += extra_units * 20;
    max += extra_units * 45;
    days_min += extra_units.div_ceil(3);
    days_max += extra_units.div_ceil(2);

    match state.animations {
        Animations::None => {}
        Animations::Basic => {
            min += 40;
            max += 80;
            days_max += 1;
        }
        Animations::Premium => {
            min += 80;
            max += 160;
            days_min += 1;
            days_max += 2;
        }
    }

    match state.forms {
        Forms::None => {}
        Forms::Simple => {
            min += 35;
            max += 70;
            days_max += 1;
        }
        Forms::Advanced => {
            min += 75;
            max += 150;
            days_min += 1;
            days_max += 2;
        }
    }

    if state.deployment {
        min += 25;
        max += 50;
    }

    let mut risks = Vec::new();
    match state.design_source {
        DesignSource::Figma => {}
        DesignSource::Screenshots => {
            risks.push(RISK_SCREENSHOTS);
            days_max += 1;
        }
        DesignSource::None => {
            risks.push(RISK_NO_DESIGN);
            days_max += 2;
            max += 120;
        }
    }

    if state.deadline == Deadline::Rush {
        risks.push(RISK_RUSH);
        // x1.25 rounded half up, x0.75 and x0.85 floored, all in integer math
        min = (min * 5 + 2) / 4;
        max = (max * 5 + 2) / 4;
        days_min = (days_min * 3 / 4).max(1);
        days_max = (days_max * 17 / 20).max(days_min);
    }

    let mut deliverables = BASE_DELIVERABLES.to_vec();
    if state.project_type == ProjectType::LandingPage {
        deliverables.push("Conversion-friendly sections (hero, benefits, CTA, etc.)");
    }
    if state.project_type == ProjectType::Dashboard {
        deliverables.push("Interactive UI (filters, tables, and chart skeleton)");
    }
    if state.animations != Animations::None {
        deliverables.push("Polished animations (Framer Motion)");
    }
    if state.forms != Forms::None {
        deliverables.push("Form validation + success state");
    }
    if state.deployment {
        deliverables.push("Deploy to Netlify/Vercel");
    }

    ScopeSummary {
        state: *state,
        recommended_package: base.package,
        price_min: min,
        price_max: max,
        timeline_days_min: days_min,
        timeline_days_max: days_max,
        price_text: format!("{} – {}", format_usd(min), format_usd(max)),
        timeline_text: format!(
            "{days_min}–{days_max} {}",
            if days_max == 1 { "day" } else { "days" }
        ),
        deliverables,
        risks,
        project_type_label: state.project_type.label(),
        design_source_label: state.design_source.label(),
        animations_label: state.animations.label(),
        forms_label: state.forms.label(),
    }
}

/// Whole-dollar USD with en-US digit grouping, e.g. `$1,250`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ScopeState {
        ScopeState::default()
    }

    #[test]
    fn test_default_scope_estimate() {
        // base 99-199 / 2-3, basic animations +40/+80 +1 max, deployment +25/+50
        let summary = estimate(&state());
        assert_eq!(summary.price_min, 164);
        assert_eq!(summary.price_max, 329);
        assert_eq!(summary.price_text, "$164 – $329");
        assert_eq!(summary.timeline_text, "2–4 days");
        assert_eq!(summary.recommended_package, "Rapid UI Conversion");
        assert!(summary.risks.is_empty());
        assert_eq!(summary.project_type_label, "UI Conversion (Figma → React/Tailwind)");
    }

    #[test]
    fn test_extra_units() {
        let s = ScopeState {
            project_type: ProjectType::LandingPage,
            pages_or_sections: 8,
            animations: Animations::None,
            deployment: false,
            ..state()
        };
        // 5 extra units: +100/+225, +2 min days, +3 max days
        let summary = estimate(&s);
        assert_eq!((summary.price_min, summary.price_max), (349, 674));
        assert_eq!(summary.timeline_text, "5–8 days");
        assert_eq!(summary.recommended_package, "Landing Page Build");
    }

    #[test]
    fn test_bugfix_free_units() {
        let one = ScopeState {
            project_type: ProjectType::Bugfix,
            pages_or_sections: 1,
            animations: Animations::None,
            deployment: false,
            ..state()
        };
        let summary = estimate(&one);
        assert_eq!((summary.price_min, summary.price_max), (79, 199));
        assert_eq!((summary.timeline_days_min, summary.timeline_days_max), (1, 3));

        let three = ScopeState {
            pages_or_sections: 3,
            ..one
        };
        let summary = estimate(&three);
        assert_eq!((summary.price_min, summary.price_max), (119, 289));
        assert_eq!((summary.timeline_days_min, summary.timeline_days_max), (2, 4));
    }

    #[test]
    fn test_pages_below_free_units_add_nothing() {
        let s = ScopeState {
            pages_or_sections: 1,
            ..state()
        };
        assert_eq!(estimate(&s).price_min, estimate(&state()).price_min);
    }

    #[test]
    fn test_premium_and_advanced_modifiers() {
        let s = ScopeState {
            project_type: ProjectType::Dashboard,
            animations: Animations::Premium,
            forms: Forms::Advanced,
            deployment: false,
            ..state()
        };
        let summary = estimate(&s);
        assert_eq!((summary.price_min, summary.price_max), (554, 1109));
        assert_eq!(summary.timeline_text, "7–13 days");
        assert_eq!(summary.price_text, "$554 – $1,109");
    }

    #[test]
    fn test_simple_forms_modifier() {
        let s = ScopeState {
            forms: Forms::Simple,
            animations: Animations::None,
            deployment: false,
            ..state()
        };
        let summary = estimate(&s);
        assert_eq!((summary.price_min, summary.price_max), (134, 269));
        assert_eq!(summary.timeline_text, "2–4 days");
    }

    #[test]
    fn test_design_source_risks() {
        let screenshots = estimate(&ScopeState {
            design_source: DesignSource::Screenshots,
            ..state()
        });
        assert_eq!(screenshots.risks, vec![RISK_SCREENSHOTS]);
        assert_eq!(screenshots.timeline_days_max, 5);
        assert_eq!(screenshots.price_max, 329);

        let none = estimate(&ScopeState {
            design_source: DesignSource::None,
            ..state()
        });
        assert_eq!(none.risks.len(), 1);
        assert!(none.risks[0].contains("scope may change"));
        assert_eq!(none.timeline_days_max, 6);
        assert_eq!(none.price_max, 449);
        assert_eq!(none.price_min, 164);
    }

    #[test]
    fn test_rush_adjustment() {
        let rush = estimate(&ScopeState {
            deadline: Deadline::Rush,
            ..state()
        });
        // 164 * 1.25 = 205, 329 * 1.25 = 411.25
        assert_eq!((rush.price_min, rush.price_max), (205, 411));
        // floor(2 * 0.75) = 1, floor(4 * 0.85) = 3
        assert_eq!(rush.timeline_text, "1–3 days");
        assert_eq!(rush.risks, vec![RISK_RUSH]);
    }

    #[test]
    fn test_rush_rounds_half_up() {
        // 79 + 25 = 104 -> 130; 199 + 50 = 249 -> 311.25 -> 311
        let s = ScopeState {
            project_type: ProjectType::Bugfix,
            pages_or_sections: 1,
            animations: Animations::None,
            deadline: Deadline::Rush,
            ..state()
        };
        let summary = estimate(&s);
        assert_eq!((summary.price_min, summary.price_max), (130, 311));
    }

    #[test]
    fn test_rush_clamps_days() {
        let s = ScopeState {
            project_type: ProjectType::UiConversion,
            pages_or_sections: 1,
            animations: Animations::None,
            deployment: false,
            deadline: Deadline::Rush,
            ..state()
        };
        let summary = estimate(&s);
        // base 2-3: floor(1.5) = 1, floor(2.55) = 2
        assert_eq!((summary.timeline_days_min, summary.timeline_days_max), (1, 2));
        assert!(summary.timeline_days_min <= summary.timeline_days_max);
    }

    #[test]
    fn test_risk_order_design_then_rush() {
        let summary = estimate(&ScopeState {
            design_source: DesignSource::None,
            deadline: Deadline::Rush,
            ..state()
        });
        assert_eq!(summary.risks, vec![RISK_NO_DESIGN, RISK_RUSH]);
    }

    #[test]
    fn test_deliverables_order() {
        let summary = estimate(&ScopeState {
            project_type: ProjectType::LandingPage,
            forms: Forms::Simple,
            ..state()
        });
        assert_eq!(&summary.deliverables[..5], &BASE_DELIVERABLES);
        assert_eq!(
            &summary.deliverables[5..],
            &[
                "Conversion-friendly sections (hero, benefits, CTA, etc.)",
                "Polished animations (Framer Motion)",
                "Form validation + success state",
                "Deploy to Netlify/Vercel",
            ]
        );

        let bare = estimate(&ScopeState {
            animations: Animations::None,
            deployment: false,
            ..state()
        });
        assert_eq!(bare.deliverables, BASE_DELIVERABLES.to_vec());
    }

    #[test]
    fn test_dashboard_deliverable() {
        let summary = estimate(&ScopeState {
            project_type: ProjectType::Dashboard,
            ..state()
        });
        assert!(summary
            .deliverables
            .contains(&"Interactive UI (filters, tables, and chart skeleton)"));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(99), "$99");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(1000), "$1,000");
        assert_eq!(format_usd(2105), "$2,105");
        assert_eq!(format_usd(1234567), "$1,234,567");
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("uiConversion".parse::<ProjectType>(), Ok(ProjectType::UiConversion));
        assert_eq!("screenshots".parse::<DesignSource>(), Ok(DesignSource::Screenshots));
        assert_eq!("premium".parse::<Animations>(), Ok(Animations::Premium));
        assert_eq!("advanced".parse::<Forms>(), Ok(Forms::Advanced));
        assert_eq!("rush".parse::<Deadline>(), Ok(Deadline::Rush));
        assert_eq!(
            "website".parse::<ProjectType>(),
            Err(ScopeError::UnknownValue {
                field: "projectType",
                value: "website".to_string()
            })
        );
        assert_eq!(
            DesignSource::from_label("Screenshots only"),
            Some(DesignSource::Screenshots)
        );
        assert_eq!(Animations::from_label("Fancy"), None);
    }

    #[test]
    fn test_apply_and_validate() {
        let mut s = state();
        s.apply("projectType", "dashboard").unwrap();
        s.apply("pagesOrSections", " 7 ").unwrap();
        s.apply("deployment", "no").unwrap();
        assert_eq!(s.project_type, ProjectType::Dashboard);
        assert_eq!(s.pages_or_sections, 7);
        assert!(!s.deployment);

        assert_eq!(
            s.apply("pagesOrSections", "13"),
            Err(ScopeError::PagesOutOfRange(13))
        );
        assert_eq!(
            s.apply("pagesOrSections", "0"),
            Err(ScopeError::PagesOutOfRange(0))
        );
        assert!(matches!(
            s.apply("pagesOrSections", "many"),
            Err(ScopeError::InvalidPages(_))
        ));
        assert!(matches!(
            s.apply("budget", "1000"),
            Err(ScopeError::UnknownField(_))
        ));
        // rejected writes leave the state untouched
        assert_eq!(s.pages_or_sections, 7);

        let bad = ScopeState {
            pages_or_sections: 40,
            ..state()
        };
        assert_eq!(bad.validate(), Err(ScopeError::PagesOutOfRange(40)));
    }

    #[test]
    fn test_quick_quote_preset() {
        let s = ScopeState::quick_quote(ProjectType::Bugfix, DesignSource::None, 99, Deadline::Rush);
        assert_eq!(s.pages_or_sections, MAX_PAGES);
        assert_eq!(s.animations, Animations::Basic);
        assert_eq!(s.forms, Forms::None);
        assert!(s.deployment);
    }

    #[test]
    fn test_summary_serializes_flat() {
        let json = serde_json::to_value(estimate(&state())).unwrap();
        assert_eq!(json["projectType"], "uiConversion");
        assert_eq!(json["pagesOrSections"], 3);
        assert_eq!(json["priceText"], "$164 – $329");
        assert_eq!(json["risks"], serde_json::json!([]));
    }
}
