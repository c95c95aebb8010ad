use super::{
    parse_pages, Animations, Deadline, DesignSource, Forms, ProjectType, ScopeError, ScopeOption,
    ScopeState, ScopeSummary,
};
use crate::content::PROFILE;

pub const SCOPE_FILE_NAME: &str = "scope-summary.txt";
pub const DESIGN_LINK_PLACEHOLDER: &str = "(will send)";

const RULE: &str = "----------------------------------------";
const DOCUMENT_HEADER: &str = "SCOPE SUMMARY (Draft)";

const PROJECT_TYPE: &str = "Project Type";
const DESIGN_SOURCE: &str = "Design Source";
const PAGES: &str = "Sections/Pages";
const ANIMATIONS: &str = "Animations";
const FORMS: &str = "Forms";
const DEPLOYMENT: &str = "Deployment";
const DEADLINE: &str = "Deadline";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentOptions<'a> {
    /// Where to send the scope; adds a NEXT STEP block when non-empty.
    pub external_link: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
pub struct OutreachArgs<'a> {
    pub summary: &'a ScopeSummary,
    pub design_link: Option<&'a str>,
    pub notes: Option<&'a str>,
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push(RULE.to_string());
}

pub fn render_scope_document(summary: &ScopeSummary, opts: DocumentOptions<'_>) -> String {
    let mut lines = Vec::new();
    section(&mut lines, DOCUMENT_HEADER);
    lines.push(format!("{PROJECT_TYPE}: {}", summary.project_type_label));
    lines.push(format!("{DESIGN_SOURCE}: {}", summary.design_source_label));
    lines.push(format!("{PAGES}: {}", summary.state.pages_or_sections));
    lines.push(format!("{ANIMATIONS}: {}", summary.animations_label));
    lines.push(format!("{FORMS}: {}", summary.forms_label));
    lines.push(format!("{DEPLOYMENT}: {}", summary.deployment_label()));
    lines.push(format!("{DEADLINE}: {}", summary.deadline_label()));
    lines.push(String::new());

    section(&mut lines, "ESTIMATE (Preview)");
    lines.push(format!("Recommended Package: {}", summary.recommended_package));
    lines.push(format!("Estimated Timeline: {}", summary.timeline_text));
    lines.push(format!("Estimated Price Range: {}", summary.price_text));
    lines.push(String::new());

    section(&mut lines, "DELIVERABLES");
    lines.extend(summary.deliverables.iter().map(|d| format!("- {d}")));

    if !summary.risks.is_empty() {
        lines.push(String::new());
        section(&mut lines, "RISK FLAGS");
        lines.extend(summary.risks.iter().map(|r| format!("- {r}")));
    }

    if let Some(link) = opts.external_link.filter(|l| !l.is_empty()) {
        lines.push(String::new());
        section(&mut lines, "NEXT STEP");
        lines.push(format!("Send this scope to me on Fiverr: {link}"));
    }

    lines.join("\n")
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

pub fn render_outreach_message(args: OutreachArgs<'_>) -> String {
    let summary = args.summary;
    let mut lines = vec![
        format!(
            "Hi {} — I’d like to hire you for {}.",
            PROFILE.name, summary.project_type_label
        ),
        String::new(),
        format!(
            "Design: {}",
            non_blank(args.design_link).unwrap_or(DESIGN_LINK_PLACEHOLDER)
        ),
        format!("Sections/Pages: {}", summary.state.pages_or_sections),
        format!("Deadline: {}", summary.deadline_label()),
        String::new(),
        format!(
            "Estimate preview (ok if you adjust after review): {}, {}",
            summary.price_text, summary.timeline_text
        ),
        format!("Preferred package: {}", summary.recommended_package),
    ];

    if let Some(notes) = non_blank(args.notes) {
        lines.push(String::new());
        lines.push("Notes:".to_string());
        lines.push(notes.to_string());
    }

    lines.push(String::new());
    lines.push("Can you confirm price + timeline and what you need from me to start?".to_string());
    lines.join("\n")
}

fn field<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    label: &'static str,
) -> Result<&'a str, ScopeError> {
    let line = lines.next().ok_or(ScopeError::MissingField(label))?;
    line.strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(": "))
        .ok_or(ScopeError::MissingField(label))
}

fn labeled<T: ScopeOption>(value: &str) -> Result<T, ScopeError> {
    T::from_label(value).ok_or_else(|| ScopeError::UnknownValue {
        field: T::FIELD,
        value: value.to_string(),
    })
}

/// Reads the labeled field block of a rendered scope document back into a [`ScopeState`].
pub fn parse_scope_document(text: &str) -> Result<ScopeState, ScopeError> {
    let mut lines = text.lines();
    if lines.next() != Some(DOCUMENT_HEADER) {
        return Err(ScopeError::MalformedDocument(format!(
            "expected {DOCUMENT_HEADER:?} on the first line"
        )));
    }
    if lines.next() != Some(RULE) {
        return Err(ScopeError::MalformedDocument(
            "expected a separator rule under the header".to_string(),
        ));
    }

    let project_type = labeled::<ProjectType>(field(&mut lines, PROJECT_TYPE)?)?;
    let design_source = labeled::<DesignSource>(field(&mut lines, DESIGN_SOURCE)?)?;
    let pages_or_sections = parse_pages(field(&mut lines, PAGES)?)?;
    let animations = labeled::<Animations>(field(&mut lines, ANIMATIONS)?)?;
    let forms = labeled::<Forms>(field(&mut lines, FORMS)?)?;
    let deployment = match field(&mut lines, DEPLOYMENT)? {
        "Yes" => true,
        "No" => false,
        other => {
            return Err(ScopeError::UnknownValue {
                field: "deployment",
                value: other.to_string(),
            })
        }
    };
    let deadline = labeled::<Deadline>(field(&mut lines, DEADLINE)?)?;

    Ok(ScopeState {
        project_type,
        design_source,
        pages_or_sections,
        animations,
        forms,
        deployment,
        deadline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::estimate;

    const DEFAULT_DOCUMENT: &str = "SCOPE SUMMARY (Draft)
----------------------------------------
Project Type: UI Conversion (Figma → React/Tailwind)
Design Source: Figma file available
Sections/Pages: 3
Animations: Basic
Forms: None
Deployment: Yes
Deadline: Normal

ESTIMATE (Preview)
----------------------------------------
Recommended Package: Rapid UI Conversion
Estimated Timeline: 2–4 days
Estimated Price Range: $164 – $329

DELIVERABLES
----------------------------------------
- Responsive layout (mobile → desktop)
- Clean component structure (React + TypeScript)
- Tailwind styling with consistent spacing + typography
- Accessible UI basics (labels, focus states)
- Professional handoff (run/build instructions)
- Polished animations (Framer Motion)
- Deploy to Netlify/Vercel";

    #[test]
    fn test_scope_document_exact() {
        let summary = estimate(&ScopeState::default());
        let doc = render_scope_document(&summary, DocumentOptions::default());
        assert_eq!(doc, DEFAULT_DOCUMENT);
    }

    #[test]
    fn test_scope_document_risks_and_next_step() {
        let state = ScopeState {
            design_source: DesignSource::Screenshots,
            deadline: Deadline::Rush,
            ..ScopeState::default()
        };
        let summary = estimate(&state);
        let doc = render_scope_document(
            &summary,
            DocumentOptions {
                external_link: Some("https://www.fiverr.com/someone"),
            },
        );
        let tail = "
RISK FLAGS
----------------------------------------
- Screenshots only: expect minor interpretation decisions + extra review.
- Rush deadline: limited revision bandwidth; scope must be very clear.

NEXT STEP
----------------------------------------
Send this scope to me on Fiverr: https://www.fiverr.com/someone";
        assert!(doc.ends_with(tail), "{doc}");
        assert!(doc.contains("Deadline: Rush\n"));
    }

    #[test]
    fn test_scope_document_empty_link_is_absent() {
        let summary = estimate(&ScopeState::default());
        let doc = render_scope_document(
            &summary,
            DocumentOptions {
                external_link: Some(""),
            },
        );
        assert!(!doc.contains("NEXT STEP"));
        assert!(!doc.contains("RISK FLAGS"));
    }

    #[test]
    fn test_outreach_message() {
        let summary = estimate(&ScopeState::default());
        let msg = render_outreach_message(OutreachArgs {
            summary: &summary,
            design_link: Some("  https://figma.com/file/abc  "),
            notes: Some("\n Brand colors: navy + gold \n"),
        });
        let expected = format!(
            "Hi {} — I’d like to hire you for UI Conversion (Figma → React/Tailwind).

Design: https://figma.com/file/abc
Sections/Pages: 3
Deadline: Normal

Estimate preview (ok if you adjust after review): $164 – $329, 2–4 days
Preferred package: Rapid UI Conversion

Notes:
Brand colors: navy + gold

Can you confirm price + timeline and what you need from me to start?",
            PROFILE.name
        );
        assert_eq!(msg, expected);
    }

    #[test]
    fn test_outreach_whitespace_link_uses_placeholder() {
        let summary = estimate(&ScopeState::default());
        let msg = render_outreach_message(OutreachArgs {
            summary: &summary,
            design_link: Some("   "),
            notes: Some(" \t "),
        });
        assert!(msg.contains("Design: (will send)\n"));
        assert!(!msg.contains("Notes:"));

        let msg = render_outreach_message(OutreachArgs {
            summary: &summary,
            design_link: None,
            notes: None,
        });
        assert!(msg.contains(&format!("Design: {DESIGN_LINK_PLACEHOLDER}")));
        assert!(msg.ends_with("what you need from me to start?"));
    }

    #[test]
    fn test_renderers_leave_summary_untouched() {
        let summary = estimate(&ScopeState::default());
        let before = summary.clone();
        let _ = render_scope_document(&summary, DocumentOptions::default());
        let _ = render_outreach_message(OutreachArgs {
            summary: &summary,
            design_link: None,
            notes: Some("x"),
        });
        assert_eq!(summary, before);
    }

    #[test]
    fn test_parse_default_document() {
        assert_eq!(
            parse_scope_document(DEFAULT_DOCUMENT),
            Ok(ScopeState::default())
        );
    }

    #[test]
    fn test_parse_round_trip_with_all_blocks() {
        let state = ScopeState {
            project_type: ProjectType::Dashboard,
            design_source: DesignSource::None,
            pages_or_sections: 11,
            animations: Animations::Premium,
            forms: Forms::Advanced,
            deployment: false,
            deadline: Deadline::Rush,
        };
        let doc = render_scope_document(
            &estimate(&state),
            DocumentOptions {
                external_link: Some("https://example.com"),
            },
        );
        assert_eq!(parse_scope_document(&doc), Ok(state));
    }

    #[test]
    fn test_parse_rejects_bad_documents() {
        assert!(matches!(
            parse_scope_document("hello"),
            Err(ScopeError::MalformedDocument(_))
        ));
        let missing = DEFAULT_DOCUMENT.replace("Forms: None\n", "");
        assert_eq!(
            parse_scope_document(&missing),
            Err(ScopeError::MissingField("Forms"))
        );
        let unknown = DEFAULT_DOCUMENT.replace("Animations: Basic", "Animations: Wild");
        assert_eq!(
            parse_scope_document(&unknown),
            Err(ScopeError::UnknownValue {
                field: "animations",
                value: "Wild".to_string()
            })
        );
        let out_of_range = DEFAULT_DOCUMENT.replace("Sections/Pages: 3", "Sections/Pages: 30");
        assert_eq!(
            parse_scope_document(&out_of_range),
            Err(ScopeError::PagesOutOfRange(30))
        );
    }
}
