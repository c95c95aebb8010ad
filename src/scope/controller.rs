use super::{
    clamp_pages, estimate, render_outreach_message, render_scope_document, Animations, Deadline,
    DesignSource, DocumentOptions, Forms, OutreachArgs, ProjectType, ScopeError, ScopeState,
    ScopeSummary,
};

/// Owns the current selections and keeps the estimate and both texts in sync with them.
///
/// Every setter runs `state -> estimate -> render` before returning, so readers never
/// observe a summary computed from an older state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeController {
    state: ScopeState,
    design_link: String,
    notes: String,
    external_link: Option<String>,
    summary: ScopeSummary,
    scope_document: String,
    outreach_message: String,
}

impl Default for ScopeController {
    fn default() -> Self {
        Self::new(ScopeState::default())
    }
}

impl ScopeController {
    pub fn new(state: ScopeState) -> Self {
        let state = ScopeState {
            pages_or_sections: clamp_pages(state.pages_or_sections),
            ..state
        };
        let summary = estimate(&state);
        let mut controller = Self {
            state,
            design_link: String::new(),
            notes: String::new(),
            external_link: None,
            summary,
            scope_document: String::new(),
            outreach_message: String::new(),
        };
        controller.render();
        controller
    }

    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self.render();
        self
    }

    pub fn state(&self) -> &ScopeState {
        &self.state
    }

    pub fn summary(&self) -> &ScopeSummary {
        &self.summary
    }

    pub fn scope_document(&self) -> &str {
        &self.scope_document
    }

    pub fn outreach_message(&self) -> &str {
        &self.outreach_message
    }

    pub fn design_link(&self) -> &str {
        &self.design_link
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_project_type(&mut self, project_type: ProjectType) {
        self.update(|s| s.project_type = project_type);
    }

    pub fn set_design_source(&mut self, design_source: DesignSource) {
        self.update(|s| s.design_source = design_source);
    }

    /// Slider input: values outside the allowed range are clamped.
    pub fn set_pages_or_sections(&mut self, pages: u32) {
        self.update(|s| s.pages_or_sections = clamp_pages(pages));
    }

    pub fn set_animations(&mut self, animations: Animations) {
        self.update(|s| s.animations = animations);
    }

    pub fn set_forms(&mut self, forms: Forms) {
        self.update(|s| s.forms = forms);
    }

    pub fn toggle_deployment(&mut self) {
        self.update(|s| s.deployment = !s.deployment);
    }

    pub fn set_deadline(&mut self, deadline: Deadline) {
        self.update(|s| s.deadline = deadline);
    }

    /// Programmatic input by wire name. Unknown fields, unknown values and out-of-range
    /// page counts are rejected and leave the current state untouched.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ScopeError> {
        let mut next = self.state;
        if let Err(e) = next.apply(field, value) {
            log::warn!("rejected scope input {field}={value:?}: {e}");
            return Err(e);
        }
        self.update(|s| *s = next);
        Ok(())
    }

    pub fn replace_state(&mut self, state: ScopeState) -> Result<(), ScopeError> {
        let state = state.validate()?;
        self.update(|s| *s = state);
        Ok(())
    }

    pub fn set_design_link(&mut self, link: impl Into<String>) {
        self.design_link = link.into();
        self.render();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.render();
    }

    fn update(&mut self, f: impl FnOnce(&mut ScopeState)) {
        f(&mut self.state);
        self.summary = estimate(&self.state);
        log::debug!(
            "scope recomputed: {} / {} / {}",
            self.summary.recommended_package,
            self.summary.price_text,
            self.summary.timeline_text
        );
        self.render();
    }

    fn render(&mut self) {
        self.scope_document = render_scope_document(
            &self.summary,
            DocumentOptions {
                external_link: self.external_link.as_deref(),
            },
        );
        self.outreach_message = render_outreach_message(OutreachArgs {
            summary: &self.summary,
            design_link: Some(&self.design_link),
            notes: Some(&self.notes),
        });
    }
}
