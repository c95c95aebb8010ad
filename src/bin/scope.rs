//! `scope`: the project estimator and scope summary renderer from a terminal.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use portfolio_site::{
    content::PROFILE,
    scope::{
        parse_pages, parse_scope_document, Animations, Deadline, DesignSource, Forms,
        ProjectType, ScopeController, ScopeState, SCOPE_FILE_NAME,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "scope",
    version,
    about = "Estimate a front-end project and render its scope summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate price, timeline and package for a project
    #[command(visible_alias = "e")]
    Estimate(EstimateArgs),

    /// Re-read a saved scope summary and recompute its estimate
    Read {
        /// Path to a saved scope summary
        file: PathBuf,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(clap::Args, Debug)]
struct EstimateArgs {
    /// uiConversion, landingPage, dashboard or bugfix
    #[arg(long, default_value = "uiConversion")]
    project_type: ProjectType,

    /// figma, screenshots or none
    #[arg(long, default_value = "figma")]
    design_source: DesignSource,

    /// Sections or pages, 1 to 12
    #[arg(long, default_value = "3", value_parser = parse_pages)]
    pages: u32,

    /// none, basic or premium
    #[arg(long, default_value = "basic")]
    animations: Animations,

    /// none, simple or advanced
    #[arg(long, default_value = "none")]
    forms: Forms,

    /// Leave Netlify/Vercel deployment out of the scope
    #[arg(long)]
    no_deployment: bool,

    /// normal or rush
    #[arg(long, default_value = "normal")]
    deadline: Deadline,

    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Design link quoted in the outreach message
    #[arg(long)]
    design_link: Option<String>,

    /// Notes appended to the outreach message
    #[arg(long)]
    notes: Option<String>,

    /// Write the scope summary to scope-summary.txt instead of printing
    #[arg(long)]
    save: bool,
}

impl EstimateArgs {
    fn state(&self) -> ScopeState {
        ScopeState {
            project_type: self.project_type,
            design_source: self.design_source,
            pages_or_sections: self.pages,
            animations: self.animations,
            forms: self.forms,
            deployment: !self.no_deployment,
            deadline: self.deadline,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    /// Scope summary document
    #[default]
    Text,
    /// Ready-to-send outreach message
    Message,
    /// Estimate as JSON
    Json,
}

fn controller_for(state: ScopeState) -> Result<ScopeController, Box<dyn Error>> {
    let mut controller = ScopeController::default().with_external_link(PROFILE.socials.hire_href());
    controller.replace_state(state)?;
    Ok(controller)
}

fn render(controller: &ScopeController, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(controller.scope_document().to_string()),
        OutputFormat::Message => Ok(controller.outreach_message().to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(controller.summary()),
    }
}

fn estimate(args: EstimateArgs) -> Result<(), Box<dyn Error>> {
    let mut controller = controller_for(args.state())?;
    if let Some(link) = args.design_link {
        controller.set_design_link(link);
    }
    if let Some(notes) = args.notes {
        controller.set_notes(notes);
    }

    if args.save {
        fs::write(SCOPE_FILE_NAME, controller.scope_document())
            .map_err(|e| format!("could not write {SCOPE_FILE_NAME}: {e}"))?;
        println!("Saved {SCOPE_FILE_NAME}");
    } else {
        println!("{}", render(&controller, args.format)?);
    }
    Ok(())
}

fn read(file: &Path, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(file)
        .map_err(|e| format!("could not read {}: {e}", file.display()))?;
    let controller = controller_for(parse_scope_document(&text)?)?;
    println!("{}", render(&controller, format)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Estimate(args) => estimate(args),
        Commands::Read { file, format } => read(&file, format),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "portfolio_site=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_args(argv: &[&str]) -> EstimateArgs {
        let cli = Cli::try_parse_from(["scope", "estimate"].iter().chain(argv)).unwrap();
        match cli.command {
            Commands::Estimate(args) => args,
            other => panic!("expected estimate, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_match_default_scope() {
        assert_eq!(estimate_args(&[]).state(), ScopeState::default());
    }

    #[test]
    fn test_flags_use_wire_names() {
        let args = estimate_args(&[
            "--project-type",
            "dashboard",
            "--design-source",
            "none",
            "--pages",
            "12",
            "--no-deployment",
            "--deadline",
            "rush",
            "--format",
            "json",
        ]);
        let state = args.state();
        assert_eq!(state.project_type, ProjectType::Dashboard);
        assert_eq!(state.design_source, DesignSource::None);
        assert_eq!(state.pages_or_sections, 12);
        assert!(!state.deployment);
        assert_eq!(state.deadline, Deadline::Rush);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["scope", "estimate", "--pages", "13"]).is_err());
        assert!(Cli::try_parse_from(["scope", "estimate", "--pages", "three"]).is_err());
        assert!(Cli::try_parse_from(["scope", "estimate", "--forms", "huge"]).is_err());
    }

    #[test]
    fn test_render_formats() {
        let controller = controller_for(ScopeState::default()).unwrap();
        let text = render(&controller, OutputFormat::Text).unwrap();
        assert!(text.starts_with("SCOPE SUMMARY (Draft)"));
        assert!(text.contains(PROFILE.socials.hire_href()));

        let message = render(&controller, OutputFormat::Message).unwrap();
        assert!(message.starts_with("Hi "));

        let json: serde_json::Value =
            serde_json::from_str(&render(&controller, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["priceMin"], 164);
        assert_eq!(json["projectType"], "uiConversion");
    }

    #[test]
    fn test_read_round_trips_saved_document() {
        let state = estimate_args(&["--forms", "advanced", "--pages", "7"]).state();
        let saved = controller_for(state).unwrap();
        let reread = parse_scope_document(saved.scope_document()).unwrap();
        assert_eq!(reread, state);
    }
}
