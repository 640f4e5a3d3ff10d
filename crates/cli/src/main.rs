use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stringart::geom::Shape;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod catalogue;
mod provenance;
mod svg;

use catalogue::Entry;

#[derive(Parser)]
#[command(name = "stringart-cli")]
#[command(about = "Render string-art drilling templates to SVG")]
struct Cmd {
    /// JSON catalogue replacing the built-in template list
    #[arg(long, global = true)]
    catalogue: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render templates into an output directory
    Build {
        #[arg(long, default_value = "templates")]
        out: PathBuf,
        /// Only render the named templates (repeatable)
        #[arg(long)]
        only: Vec<String>,
        /// Write a `<name>.provenance.json` next to every template
        #[arg(long)]
        provenance: bool,
    },
    /// List catalogue entries
    List,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    let entries = match &cmd.catalogue {
        Some(path) => catalogue::load(path)?,
        None => catalogue::builtin(),
    };
    match cmd.action {
        Action::Build {
            out,
            only,
            provenance,
        } => build(catalogue::select(entries, &only)?, &out, provenance),
        Action::List => list(&entries),
        Action::Report => report(&entries),
    }
}

fn build(entries: Vec<Entry>, out: &Path, provenance: bool) -> Result<()> {
    tracing::info!(templates = entries.len(), out = %out.display(), "build");
    // Build every shape before writing anything, so a bad entry leaves no partial output.
    let shapes: Vec<(Entry, Shape)> = entries
        .into_iter()
        .map(|e| -> Result<(Entry, Shape)> {
            let shape = e
                .spec
                .build()
                .with_context(|| format!("building template {}", e.name))?;
            Ok((e, shape))
        })
        .collect::<Result<_>>()?;

    for (entry, shape) in &shapes {
        let path = out.join(&entry.file);
        let primitives = svg::render(shape, &path)?;
        tracing::info!(
            template = %entry.name,
            pattern = entry.spec.kind(),
            primitives,
            path = %path.display(),
            "rendered"
        );
        if provenance {
            let params = serde_json::to_value(&entry.spec)?;
            let sidecar =
                provenance::write_sidecar(&path, provenance::Payload::new(&entry.name, params))?;
            tracing::debug!(sidecar = %sidecar.display(), "provenance");
        }
        println!("saved {}", path.display());
    }
    Ok(())
}

fn list(entries: &[Entry]) -> Result<()> {
    for e in entries {
        println!("{:<6} {:<12} {}", e.name, e.spec.kind(), e.file);
    }
    Ok(())
}

fn report(entries: &[Entry]) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": stringart::VERSION,
        "templates": entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn build_writes_selected_templates_with_sidecars() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("templates");
        let picked = catalogue::select(
            catalogue::builtin(),
            &["C09".to_string(), "SQ5".to_string()],
        )
        .unwrap();
        build(picked, &out, true).unwrap();
        for name in ["C09", "SQ5"] {
            let svg = fs::read_to_string(out.join(format!("{name}.svg"))).unwrap();
            assert!(svg.contains("<svg"));
            assert!(out.join(format!("{name}.provenance.json")).exists());
        }
        assert!(!out.join("P3.svg").exists());
    }

    #[test]
    fn invalid_entry_writes_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("templates");
        let mut entries = catalogue::select(catalogue::builtin(), &["C09".to_string()]).unwrap();
        let mut bad = entries[0].clone();
        bad.name = "BAD".to_string();
        bad.file = "BAD.svg".to_string();
        bad.spec = stringart::patterns::PatternSpec::Circle(
            stringart::patterns::CircleParams::new(2.0, 9),
        );
        entries.push(bad);
        let err = build(entries, &out, false).unwrap_err();
        assert!(format!("{err:#}").contains("BAD"));
        assert!(!out.exists());
    }

    #[test]
    fn cli_parses_build_flags() {
        let cmd = Cmd::try_parse_from([
            "stringart-cli",
            "build",
            "--out",
            "x",
            "--only",
            "P3",
            "--only",
            "S5",
            "--provenance",
        ])
        .unwrap();
        match cmd.action {
            Action::Build {
                out,
                only,
                provenance,
            } => {
                assert_eq!(out, PathBuf::from("x"));
                assert_eq!(only, ["P3", "S5"]);
                assert!(provenance);
            }
            _ => panic!("expected build"),
        }
    }
}
