//! schematic-check: Schaltplan-Dokumente ohne Frontend prüfen.
//!
//! Lädt ein Dokument, meldet defekte Wires, routet optional alle Wires neu
//! und schreibt das Ergebnis zurück.

use anyhow::Context;
use clap::Parser;
use schematic_wire_editor::{
    AppCommand, AppController, ComponentLibrary, EditorOptions, SchematicEditor,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "schematic-check")]
#[command(about = "Prüft Schaltplan-Dokumente auf defekte Wires", long_about = None)]
#[command(version)]
struct Cli {
    /// Schaltplan-Dokument (JSON)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Zusätzliche Bauteil-Bibliothek (JSON-Array von Definitionen)
    #[arg(short, long, value_name = "LIBRARY")]
    library: Option<PathBuf>,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Alle intakten Wires neu routen
    #[arg(long)]
    reroute: bool,

    /// Ergebnis in diese Datei schreiben
    #[arg(short, long, value_name = "OUT")]
    output: Option<PathBuf>,

    /// Exit-Code 1, wenn defekte Wires gefunden wurden
    #[arg(long)]
    fail_on_broken: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(broken) if broken > 0 && cli.fail_on_broken => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Fehler: {e:#}");
            process::exit(2);
        }
    }
}

/// Führt die Prüfung aus und gibt die Anzahl defekter Wires zurück.
fn run(cli: &Cli) -> anyhow::Result<usize> {
    let config_path = cli.config.clone().unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);
    let library = build_library(cli.library.as_ref())?;

    let mut editor = SchematicEditor::with_options(library, options);
    let mut controller = AppController::new();

    controller.handle_command(
        &mut editor,
        AppCommand::LoadFile {
            path: cli.file.to_string_lossy().into_owned(),
        },
    )?;
    log::info!(
        "{}: {} Bauteile, {} Wires",
        editor.ui.schematic_name,
        editor.instance_count(),
        editor.wire_count()
    );

    let broken = editor.wires.broken_wires(&editor.instances);
    for (wire_id, reason) in &broken {
        println!("Wire {wire_id}: {reason}");
    }
    println!("{} von {} Wires defekt", broken.len(), editor.wire_count());

    if cli.reroute {
        controller.handle_command(&mut editor, AppCommand::RerouteAll)?;
        if let Some(status) = &editor.ui.status_message {
            println!("{status}");
        }
    }

    if let Some(output) = &cli.output {
        controller.handle_command(
            &mut editor,
            AppCommand::SaveFile {
                path: Some(output.to_string_lossy().into_owned()),
            },
        )?;
        println!("Geschrieben: {}", output.display());
    }

    Ok(broken.len())
}

/// Eingebaute Bibliothek, optional ergänzt um Definitionen aus einer Datei.
fn build_library(path: Option<&PathBuf>) -> anyhow::Result<ComponentLibrary> {
    let mut library = ComponentLibrary::builtin();
    let Some(path) = path else {
        return Ok(library);
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Bibliothek '{}' nicht lesbar", path.display()))?;
    let extra = ComponentLibrary::from_json_str(&json)?;
    for def in extra.iter() {
        library.insert(def.as_ref().clone())?;
    }
    log::info!("{} zusätzliche Bauteile geladen", extra.len());
    Ok(library)
}
