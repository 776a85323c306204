//! Triangle Editor (headless).
//!
//! Treibt die Dreiecks-Engine über ein zeilenbasiertes Skript auf stdin und
//! gibt Szene-Snapshots als JSON aus. Zeichnen übernimmt ein externer Host.
//!
//! Skript-Befehle (eine Zeile je Befehl, `#` leitet Kommentare ein):
//! `move X Y`, `down X Y`, `up`, `angle A|B|C GRAD`, `dist AB|BC|CA WERT`,
//! `dists AB BC AC`, `dismiss`, `toggle KONSTRUKTION`, `reset`, `scene`.

use anyhow::{bail, Context};
use glam::DVec2;
use std::io::{BufRead, Write};
use triangle_editor::{
    AppController, AppIntent, AppState, ConstructionKind, EdgeLabel, EditorOptions, VertexLabel,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Triangle Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let mut session = ScriptSession::new(
            AppState::with_options(options),
            AppController::with_options_path(config_path),
        );
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for (index, line) in stdin.lock().lines().enumerate() {
            let line = line.context("stdin nicht lesbar")?;
            let step = parse_line(&line).with_context(|| format!("Zeile {}", index + 1))?;
            if let Some(output) = session.run(step)? {
                writeln!(out, "{output}")?;
            }
        }

        Ok(())
    }
}

/// Ein geparster Skript-Schritt.
#[derive(Debug, Clone, PartialEq)]
enum ScriptStep {
    /// Leerzeile oder Kommentar
    Skip,
    Intent(AppIntent),
    /// Aktuellen Szene-Snapshot ausgeben
    PrintScene,
}

/// Hält Zustand und Controller über die Skript-Zeilen hinweg.
struct ScriptSession {
    state: AppState,
    controller: AppController,
}

impl ScriptSession {
    fn new(state: AppState, controller: AppController) -> Self {
        Self { state, controller }
    }

    /// Führt einen Schritt aus; liefert ggf. die auszugebende JSON-Zeile.
    fn run(&mut self, step: ScriptStep) -> anyhow::Result<Option<String>> {
        match step {
            ScriptStep::Skip => Ok(None),
            ScriptStep::Intent(intent) => {
                let handled = self.controller.handle_intent(&mut self.state, intent)?;
                log::debug!(
                    "Intent verarbeitet (verbraucht: {handled}), Command #{}: {:?}",
                    self.state.command_log.total_recorded(),
                    self.state.command_log.last()
                );
                Ok(None)
            }
            ScriptStep::PrintScene => {
                let scene = self.controller.build_scene(&self.state);
                Ok(Some(serde_json::to_string(&scene)?))
            }
        }
    }
}

fn parse_line(line: &str) -> anyhow::Result<ScriptStep> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Ok(ScriptStep::Skip);
    };
    let args: Vec<&str> = parts.collect();

    let intent = match (keyword.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("move", [x, y]) => AppIntent::PointerMoved {
            world_pos: parse_point(x, y)?,
        },
        ("down", [x, y]) => AppIntent::PointerPressed {
            world_pos: parse_point(x, y)?,
        },
        ("up", []) => AppIntent::PointerReleased,
        ("angle", [vertex, degrees]) => AppIntent::AngleInputChanged {
            vertex: parse_vertex(vertex)?,
            degrees: degrees
                .parse()
                .with_context(|| format!("Ungültiger Winkel: {degrees}"))?,
        },
        ("dist", [edge, input]) => AppIntent::DistanceInputChanged {
            edge: parse_edge(edge)?,
            input: (*input).to_string(),
        },
        ("dists", [ab, bc, ac]) => AppIntent::DistancesSubmitted {
            ab: (*ab).to_string(),
            bc: (*bc).to_string(),
            ac: (*ac).to_string(),
        },
        ("dismiss", []) => AppIntent::ValidationMessageDismissed,
        ("toggle", [kind]) => AppIntent::ConstructionToggled {
            kind: parse_construction(kind)?,
        },
        ("reset", []) => AppIntent::ResetTriangleRequested,
        ("scene", []) => return Ok(ScriptStep::PrintScene),
        _ => bail!("Unbekannter Befehl: {line}"),
    };

    Ok(ScriptStep::Intent(intent))
}

fn parse_point(x: &str, y: &str) -> anyhow::Result<DVec2> {
    let x: f64 = x.parse().with_context(|| format!("Ungültige X-Koordinate: {x}"))?;
    let y: f64 = y.parse().with_context(|| format!("Ungültige Y-Koordinate: {y}"))?;
    Ok(DVec2::new(x, y))
}

fn parse_vertex(text: &str) -> anyhow::Result<VertexLabel> {
    VertexLabel::ALL
        .into_iter()
        .find(|v| v.as_str().eq_ignore_ascii_case(text))
        .with_context(|| format!("Unbekannter Eckpunkt: {text}"))
}

fn parse_edge(text: &str) -> anyhow::Result<EdgeLabel> {
    if text.eq_ignore_ascii_case("AC") {
        return Ok(EdgeLabel::CA);
    }
    EdgeLabel::ALL
        .into_iter()
        .find(|e| e.as_str().eq_ignore_ascii_case(text))
        .with_context(|| format!("Unbekannte Kante: {text}"))
}

fn parse_construction(text: &str) -> anyhow::Result<ConstructionKind> {
    let kind = match text.to_ascii_lowercase().as_str() {
        "medians" => ConstructionKind::Medians,
        "altitudes" => ConstructionKind::Altitudes,
        "bisectors" | "angle_bisectors" => ConstructionKind::AngleBisectors,
        "perpendiculars" | "perpendicular_bisectors" => ConstructionKind::PerpendicularBisectors,
        "incircle" => ConstructionKind::Incircle,
        "circumcircle" => ConstructionKind::Circumcircle,
        "coordinates" | "coordinate_system" => ConstructionKind::CoordinateSystem,
        _ => bail!("Unbekannte Konstruktion: {text}"),
    };
    Ok(kind)
}
