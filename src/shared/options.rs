//! Zentrale Konfiguration für den Dreieck-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster & Einheiten ──────────────────────────────────────────────

/// Pixel pro Rasterzelle beim Zeichnen (≈ 1 cm bei 96 DPI).
pub const GRID_SIZE_PX: f64 = 38.0;
/// Rastereinheiten pro Zentimeter (externe Längen-Ein-/Ausgabe).
pub const GRID_UNITS_PER_CM: f64 = 1.0;

// ── Snapping ────────────────────────────────────────────────────────

/// Winkel-Raster beim Drehen einer Kante (Grad).
pub const ANGLE_SNAP_DEGREES: f64 = 1.0;
/// Längen-Raster beim Verlängern einer Kante (Rastereinheiten).
pub const LENGTH_SNAP_UNITS: f64 = 0.5;

// ── Kanten-Bedienelemente ───────────────────────────────────────────

/// Abstand zwischen Winkel- und Längen-Element einer Seite (Pixel).
pub const CONTROL_SPACING_PX: f64 = 30.0;
/// Halbe Lücke zwischen den beiden Endpunkt-Gruppen (Pixel).
pub const CONTROL_GAP_PX: f64 = 30.0;
/// Gezeichnete Icon-Größe (Pixel), kleiner als der Klickradius.
pub const CONTROL_ICON_SIZE_PX: f64 = 12.0;
/// Trefferradius eines Bedienelements (Pixel).
pub const CONTROL_DETECT_RADIUS_PX: f64 = 15.0;
/// Maximaler Abstand Cursor ↔ Kante für Hover (Pixel).
pub const EDGE_HOVER_DISTANCE_PX: f64 = 10.0;

// ── Eckpunkte ───────────────────────────────────────────────────────

/// Pick-Radius für Eckpunkt-Drag (Pixel).
pub const VERTEX_PICK_RADIUS_PX: f64 = 15.0;
/// Start-Dreieck A(-4,5), B(4,1), C(-4,-3) im Koordinatensystem (Y nach oben),
/// hier bereits in Weltkoordinaten (Y nach unten).
pub const INITIAL_VERTICES: [[f64; 2]; 3] = [[-4.0, -5.0], [4.0, -1.0], [-4.0, 3.0]];

// ── Numerik ─────────────────────────────────────────────────────────

/// Fläche (Rastereinheiten²), unter der das Dreieck als degeneriert gilt.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-9;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `triangle_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Pixel pro Rasterzelle
    pub grid_size_px: f64,
    /// Rastereinheiten pro Zentimeter
    pub grid_units_per_cm: f64,

    // ── Snapping ────────────────────────────────────────────────
    /// Winkel-Raster in Grad
    pub angle_snap_degrees: f64,
    /// Längen-Raster in Rastereinheiten
    pub length_snap_units: f64,

    // ── Bedienelemente ──────────────────────────────────────────
    /// Abstand Winkel- ↔ Längen-Element (Pixel)
    pub control_spacing_px: f64,
    /// Lücke zur Kantenmitte (Pixel)
    pub control_gap_px: f64,
    /// Icon-Größe (Pixel)
    pub control_icon_size_px: f64,
    /// Trefferradius (Pixel)
    pub control_detect_radius_px: f64,
    /// Hover-Abstand zur Kante (Pixel)
    pub edge_hover_distance_px: f64,

    // ── Eckpunkte ───────────────────────────────────────────────
    /// Pick-Radius für Eckpunkte (Pixel)
    pub vertex_pick_radius_px: f64,
    /// Start-Dreieck in Weltkoordinaten
    #[serde(default = "default_initial_vertices")]
    pub initial_vertices: [[f64; 2]; 3],

    // ── Numerik ─────────────────────────────────────────────────
    /// Flächenschwelle für degenerierte Dreiecke
    #[serde(default = "default_degenerate_area_epsilon")]
    pub degenerate_area_epsilon: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size_px: GRID_SIZE_PX,
            grid_units_per_cm: GRID_UNITS_PER_CM,

            angle_snap_degrees: ANGLE_SNAP_DEGREES,
            length_snap_units: LENGTH_SNAP_UNITS,

            control_spacing_px: CONTROL_SPACING_PX,
            control_gap_px: CONTROL_GAP_PX,
            control_icon_size_px: CONTROL_ICON_SIZE_PX,
            control_detect_radius_px: CONTROL_DETECT_RADIUS_PX,
            edge_hover_distance_px: EDGE_HOVER_DISTANCE_PX,

            vertex_pick_radius_px: VERTEX_PICK_RADIUS_PX,
            initial_vertices: INITIAL_VERTICES,

            degenerate_area_epsilon: DEGENERATE_AREA_EPSILON,
        }
    }
}

/// Serde-Default für `initial_vertices` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_initial_vertices() -> [[f64; 2]; 3] {
    INITIAL_VERTICES
}

/// Serde-Default für `degenerate_area_epsilon` (Abwärtskompatibilität).
fn default_degenerate_area_epsilon() -> f64 {
    DEGENERATE_AREA_EPSILON
}

/// Behält `value`, wenn er endlich und größer als null ist.
fn positive_or_default(name: &str, value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Option {name} ungültig ({value}), verwende Standardwert {default}");
        default
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt nicht endliche oder nicht positive Werte durch ihre Standardwerte.
    ///
    /// Raster, Snapping und Radien werden als Divisor oder Schrittweite
    /// verwendet und müssen daher > 0 sein.
    pub fn sanitized(self) -> Self {
        let epsilon = self.degenerate_area_epsilon;
        let epsilon = if epsilon.is_finite() && epsilon >= 0.0 {
            epsilon
        } else {
            log::warn!("Option degenerate_area_epsilon ungültig ({epsilon}), verwende Standardwert");
            DEGENERATE_AREA_EPSILON
        };
        let initial_vertices = if self.initial_vertices.iter().flatten().all(|v| v.is_finite()) {
            self.initial_vertices
        } else {
            log::warn!("Option initial_vertices nicht endlich, verwende Start-Dreieck");
            INITIAL_VERTICES
        };

        Self {
            grid_size_px: positive_or_default("grid_size_px", self.grid_size_px, GRID_SIZE_PX),
            grid_units_per_cm: positive_or_default(
                "grid_units_per_cm",
                self.grid_units_per_cm,
                GRID_UNITS_PER_CM,
            ),
            angle_snap_degrees: positive_or_default(
                "angle_snap_degrees",
                self.angle_snap_degrees,
                ANGLE_SNAP_DEGREES,
            ),
            length_snap_units: positive_or_default(
                "length_snap_units",
                self.length_snap_units,
                LENGTH_SNAP_UNITS,
            ),
            control_spacing_px: positive_or_default(
                "control_spacing_px",
                self.control_spacing_px,
                CONTROL_SPACING_PX,
            ),
            control_gap_px: positive_or_default(
                "control_gap_px",
                self.control_gap_px,
                CONTROL_GAP_PX,
            ),
            control_icon_size_px: positive_or_default(
                "control_icon_size_px",
                self.control_icon_size_px,
                CONTROL_ICON_SIZE_PX,
            ),
            control_detect_radius_px: positive_or_default(
                "control_detect_radius_px",
                self.control_detect_radius_px,
                CONTROL_DETECT_RADIUS_PX,
            ),
            edge_hover_distance_px: positive_or_default(
                "edge_hover_distance_px",
                self.edge_hover_distance_px,
                EDGE_HOVER_DISTANCE_PX,
            ),
            vertex_pick_radius_px: positive_or_default(
                "vertex_pick_radius_px",
                self.vertex_pick_radius_px,
                VERTEX_PICK_RADIUS_PX,
            ),
            initial_vertices,
            degenerate_area_epsilon: epsilon,
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("triangle_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("triangle_editor.toml")
    }

    /// Rechnet Pixel in Rastereinheiten um.
    #[inline]
    pub fn px_to_world(&self, px: f64) -> f64 {
        px / self.grid_size_px.max(f64::EPSILON)
    }

    /// Hover-Abstand zur Kante in Rastereinheiten.
    pub fn edge_hover_distance(&self) -> f64 {
        self.px_to_world(self.edge_hover_distance_px)
    }

    /// Pick-Radius für Eckpunkte in Rastereinheiten.
    pub fn vertex_pick_radius(&self) -> f64 {
        self.px_to_world(self.vertex_pick_radius_px)
    }

    /// Zentimeter → Rastereinheiten.
    #[inline]
    pub fn cm_to_grid(&self, cm: f64) -> f64 {
        cm * self.grid_units_per_cm
    }
}
