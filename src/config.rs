//! Editor configuration.
//!
//! Every tunable the engine reads lives here. The defaults describe the
//! campus map editor: a 1200×700 canvas over a 2000×4000 map image.

use std::path::PathBuf;

/// Configuration for the editing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Width of the canvas area in screen pixels.
    pub viewport_width: f64,
    /// Height of the canvas area in screen pixels (excludes any toolbar).
    pub viewport_height: f64,
    /// Width of the background image in world units.
    pub image_width: f64,
    /// Height of the background image in world units.
    pub image_height: f64,
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per scroll-wheel notch.
    pub zoom_step: f64,
    /// Keyboard pan distance in screen pixels (divided by zoom when applied).
    pub pan_step: f64,
    /// Minimum overlap, in world units, kept between the visible area and the image.
    pub clamp_padding: f64,
    /// Node hit radius in world units.
    pub node_hit_radius: f64,
    /// Edge hit distance in screen pixels.
    pub edge_hit_threshold: f64,
    pub history_capacity: usize,
    /// Source read by the `Import` command.
    pub import_path: PathBuf,
    /// Destination written by the `Export` command.
    pub export_path: PathBuf,
    /// Map expression the exported registry lines call `.set` on.
    pub registry: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1200.0,
            viewport_height: 700.0,
            image_width: 2000.0,
            image_height: 4000.0,
            initial_zoom: 0.5,
            min_zoom: 0.1,
            max_zoom: 3.0,
            zoom_step: 0.1,
            pan_step: 200.0,
            clamp_padding: 15.0,
            node_hit_radius: 10.0,
            edge_hit_threshold: 12.0,
            history_capacity: 50,
            import_path: PathBuf::from("storage/graphDatabase.js"),
            export_path: PathBuf::from("export/graphDatabase.js"),
            registry: "this.utechgraph".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
