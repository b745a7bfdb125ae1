//! Layer composition: the digitizing pipeline entry point.
//!
//! Walks the colored layers in order, runs underlay and the selected
//! generator over each sequenced polygon, locks every path with tie
//! stitches, and joins paths and layers with jumps, trims and color
//! changes. The finished sequence is cleaned of unsewable small stitches
//! and terminated with a single end marker.

use stitchkit_core::config::{DigitizeConfig, StitchStyle};
use stitchkit_core::error::DigitizeError;
use stitchkit_core::stitch::{Stitch, StitchKind, StitchStats};
use stitchkit_core::types::{Point, VectorLayer};
use tracing::{debug, info};

use crate::running::generate_running;
use crate::satin::generate_satin;
use crate::sequence::sequence_polygons;
use crate::tatami::generate_tatami;
use crate::ties::{remove_small_stitches, tie_in, tie_off};
use crate::underlay::{generate_region_underlay, generate_underlay};

/// Digitizes a layered vector design into a machine stitch sequence.
///
/// Degenerate paths are skipped silently; the pipeline only fails on
/// rejected configuration or when the whole design yields no visible
/// stitches.
pub fn digitize(
    layers: &[VectorLayer],
    config: &DigitizeConfig,
) -> Result<Vec<Stitch>, DigitizeError> {
    config.validate()?;

    let mut design: Vec<Stitch> = Vec::new();

    for (layer_index, layer) in layers.iter().enumerate() {
        let mut layer_stitches: Vec<Stitch> = Vec::new();

        // A fill layer's contours form one even-odd region and pass to the
        // fill generator together, so holes stay open. Outline styles walk
        // each polygon separately, nearest first.
        let regions: Vec<Vec<Vec<Point>>> = if config.stitch_type == StitchStyle::Tatami {
            if layer.polygons.is_empty() {
                Vec::new()
            } else {
                vec![layer.polygons.clone()]
            }
        } else {
            sequence_polygons(&layer.polygons)
                .into_iter()
                .map(|polygon| vec![polygon])
                .collect()
        };

        for region in &regions {
            let mut underlay = if config.stitch_type == StitchStyle::Tatami {
                generate_region_underlay(region, config)
            } else {
                generate_underlay(&region[0], config)
            };
            tie_in(&mut underlay);

            let mut main = match config.stitch_type {
                StitchStyle::Running => generate_running(&region[0], config),
                StitchStyle::Satin => generate_satin(&region[0], config),
                StitchStyle::Tatami => generate_tatami(region, config),
            };
            if underlay.is_empty() && main.is_empty() {
                debug!(layer = layer_index, "path yielded no stitches, skipping");
                continue;
            }
            if underlay.is_empty() {
                tie_in(&mut main);
            }
            tie_off(&mut main);

            let mut path = underlay;
            path.append(&mut main);
            for stitch in &mut path {
                stitch.color_index = layer_index;
                stitch.color_hex = layer.color_hex.clone();
            }

            // Connect to the layer's previous path: trim first when the
            // frame has to travel far enough that loose thread would drag.
            // The previous path's tie-off may have cut the thread already.
            if let (Some(prev), Some(first)) = (layer_stitches.last(), path.first()) {
                let gap = prev.distance_to(first);
                let cut_needed =
                    gap > config.trim_jump_distance_mm && prev.kind != StitchKind::Trim;
                let (prev_x, prev_y) = (prev.x, prev.y);
                let (first_x, first_y) = (first.x, first.y);
                if cut_needed {
                    let mut trim = Stitch::trim(prev_x, prev_y);
                    trim.color_index = layer_index;
                    trim.color_hex = layer.color_hex.clone();
                    layer_stitches.push(trim);
                }
                let mut jump = Stitch::jump(first_x, first_y);
                jump.color_index = layer_index;
                jump.color_hex = layer.color_hex.clone();
                layer_stitches.push(jump);
            }
            layer_stitches.extend(path);
        }

        if layer_stitches.is_empty() {
            continue;
        }
        debug!(
            layer = layer_index,
            color = %layer.color_hex,
            stitches = layer_stitches.len(),
            "layer composed"
        );

        // Between layers the machine stops for an operator color swap, then
        // jumps to where the new layer begins.
        if let Some(prev) = design.last() {
            let mut stop = Stitch::color_change(prev.x, prev.y);
            stop.color_index = layer_index;
            stop.color_hex = layer.color_hex.clone();
            design.push(stop);

            let first = &layer_stitches[0];
            let mut jump = Stitch::jump(first.x, first.y);
            jump.color_index = layer_index;
            jump.color_hex = layer.color_hex.clone();
            design.push(jump);
        }
        design.extend(layer_stitches);
    }

    let mut design = remove_small_stitches(design, config.min_stitch_length_mm);
    if !design
        .iter()
        .any(|s| s.kind == StitchKind::Stitch && !s.is_structure)
    {
        return Err(DigitizeError::EmptyDesign);
    }

    let last = design.last().expect("visible stitch implies non-empty design");
    let mut end = Stitch::end(last.x, last.y);
    end.color_index = last.color_index;
    end.color_hex = last.color_hex.clone();
    design.push(end);

    let stats = StitchStats::from_stitches(&design);
    info!(
        stitches = stats.penetrations,
        jumps = stats.jumps,
        trims = stats.trims,
        color_changes = stats.color_changes,
        width_mm = stats.width(),
        height_mm = stats.height(),
        "design digitized"
    );

    Ok(design)
}
