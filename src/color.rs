use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::insights::Severity;
use crate::data::model::Gender;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_color(hue, 0.75, 0.55)
        })
        .collect()
}

fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Fixed category colours
// ---------------------------------------------------------------------------

pub fn churn_color(churn: bool) -> Color32 {
    if churn {
        hsl_color(0.0, 0.75, 0.55)
    } else {
        hsl_color(210.0, 0.75, 0.55)
    }
}

pub fn gender_color(gender: Gender) -> Color32 {
    let palette = generate_palette(Gender::ALL.len());
    palette[gender as usize]
}

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => hsl_color(210.0, 0.6, 0.45),
        Severity::Warning => hsl_color(30.0, 0.85, 0.5),
    }
}

/// Bar colour scaled from green (0% churn) to red (100% churn).
pub fn churn_rate_color(rate: f64) -> Color32 {
    let hue = 120.0 * (1.0 - rate.clamp(0.0, 1.0)) as f32;
    hsl_color(hue, 0.7, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn churn_colours_differ() {
        assert_ne!(churn_color(true), churn_color(false));
        assert_ne!(gender_color(Gender::Male), gender_color(Gender::Female));
    }

    #[test]
    fn churn_rate_colour_is_clamped() {
        assert_eq!(churn_rate_color(-1.0), churn_rate_color(0.0));
        assert_eq!(churn_rate_color(2.0), churn_rate_color(1.0));
    }
}
