use backdrop_core::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inputs(time: f64, energy: f64) -> FieldInputs {
    FieldInputs {
        time,
        pointer: DVec2::splat(0.5),
        energy,
        intensity: 0.9,
        surface: DVec2::new(320.0, 180.0),
    }
}

#[test]
fn spawned_blobs_are_within_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let blobs = spawn_blobs(&mut rng);
    assert_eq!(blobs.len(), 6);
    for b in &blobs {
        assert!((0.0..1000.0).contains(&b.phase));
        assert!((0.22..0.40).contains(&b.radius));
    }
}

#[test]
fn samples_are_pure_functions_of_their_inputs() {
    let noise = SimplexNoise::default();
    let palette = Palette::brand();
    let blobs = spawn_blobs(&mut StdRng::seed_from_u64(1));
    let a: Vec<_> = sample_field(&noise, &palette, &blobs, inputs(3.5, 0.2)).collect();
    let b: Vec<_> = sample_field(&noise, &palette, &blobs, inputs(3.5, 0.2)).collect();
    assert_eq!(a, b);
    let c: Vec<_> = sample_field(&noise, &palette, &blobs, inputs(3.6, 0.2)).collect();
    assert_ne!(a, c);
}

#[test]
fn alpha_follows_energy_and_intensity() {
    let noise = SimplexNoise::default();
    let palette = Palette::brand();
    let blob = Blob { phase: 10.0, radius: 0.3 };
    let calm = sample_blob(&noise, &palette, 0, &blob, &inputs(1.0, 0.0));
    let busy = sample_blob(&noise, &palette, 0, &blob, &inputs(1.0, 1.0));
    assert!((calm.alpha - 0.10 * 0.9).abs() < 1e-12);
    assert!((busy.alpha - 0.15 * 0.9).abs() < 1e-12);
    assert!((busy.radius / calm.radius - 1.25).abs() < 1e-12);
    assert_eq!(busy.center, calm.center);
}

#[test]
fn radius_follows_breathing_term() {
    let noise = SimplexNoise::default();
    let palette = Palette::brand();
    let blob = Blob { phase: 0.0, radius: 0.25 };
    let s = sample_blob(&noise, &palette, 2, &blob, &inputs(0.0, 0.0));
    let expected = 180.0 * 0.25 * (0.85 + 0.35 * (2.0f64).sin());
    assert!((s.radius - expected).abs() < 1e-9);
}

#[test]
fn centre_sits_on_orbit_around_surface_middle() {
    let noise = SimplexNoise::default();
    let palette = Palette::brand();
    let blob = Blob { phase: 42.0, radius: 0.3 };
    let s = sample_blob(&noise, &palette, 1, &blob, &inputs(0.7, 0.0));
    let unit = s.center / DVec2::new(320.0, 180.0) - DVec2::splat(0.5);
    assert!((unit.length() - 0.3).abs() < 1e-9);
}

#[test]
fn colour_at_time_zero_blends_adjacent_palette_entries() {
    let noise = SimplexNoise::default();
    let palette = Palette::brand();
    let blob = Blob { phase: 0.0, radius: 0.3 };
    let s = sample_blob(&noise, &palette, 0, &blob, &inputs(0.0, 0.0));
    // sin(0) = 0 -> halfway between the first two entries
    let expected = lerp_hsl(palette.0[0], palette.0[1], 0.5);
    assert!((s.color.h - expected.h).abs() < 1e-9);
    assert!((s.color.s - expected.s).abs() < 1e-9);
}
