use backdrop_core::*;
use glam::DVec2;

fn layout() -> SurfaceLayout {
    SurfaceLayout {
        offscreen: SurfaceSize::new(8, 6),
        visible: SurfaceSize::new(16, 12),
    }
}

fn filter(global_alpha: f64) -> PresentFilter {
    PresentFilter {
        blur_px: 0,
        saturate_percent: 100,
        global_alpha,
    }
}

#[test]
fn new_target_allocates_both_surfaces_transparent() {
    let t = PixelTarget::new(layout());
    assert_eq!(t.layout(), layout());
    assert_eq!(t.offscreen_pixels().len(), 48);
    assert_eq!(t.visible_pixels().len(), 192);
    assert!(t.offscreen_pixels().iter().all(|p| *p == [0.0; 4]));
    assert!(t.visible_pixels().iter().all(|p| *p == [0.0; 4]));
}

#[test]
fn trail_fill_lays_a_translucent_black_veil() {
    let mut t = PixelTarget::new(layout());
    t.trail_fill(constants::TRAIL_ALPHA);
    for p in t.offscreen_pixels() {
        assert_eq!(&p[..3], &[0.0; 3]);
        assert!((p[3] - 0.06).abs() < 1e-6);
    }
}

#[test]
fn glow_lights_its_centre_and_leaves_far_pixels_alone() {
    let mut t = PixelTarget::new(layout());
    t.radial_glow(&RadialGlow {
        center: DVec2::new(4.0, 3.0),
        inner_radius: 0.4,
        radius: 2.0,
        color: Hsl::new(0.0, 0.0, 100.0),
        alpha: 0.5,
    });
    let px = t.offscreen_pixels();
    let centre = px[2 * 8 + 3];
    assert!(centre[3] > 0.3 && centre[3] <= 0.5, "{centre:?}");
    // white, premultiplied
    assert!((centre[0] - centre[3]).abs() < 1e-6);
    assert_eq!(px[0], [0.0; 4]);
    assert_eq!(px[47], [0.0; 4]);
}

#[test]
fn present_upscales_with_global_alpha() {
    let mut t = PixelTarget::new(layout());
    t.trail_fill(0.5);
    t.present(&filter(0.5));
    for p in t.visible_pixels() {
        assert!((p[3] - 0.25).abs() < 1e-6);
    }
    assert!(t.visible_rgba8().chunks(4).all(|c| c == [0u8, 0, 0, 64].as_slice()));
}

#[test]
fn resize_reallocates_and_clears() {
    let mut t = PixelTarget::new(layout());
    t.trail_fill(0.5);
    let bigger = SurfaceLayout {
        offscreen: SurfaceSize::new(10, 10),
        visible: SurfaceSize::new(20, 20),
    };
    t.resize(bigger);
    assert_eq!(t.layout(), bigger);
    assert_eq!(t.offscreen_pixels().len(), 100);
    assert!(t.offscreen_pixels().iter().all(|p| p[3] == 0.0));
}
