use backdrop_core::*;
use glam::DVec2;

#[test]
fn pointer_is_normalised_and_clamped() {
    let vp = Viewport::new(800.0, 400.0);
    assert_eq!(normalize_pointer(400.0, 100.0, vp), DVec2::new(0.5, 0.25));
    assert_eq!(normalize_pointer(-20.0, 900.0, vp), DVec2::new(0.0, 1.0));
    assert_eq!(
        normalize_pointer(10.0, 10.0, Viewport::new(0.0, 0.0)),
        DVec2::splat(0.5)
    );
}

#[test]
fn pointer_velocity_is_delta_between_moves() {
    let vp = Viewport::new(100.0, 100.0);
    let mut p = PointerState::default();
    assert_eq!(p.pos, DVec2::splat(0.5));
    p.on_move(70.0, 20.0, vp);
    assert!((p.vel - DVec2::new(0.2, -0.3)).length() < 1e-12);
    p.on_move(70.0, 20.0, vp);
    assert_eq!(p.vel, DVec2::ZERO);
}

#[test]
fn energy_matches_closed_form_recurrence() {
    let vh = 800.0;
    let gain = 0.8;
    let offsets = [0.0, 120.0, 40.0, 900.0, 905.0, 2000.0, 1990.0];
    let mut s = ScrollState::new(0.0);
    for &y in &offsets[1..] {
        s.on_scroll(y, vh, gain);
    }

    // E_n = sum_k 0.9^(n-k) * 0.6 * min(1, |dy_k| / vh * (0.5 + 0.5 * gain))
    let n = offsets.len() - 1;
    let mut expected = 0.0;
    for k in 1..=n {
        let dy = (offsets[k] - offsets[k - 1]).abs();
        let impulse = (dy / vh * (0.5 + 0.5 * gain)).min(1.0) * 0.6;
        expected += 0.9f64.powi((n - k) as i32) * impulse;
    }
    assert!((s.raw_energy() - expected).abs() < 1e-12);
    assert_eq!(s.offset, 1990.0);
}

#[test]
fn single_huge_scroll_saturates_the_impulse() {
    let mut s = ScrollState::new(0.0);
    s.on_scroll(1.0e6, 500.0, 1.0);
    assert!((s.raw_energy() - 0.6).abs() < 1e-12);
}

#[test]
fn energy_read_is_clamped_to_unit_range() {
    let mut s = ScrollState::new(0.0);
    let mut y = 0.0;
    for _ in 0..60 {
        y += 10_000.0;
        s.on_scroll(y, 500.0, 1.0);
    }
    assert!(s.raw_energy() > 1.0);
    assert_eq!(s.energy(), 1.0);
}

#[test]
fn zero_height_viewport_does_not_divide_by_zero() {
    let e = step_energy(0.0, 0.5, 0.0, 1.0);
    assert!((e - 0.3).abs() < 1e-12);
}
