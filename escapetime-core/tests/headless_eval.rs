use escapetime_core::{intensity, FractalKind, IterationResult, RenderParams, Viewport};

/// Evaluate every pixel of a frame and collect results into a flat Vec.
fn eval_grid(
    params: &RenderParams,
    viewport: &Viewport,
    width: u32,
    height: u32,
) -> Vec<IterationResult> {
    let mut results = Vec::with_capacity((width * height) as usize);
    for py in 0..height {
        for px in 0..width {
            let point = viewport.pixel_to_plane(px as f64, py as f64, width, height);
            results.push(params.evaluate(point));
        }
    }
    results
}

#[test]
fn headless_mandelbrot_frame() {
    let params = RenderParams::default();
    let viewport = Viewport::default();

    let results = eval_grid(&params, &viewport, 100, 100);
    assert_eq!(results.len(), 10_000);

    // The default view should contain both escaped and interior points.
    let escaped = results.iter().filter(|r| r.escaped).count();
    let interior = results.iter().filter(|r| !r.escaped).count();
    assert!(escaped > 0, "should have some escaped points");
    assert!(interior > 0, "should have some interior points");
    assert_eq!(escaped + interior, 10_000);
}

#[test]
fn headless_julia_frame() {
    let params = RenderParams::new(100, FractalKind::Julia(FractalKind::DEFAULT_JULIA_C)).unwrap();
    let viewport = Viewport::default();

    let results = eval_grid(&params, &viewport, 100, 100);

    let escaped = results.iter().filter(|r| r.escaped).count();
    let interior = results.iter().filter(|r| !r.escaped).count();
    assert!(escaped > 0, "should have some escaped points");
    assert!(interior > 0, "should have some interior points");
}

#[test]
fn headless_frame_is_deterministic() {
    let params = RenderParams::default();
    let viewport = Viewport::new(4.0, -0.7435, 0.1314).unwrap();

    let run1 = eval_grid(&params, &viewport, 80, 60);
    let run2 = eval_grid(&params, &viewport, 80, 60);
    assert_eq!(run1, run2, "identical frames must produce identical results");
}

#[test]
fn screen_center_is_interior_at_default_view() {
    // Pixel (400, 400) on an 800×800 window maps to 0 + 0i, the deepest
    // interior point: full-brightness white.
    let params = RenderParams::default();
    let viewport = Viewport::default();
    let point = viewport.pixel_to_plane(400.0, 400.0, 800, 800);
    let result = params.evaluate(point);
    assert_eq!(result.count, params.max_iterations);
    assert!(!result.escaped);
    assert_eq!(intensity(result, params.max_iterations), 1.0);
}

#[test]
fn scroll_applies_before_next_mapping() {
    use escapetime_core::ScrollDirection;

    let mut viewport = Viewport::default();
    let before = viewport.pixel_to_plane(100.0, 100.0, 1024, 786);
    viewport.scroll(ScrollDirection::In, 512.0, 393.0, 1024, 786);
    let after = viewport.pixel_to_plane(100.0, 100.0, 1024, 786);

    // The state update is fully visible to the next frame's mapping.
    assert!(before.re != after.re || before.im != after.im);
}
