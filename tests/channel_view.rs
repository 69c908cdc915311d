use livescope::data::view::{pixel_y, ChannelView};

#[test]
fn default_view_is_the_base_range() {
    let view = ChannelView::new();
    assert_eq!(
        view.view_range(-10.0, 10.0),
        (-10.0, 10.0),
        "zoom 0 and offset 0 should reproduce the base range exactly"
    );
}

#[test]
fn five_zoom_steps_halve_the_range() {
    let view = ChannelView { zoom: 5, offset: 0 };
    assert_eq!(
        view.view_range(-10.0, 10.0),
        (-5.0, 5.0),
        "five notches double the magnification, centered on the base range"
    );
}

#[test]
fn every_zoom_step_strictly_narrows() {
    let mut previous = f64::INFINITY;
    for zoom in 0..=10 {
        let view = ChannelView { zoom, offset: 0 };
        let (lo, hi) = view.view_range(-10.0, 10.0);
        assert!(
            hi - lo < previous,
            "zoom {zoom} should show less height than zoom {}",
            zoom - 1
        );
        previous = hi - lo;
    }
}

#[test]
fn five_negative_zoom_steps_double_the_range() {
    let view = ChannelView { zoom: -5, offset: 0 };
    assert_eq!(
        view.view_range(-10.0, 10.0),
        (-20.0, 20.0),
        "zooming out widens the window around the same center"
    );
}

#[test]
fn offset_shifts_by_tenths_of_the_visible_height() {
    let up = ChannelView { zoom: 0, offset: 10 };
    assert_eq!(
        up.view_range(-10.0, 10.0),
        (10.0, 30.0),
        "ten positive notches move the window up by one full height"
    );

    let down = ChannelView { zoom: 0, offset: -10 };
    assert_eq!(
        down.view_range(-10.0, 10.0),
        (-30.0, -10.0),
        "negative offset mirrors the shift"
    );
}

#[test]
fn opposite_offsets_mirror_around_the_base_center() {
    let up = ChannelView { zoom: 0, offset: 3 };
    let down = ChannelView { zoom: 0, offset: -3 };
    let (up_lo, up_hi) = up.view_range(-10.0, 10.0);
    let (down_lo, down_hi) = down.view_range(-10.0, 10.0);
    // Base center is 0, so mirroring just negates and swaps the bounds.
    assert_eq!((up_lo, up_hi), (-4.0, 16.0));
    assert_eq!((down_lo, down_hi), (-up_hi, -up_lo));
}

#[test]
fn zoom_and_offset_combine() {
    let view = ChannelView { zoom: 5, offset: 5 };
    // Zoomed height 10, shifted up by half of it.
    assert_eq!(view.view_range(0.0, 20.0), (10.0, 20.0));
}

#[test]
fn extreme_zoom_keeps_bounds_ordered_and_finite() {
    let view = ChannelView { zoom: 1000, offset: 0 };
    let (lo, hi) = view.view_range(-1.0, 1.0);
    assert!(lo.is_finite() && hi.is_finite());
    assert!(
        hi > lo,
        "deep zoom must never collapse the range, got ({lo}, {hi})"
    );
}

#[test]
fn pixel_y_maps_the_range_onto_the_canvas() {
    let range = (0.0, 10.0);
    assert_eq!(pixel_y(0.0, range, 100.0), 100.0, "view_min sits on the bottom edge");
    assert_eq!(pixel_y(10.0, range, 100.0), 0.0, "view_max sits on the top edge");
    assert_eq!(pixel_y(5.0, range, 100.0), 50.0);
}

#[test]
fn pixel_y_leaves_out_of_range_values_off_canvas() {
    let range = (0.0, 10.0);
    assert_eq!(
        pixel_y(15.0, range, 100.0),
        -50.0,
        "values above the window land above the canvas, not clamped"
    );
    assert_eq!(pixel_y(-5.0, range, 100.0), 150.0);
}
