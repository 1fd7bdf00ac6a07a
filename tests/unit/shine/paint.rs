use super::*;
use crate::surface::canvas::PixmapSurface;

fn scenario() -> ShineOverrides {
    ShineOverrides {
        base: Some([255, 255, 255]),
        shine: Some([0, 0, 0]),
        cycle_duration: Some(1000.0),
        flash_window: Some(0.1),
        softness: Some(0.15),
    }
}

fn frame(w: u32, h: u32, t: f64, o: &ShineOverrides) -> ImageData {
    let mut buf = ImageData::new(w, h).unwrap();
    render_shine(&mut buf, t, &o.resolve().unwrap()).unwrap();
    buf
}

fn opaque_mask(w: u32, h: u32) -> ImageData {
    ImageData::from_raw(w, h, [0, 0, 0, 255].repeat((w * h) as usize)).unwrap()
}

#[test]
fn two_pixel_scenario_right_pixel_is_darker() {
    let buf = frame(2, 1, 0.0, &scenario());
    let left = buf.pixel(0, 0).unwrap();
    let right = buf.pixel(1, 0).unwrap();
    assert!(right[0] < left[0], "left={left:?} right={right:?}");
    assert_eq!(left[3], 255);
    assert_eq!(right[3], 255);
}

#[test]
fn output_is_deterministic() {
    let o = scenario();
    assert_eq!(frame(8, 5, 42.0, &o), frame(8, 5, 42.0, &o));
}

#[test]
fn whole_cycles_do_not_change_the_frame() {
    let o = scenario();
    let a = frame(6, 4, 37.5, &o);
    for k in [1.0, 3.0, -2.0] {
        assert_eq!(a, frame(6, 4, 37.5 + k * 1000.0, &o), "k={k}");
    }
}

#[test]
fn negative_time_wraps_like_floored_modulo() {
    let o = ShineOverrides {
        flash_window: Some(1.0),
        ..scenario()
    };
    assert_eq!(frame(5, 3, -1.0, &o), frame(5, 3, 999.0, &o));
}

#[test]
fn outside_flash_window_every_pixel_is_base() {
    let o = ShineOverrides {
        base: Some([12, 200, 99]),
        shine: Some([250, 0, 3]),
        ..scenario()
    };
    let buf = frame(7, 7, 500.0, &o);
    for px in buf.data.chunks_exact(4) {
        assert_eq!(px, &[12, 200, 99, 255]);
    }
}

#[test]
fn cycle_start_peaks_at_smallest_diagonal() {
    let buf = frame(4, 4, 0.0, &scenario());
    let darkest = buf
        .data
        .chunks_exact(4)
        .enumerate()
        .min_by_key(|(_, px)| px[0])
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(darkest, 3, "top-right pixel has the smallest diagonal");
}

#[test]
fn small_softness_approaches_shine_color() {
    let o = ShineOverrides {
        softness: Some(1e-3),
        ..scenario()
    };
    // At t = 50 the band center sits at diag 1.0, on the top-left pixel.
    let buf = frame(4, 4, 50.0, &o);
    assert_eq!(buf.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(buf.pixel(3, 0), Some([255, 255, 255, 255]));
    assert_eq!(buf.pixel(0, 3), Some([255, 255, 255, 255]));
}

#[test]
fn flash_window_end_is_inclusive() {
    let opts = scenario().resolve().unwrap();
    let s = SweepState::at(100.0, &opts);
    assert!(s.active);
    assert_eq!(s.center, 2.0);

    let s = SweepState::at(101.0, &opts);
    assert!(!s.active);
    assert_eq!(s.intensity(0.0, opts.softness), 0.0);
}

#[test]
fn diagonal_spans_top_right_to_bottom_left() {
    assert_eq!(diagonal(0, 0, 2, 1), 1.0);
    assert_eq!(diagonal(1, 0, 2, 1), 0.5);
    assert_eq!(diagonal(0, 1, 4, 2), 1.5);
}

#[test]
fn supplied_buffer_is_reused() {
    let mut surface = PixmapSurface::new(3, 2).unwrap();
    let buf = ImageData::new(3, 2).unwrap();
    let ptr = buf.data.as_ptr();
    let out = paint(&mut surface, 0.0, &opaque_mask(3, 2), Some(buf), None).unwrap();
    assert_eq!(out.data.as_ptr(), ptr);
}

#[test]
fn mismatched_buffer_is_replaced() {
    let mut surface = PixmapSurface::new(3, 2).unwrap();
    let out = paint(
        &mut surface,
        0.0,
        &opaque_mask(3, 2),
        Some(ImageData::new(1, 1).unwrap()),
        None,
    )
    .unwrap();
    assert_eq!((out.width, out.height), (3, 2));
}

#[test]
fn returned_buffer_is_the_unmasked_frame() {
    let o = scenario();
    let mut surface = PixmapSurface::new(4, 3).unwrap();
    let out = paint(
        &mut surface,
        20.0,
        &ImageData::new(4, 3).unwrap(),
        None,
        Some(&o),
    )
    .unwrap();
    assert_eq!(out, frame(4, 3, 20.0, &o));
}

#[test]
fn mask_limits_shine_to_opaque_region() {
    let mut surface = PixmapSurface::new(2, 1).unwrap();
    let mask = ImageData::from_raw(2, 1, vec![0, 0, 0, 255, 0, 0, 0, 0]).unwrap();
    let out = paint(&mut surface, 0.0, &mask, None, Some(&scenario())).unwrap();

    assert_eq!(surface.image_data().pixel(0, 0), out.pixel(0, 0));
    assert_eq!(surface.image_data().pixel(1, 0), Some([0, 0, 0, 0]));
    assert_eq!(surface.composite_op(), CompositeOp::SourceOver);
}

#[test]
fn previous_frame_is_cleared() {
    let mut surface = PixmapSurface::new(2, 2).unwrap();
    paint(&mut surface, 0.0, &opaque_mask(2, 2), None, None).unwrap();
    paint(&mut surface, 0.0, &ImageData::new(0, 0).unwrap(), None, None).unwrap();
    assert!(surface.image_data().data.iter().all(|&b| b == 0));
}

#[test]
fn zero_sized_canvas_yields_empty_buffer() {
    let mut surface = PixmapSurface::new(0, 0).unwrap();
    let out = paint(&mut surface, 123.0, &opaque_mask(1, 1), None, None).unwrap();
    assert!(out.data.is_empty());
}

#[test]
fn invalid_options_fail_fast() {
    let mut surface = PixmapSurface::new(1, 1).unwrap();
    let o = ShineOverrides {
        cycle_duration: Some(0.0),
        ..ShineOverrides::default()
    };
    let err = paint(&mut surface, 0.0, &opaque_mask(1, 1), None, Some(&o)).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::SheenError::InvalidArgument(_)
    ));
}

#[test]
fn painter_keeps_one_buffer_across_frames() {
    let mut painter = ShinePainter::new(scenario()).unwrap();
    let mut surface = PixmapSurface::new(3, 3).unwrap();
    let mask = opaque_mask(3, 3);

    let first = painter.paint_frame(&mut surface, 0.0, &mask).unwrap().data.as_ptr();
    let second = painter.paint_frame(&mut surface, 16.0, &mask).unwrap().data.as_ptr();
    assert_eq!(first, second);
    assert_eq!(painter.options().cycle_duration, 1000.0);
}

#[test]
fn malformed_buffer_is_rejected_not_panicking() {
    let opts = scenario().resolve().unwrap();
    let mut zero_width = ImageData {
        width: 0,
        height: 1,
        data: vec![0; 4],
    };
    let err = render_shine(&mut zero_width, 0.0, &opts).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::SheenError::InvalidArgument(_)
    ));

    let mut short = ImageData {
        width: 2,
        height: 2,
        data: vec![0; 12],
    };
    assert!(render_shine(&mut short, 0.0, &opts).is_err());
}

#[test]
fn paint_rejects_matching_size_buffer_with_stray_bytes() {
    let mut surface = PixmapSurface::new(0, 1).unwrap();
    let buf = ImageData {
        width: 0,
        height: 1,
        data: vec![0; 4],
    };
    let err = paint(&mut surface, 0.0, &opaque_mask(1, 1), Some(buf), None).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::SheenError::InvalidArgument(_)
    ));
}
