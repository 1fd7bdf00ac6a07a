use super::*;

#[test]
fn destination_in_opaque_mask_keeps_pixel() {
    let dst = [12, 34, 56, 255];
    assert_eq!(destination_in(dst, 255), dst);
}

#[test]
fn destination_in_transparent_mask_clears_pixel() {
    assert_eq!(destination_in([12, 34, 56, 255], 0), [0, 0, 0, 0]);
}

#[test]
fn destination_in_scales_alpha_only() {
    let out = destination_in([200, 100, 50, 255], 128);
    assert_eq!(&out[..3], &[200, 100, 50]);
    assert_eq!(out[3], 128);
}

#[test]
fn source_over_opaque_replaces_dst() {
    assert_eq!(source_over([1, 2, 3, 255], [9, 8, 7, 255]), [9, 8, 7, 255]);
}

#[test]
fn source_over_transparent_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(source_over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn source_over_onto_transparent_keeps_src_color() {
    let out = source_over([0, 0, 0, 0], [200, 100, 50, 128]);
    assert_eq!(out[3], 128);
    for (got, want) in out[..3].iter().zip([200u8, 100, 50]) {
        assert!(got.abs_diff(want) <= 2, "{got} vs {want}");
    }
}

#[test]
fn premultiply_roundtrips_opaque() {
    let px = [17, 99, 240, 255];
    assert_eq!(unpremultiply(premultiply(px)), px);
}
