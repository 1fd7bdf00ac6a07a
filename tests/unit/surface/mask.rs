use super::*;

fn encode_png(img: &image::RgbaImage) -> Vec<u8> {
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn decodes_png_bytes_straight_alpha() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
    img.put_pixel(1, 0, image::Rgba([0, 0, 0, 0]));

    let mask = MaskImage::from_image_bytes(&encode_png(&img)).unwrap();
    assert_eq!(mask.dimensions(), (2, 1));
    assert_eq!(&mask.rgba8()[..4], &[10, 20, 30, 255]);
    assert_eq!(mask.rgba8()[7], 0);
}

#[test]
fn rejects_garbage_bytes() {
    assert!(MaskImage::from_image_bytes(b"not an image").is_err());
}

#[test]
fn rasterizes_svg_at_requested_size() {
    let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect x="0" y="0" width="5" height="10" fill="black"/>
    </svg>"#;
    let mask = MaskImage::from_svg_bytes(svg, 20, 20).unwrap();
    assert_eq!(mask.dimensions(), (20, 20));

    let alpha = |x: usize, y: usize| mask.rgba8()[(y * 20 + x) * 4 + 3];
    assert_eq!(alpha(2, 10), 255);
    assert_eq!(alpha(17, 10), 0);
}

#[test]
fn empty_mask_has_no_pixels() {
    let mask = MaskImage::empty();
    assert_eq!(mask.dimensions(), (0, 0));
    assert!(mask.rgba8().is_empty());
}
