use crate::foundation::math::mul_div255_u8;

pub type StraightRgba8 = [u8; 4];
pub type PremulRgba8 = [u8; 4];

pub fn premultiply(px: StraightRgba8) -> PremulRgba8 {
    let a = u16::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    [
        mul_div255_u8(u16::from(px[0]), a),
        mul_div255_u8(u16::from(px[1]), a),
        mul_div255_u8(u16::from(px[2]), a),
        px[3],
    ]
}

pub fn unpremultiply(px: PremulRgba8) -> StraightRgba8 {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| (((u32::from(c) * 255) + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Source-over for straight-alpha pixels (the surface's storage format).
pub fn source_over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    if src[3] == 255 {
        return src;
    }
    if src[3] == 0 {
        return dst;
    }
    unpremultiply(over(premultiply(dst), premultiply(src)))
}

/// Destination-in: keep the destination where the source has coverage.
///
/// Color is untouched in straight alpha; fully cleared pixels are zeroed.
pub fn destination_in(dst: StraightRgba8, src_alpha: u8) -> StraightRgba8 {
    let a = mul_div255_u8(u16::from(dst[3]), u16::from(src_alpha));
    if a == 0 {
        return [0, 0, 0, 0];
    }
    [dst[0], dst[1], dst[2], a]
}

#[cfg(test)]
#[path = "../../tests/unit/surface/composite.rs"]
mod tests;
