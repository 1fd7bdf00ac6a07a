use super::*;

#[test]
fn floored_mod_wraps_negative_values() {
    assert_eq!(floored_mod(-1.0, 1000.0), 999.0);
    assert_eq!(floored_mod(2500.0, 1000.0), 500.0);
    assert_eq!(floored_mod(-3000.0, 1000.0), 0.0);
    assert_eq!(floored_mod(0.0, 8000.0), 0.0);
}

#[test]
fn clamp_u8_matches_clamped_array_rounding() {
    assert_eq!(clamp_u8(-4.0), 0);
    assert_eq!(clamp_u8(300.0), 255);
    assert_eq!(clamp_u8(f64::NAN), 0);
    assert_eq!(clamp_u8(0.5), 0);
    assert_eq!(clamp_u8(1.5), 2);
    assert_eq!(clamp_u8(127.6), 128);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut a: Vec<usize> = (0..16).collect();
    let mut b = a.clone();
    Rng64::new(7).shuffle(&mut a);
    Rng64::new(7).shuffle(&mut b);
    assert_eq!(a, b);

    let mut sorted = a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..16).collect::<Vec<_>>());
}
