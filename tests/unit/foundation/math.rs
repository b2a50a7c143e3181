use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
}

#[test]
fn premul_scales_by_alpha() {
    assert_eq!(premul_u8(200, 255), 200);
    assert_eq!(premul_u8(200, 0), 0);
    assert_eq!(premul_u8(255, 51), 51);
}

#[test]
fn premultiply_rgba8_keeps_alpha() {
    let px = premultiply_rgba8(&[255, 100, 0, 128, 9, 9, 9, 0]);
    assert_eq!(px, vec![128, 50, 0, 128, 0, 0, 0, 0]);
}
