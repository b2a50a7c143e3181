pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Premultiply a straight-alpha channel value.
pub(crate) fn premul_u8(c: u8, a: u8) -> u8 {
    mul_div255_u16(u16::from(c), u16::from(a)) as u8
}

/// Premultiply straight RGBA8 pixels.
pub(crate) fn premultiply_rgba8(straight: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(straight.len());
    for px in straight.chunks_exact(4) {
        let a = px[3];
        out.extend_from_slice(&[premul_u8(px[0], a), premul_u8(px[1], a), premul_u8(px[2], a), a]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
