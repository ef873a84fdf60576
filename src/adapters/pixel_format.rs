//! Pixel format conversion for framebuffer presenters.

/// Expands packed RGB into RGBA with an opaque alpha channel.
///
/// # Panics
/// Panics if `src` is not whole RGB pixels or `dst` does not hold exactly
/// one RGBA pixel per source pixel.
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / 3) * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }
}
