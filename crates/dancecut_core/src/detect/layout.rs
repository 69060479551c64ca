//! Split-layout classification.
//!
//! A marker frame tiles the same picture three times across each of the top
//! two horizontal thirds. The bottom third carries overlay graphics and is
//! ignored.

use image::imageops;
use image::DynamicImage;

use super::similarity::regions_similar;

/// Whether `frame` shows the three-column marker layout in both of the top
/// two horizontal bands.
///
/// `column_margin` pixels are trimmed from each side of the two inner column
/// boundaries so compression seams never leak into the comparison; the
/// frame's outer edges stay untouched. Dimensions are assumed large enough
/// that the thirds and margins stay non-empty.
pub fn is_split_in_three(frame: &DynamicImage, column_margin: u32, tolerance: f64) -> bool {
    let gray = frame.to_luma8();
    let (width, height) = gray.dimensions();
    let third = width / 3;

    for band in 0..2u32 {
        let top = band * height / 3;
        let band_height = (band + 1) * height / 3 - top;

        let columns = [
            imageops::crop_imm(&gray, 0, top, third - column_margin, band_height).to_image(),
            imageops::crop_imm(
                &gray,
                third + column_margin,
                top,
                third - 2 * column_margin,
                band_height,
            )
            .to_image(),
            imageops::crop_imm(
                &gray,
                2 * third + column_margin,
                top,
                width - 2 * third - column_margin,
                band_height,
            )
            .to_image(),
        ];

        if !regions_similar(&columns, tolerance) {
            return false;
        }
    }

    true
}
