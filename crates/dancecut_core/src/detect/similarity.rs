//! Region similarity scoring.
//!
//! Similarity is the mean of per-pixel squared intensity differences. Two
//! regions of different sizes are both resized to the smaller common
//! dimensions before comparing.

use image::imageops::{self, FilterType};
use image::GrayImage;

/// Mean squared difference between two grayscale regions.
///
/// Inputs are never mutated; mismatched dimensions resize into fresh
/// buffers using the minimum width and height of the pair.
pub fn mean_squared_diff(a: &GrayImage, b: &GrayImage) -> f64 {
    if a.dimensions() != b.dimensions() {
        let width = a.width().min(b.width());
        let height = a.height().min(b.height());
        let resized_a = imageops::resize(a, width, height, FilterType::Triangle);
        let resized_b = imageops::resize(b, width, height, FilterType::Triangle);
        pixel_mse(&resized_a, &resized_b)
    } else {
        pixel_mse(a, b)
    }
}

fn pixel_mse(a: &GrayImage, b: &GrayImage) -> f64 {
    let mut sum = 0.0f64;
    for (pixel_a, pixel_b) in a.pixels().zip(b.pixels()) {
        let diff = f64::from(pixel_a.0[0]) - f64::from(pixel_b.0[0]);
        sum += diff * diff;
    }
    sum / (f64::from(a.width()) * f64::from(a.height()))
}

/// Whether every region in the list is visually equal under `tolerance`.
///
/// Adjacent pairs must score at or below the tolerance; with three or more
/// regions the first and last must additionally score strictly below it.
/// Fewer than two regions means there is nothing to compare, which is
/// `false`, not an error.
pub fn regions_similar(regions: &[GrayImage], tolerance: f64) -> bool {
    if regions.len() < 2 {
        return false;
    }

    for pair in regions.windows(2) {
        if mean_squared_diff(&pair[0], &pair[1]) > tolerance {
            return false;
        }
    }

    if regions.len() == 2 {
        return true;
    }

    // The ends of a longer chain must clear the tolerance strictly.
    mean_squared_diff(&regions[0], &regions[regions.len() - 1]) < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn solid(value: u8) -> GrayImage {
        GrayImage::from_pixel(64, 64, Luma([value]))
    }

    #[test]
    fn identical_regions_score_zero() {
        assert_eq!(mean_squared_diff(&solid(128), &solid(128)), 0.0);
    }

    #[test]
    fn uniform_offset_scores_its_square() {
        // Every pixel differs by 4, so the mean squared difference is 16.
        assert_eq!(mean_squared_diff(&solid(0), &solid(4)), 16.0);
        assert_eq!(mean_squared_diff(&solid(4), &solid(0)), 16.0);
    }

    #[test]
    fn mismatched_sizes_resize_to_common_minimum() {
        let small = GrayImage::from_pixel(32, 48, Luma([100]));
        let large = GrayImage::from_pixel(64, 64, Luma([100]));
        assert_eq!(mean_squared_diff(&small, &large), 0.0);
    }

    #[test]
    fn pair_within_tolerance_is_similar() {
        assert!(regions_similar(&[solid(100), solid(102)], 15.0));
    }

    #[test]
    fn pair_beyond_tolerance_is_not_similar() {
        assert!(!regions_similar(&[solid(0), solid(255)], 15.0));
    }

    #[test]
    fn fewer_than_two_regions_is_not_similar() {
        assert!(!regions_similar(&[], 15.0));
        assert!(!regions_similar(&[solid(10)], 15.0));
    }

    #[test]
    fn any_failing_adjacent_pair_short_circuits() {
        // First and last are identical; the middle region breaks the chain.
        let regions = [solid(10), solid(200), solid(10)];
        assert!(!regions_similar(&regions, 15.0));
    }

    #[test]
    fn tolerance_is_inclusive_for_pairs_but_strict_across_ends() {
        // The end regions score exactly the tolerance: a lone pair passes
        // the <= check, while the first-vs-last check of a triple fails.
        let first = solid(0);
        let middle = solid(2);
        let last = solid(4);
        assert_eq!(mean_squared_diff(&first, &last), 16.0);

        assert!(regions_similar(&[first.clone(), last.clone()], 16.0));
        assert!(!regions_similar(&[first, middle, last], 16.0));
    }

    #[test]
    fn three_matching_regions_are_similar() {
        assert!(regions_similar(&[solid(90), solid(91), solid(92)], 15.0));
    }
}
