//! Output grid dimensions.

/// Calculate the number of output rows for a target column count.
///
/// The row count keeps the source aspect ratio, one character per cell:
/// `floor(target_width * img_height / img_width)`, computed in integers so
/// the truncation is exact. A result of zero (very wide images) is raised
/// to one row so every decodable image renders something.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `target_width` - Desired output width in characters
///
/// # Returns
/// The output height in characters, or 0 if either source dimension is 0.
pub fn output_height(img_width: usize, img_height: usize, target_width: usize) -> usize {
    if img_width == 0 || img_height == 0 {
        return 0;
    }

    let rows = (target_width as u128 * img_height as u128) / img_width as u128;
    (rows as usize).max(1)
}
