//! Region-of-interest crop: keep the lower half of the edge map.
//!
//! Lane lines live on the driving surface in front of the vehicle, so
//! everything above the vertical midpoint is zeroed before line detection.
//! The region is fixed: full width, rows `h/2..h`.
use image::GrayImage;

/// Zero all rows above `height / 2` in place.
pub fn mask_lower_half(edges: &mut GrayImage) {
    let cutoff = edges.height() / 2;
    let w = edges.width() as usize;
    for (y, row) in edges.chunks_mut(w).enumerate() {
        if (y as u32) < cutoff {
            row.fill(0);
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn zeroes_upper_half_keeps_lower() {
        let mut edges = GrayImage::from_pixel(8, 6, Luma([255]));
        mask_lower_half(&mut edges);

        for y in 0..3 {
            for x in 0..8 {
                assert_eq!(edges.get_pixel(x, y).0[0], 0, "row {y} should be cleared");
            }
        }
        for y in 3..6 {
            for x in 0..8 {
                assert_eq!(edges.get_pixel(x, y).0[0], 255, "row {y} should survive");
            }
        }
    }

    #[test]
    fn odd_height_splits_at_floor() {
        let mut edges = GrayImage::from_pixel(4, 5, Luma([255]));
        mask_lower_half(&mut edges);
        // cutoff = 2: rows 0..2 cleared, rows 2..5 kept.
        assert_eq!(edges.get_pixel(0, 1).0[0], 0);
        assert_eq!(edges.get_pixel(0, 2).0[0], 255);
    }
}
