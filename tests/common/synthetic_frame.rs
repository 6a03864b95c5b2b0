/// Paints straight guide lines of one color onto a black packed-RGB frame.
pub fn frame_with_lines(
    width: usize,
    height: usize,
    color: [u8; 3],
    lines: &[((f32, f32), (f32, f32))],
    thickness: f32,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    assert!(thickness > 0.0, "line thickness must be positive");

    let mut data = vec![0u8; width * height * 3];
    let half = (thickness / 2.0).ceil() as i32;

    for &((x1, y1), (x2, y2)) in lines {
        let steps = ((x2 - x1).hypot(y2 - y1).ceil() as usize) * 2 + 1;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let cx = (x1 + (x2 - x1) * t).round() as i32;
            let cy = (y1 + (y2 - y1) * t).round() as i32;
            for dy in -half..=half {
                for dx in -half..=half {
                    let (px, py) = (cx + dx, cy + dy);
                    if px < 0 || px >= width as i32 || py < 0 || py >= height as i32 {
                        continue;
                    }
                    let idx = (py as usize * width + px as usize) * 3;
                    data[idx..idx + 3].copy_from_slice(&color);
                }
            }
        }
    }
    data
}
