/// Generates a uniform image with the given intensity.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates a light background with one filled dark square,
/// corners (x0, y0) inclusive to (x1, y1) exclusive.
pub fn filled_square_u8(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(x0 < x1 && x1 <= width, "square must fit the image");
    assert!(y0 < y1 && y1 <= height, "square must fit the image");

    let mut img = vec![230u8; width * height];
    for y in y0..y1 {
        for x in x0..x1 {
            img[y * width + x] = 25;
        }
    }
    img
}

/// Two separated filled squares, for contour-cap tests.
pub fn two_squares_u8(width: usize, height: usize) -> Vec<u8> {
    let mut img = vec![230u8; width * height];
    let mut fill = |x0: usize, y0: usize, x1: usize, y1: usize| {
        for y in y0..y1 {
            for x in x0..x1 {
                img[y * width + x] = 25;
            }
        }
    };
    fill(width / 8, height / 8, width * 3 / 8, height * 3 / 8);
    fill(width * 5 / 8, height * 5 / 8, width * 7 / 8, height * 7 / 8);
    img
}
