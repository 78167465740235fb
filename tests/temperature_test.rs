use image::{Rgb, RgbImage};
use thermolabel::{index_to_celsius, jet_colormap, max_temperature, ColorIndexTable};

fn jet_pixel(index: u8) -> Rgb<u8> {
    let (r, g, b) = jet_colormap()[index as usize];
    Rgb([r, g, b])
}

#[test]
fn picks_the_hottest_decodable_pixel() {
    let table = ColorIndexTable::jet();
    let mut img = RgbImage::from_pixel(4, 4, Rgb([7, 7, 7]));
    img.put_pixel(0, 0, jet_pixel(10));
    img.put_pixel(3, 1, jet_pixel(200));
    img.put_pixel(2, 3, jet_pixel(64));
    assert_eq!(max_temperature(&img, &table), Some(index_to_celsius(200)));
}

#[test]
fn undecodable_pixels_contribute_nothing() {
    let table = ColorIndexTable::jet();
    // A lone hot pixel in a sea of gray still wins; gray must not read as 0.
    let mut img = RgbImage::from_pixel(8, 8, Rgb([200, 200, 200]));
    img.put_pixel(4, 4, jet_pixel(3));
    assert_eq!(max_temperature(&img, &table), Some(index_to_celsius(3)));
}

#[test]
fn all_undecodable_image_has_no_temperature() {
    let table = ColorIndexTable::jet();
    let img = RgbImage::from_pixel(4, 4, Rgb([7, 7, 7]));
    assert_eq!(max_temperature(&img, &table), None);
}
