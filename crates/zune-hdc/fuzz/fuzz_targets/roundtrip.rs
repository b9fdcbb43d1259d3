#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_hdc::zune_core::bytestream::ZCursor;
    use zune_hdc::zune_core::colorspace::ColorSpace;
    use zune_hdc::zune_core::options::EncoderOptions;

    if data.is_empty() {
        return;
    }
    // first byte picks the width, the rest are pixels
    let width = usize::from(data[0] % 16) + 1;
    let pixels = &data[1..];
    let height = pixels.len() / (width * 3);
    let pixels = &pixels[..width * height * 3];

    let options = EncoderOptions::new(width, height, ColorSpace::RGB);

    let mut encoded = vec![];
    zune_hdc::HdcEncoder::new(pixels, options)
        .encode(&mut encoded)
        .unwrap();

    let decoded = zune_hdc::HdcDecoder::new(ZCursor::new(&encoded))
        .decode()
        .unwrap();

    assert_eq!(decoded, pixels);
});
