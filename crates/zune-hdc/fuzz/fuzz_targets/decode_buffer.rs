#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_hdc::zune_core::bytestream::ZCursor;
    use zune_hdc::zune_core::options::DecoderOptions;

    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);

    let mut decoder = zune_hdc::HdcDecoder::new_with_options(ZCursor::new(data), options);
    let _ = decoder.decode();
});
