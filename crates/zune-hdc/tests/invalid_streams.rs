/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};
use zune_hdc::{HdcDecoder, HdcEncoder, HdcErrors};

fn gradient(width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 3).map(|x| (x * 7 % 251) as u8).collect()
}

fn encode(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut sink = vec![];
    HdcEncoder::new(pixels, EncoderOptions::new(width, height, ColorSpace::RGB))
        .encode(&mut sink)
        .unwrap();
    sink
}

fn pack(bits: &str) -> Vec<u8> {
    let bits: Vec<u8> = bits.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0_u8, |acc, (i, &b)| acc | (u8::from(b == b'1') << (7 - i)))
        })
        .collect()
}

#[test]
fn truncated_payload_strict_and_lenient() {
    let pixels = gradient(8, 8);
    let mut encoded = encode(&pixels, 8, 8);
    encoded.truncate(encoded.len() - 10);

    let mut decoder = HdcDecoder::new(ZCursor::new(&encoded));
    let decoded = decoder.decode().unwrap();
    assert_eq!(decoded.len(), pixels.len());
    // the first row is intact
    assert_eq!(decoded[..24], pixels[..24]);

    let options = DecoderOptions::default().set_strict_mode(true);
    let mut decoder = HdcDecoder::new_with_options(ZCursor::new(&encoded), options);

    match decoder.decode() {
        Err(HdcErrors::StreamExhausted { decoded, expected }) => {
            assert!(decoded < expected);
            assert_eq!(expected, 8 * 8 * 3);
        }
        _ => panic!("Strict mode must reject truncated payloads")
    }
}

#[test]
fn truncated_table_always_errors() {
    let pixels = gradient(4, 4);
    let encoded = encode(&pixels, 4, 4);

    for strict in [true, false] {
        let options = DecoderOptions::default().set_strict_mode(strict);
        let mut decoder = HdcDecoder::new_with_options(ZCursor::new(&encoded[..7]), options);

        assert!(matches!(
            decoder.decode(),
            Err(HdcErrors::StreamExhausted { .. })
        ));
        assert!(decoder.dimensions().is_none());
    }
}

#[test]
fn dimensions_above_limits() {
    let pixels = gradient(20, 10);
    let encoded = encode(&pixels, 20, 10);

    let options = DecoderOptions::default().set_max_width(10);
    let mut decoder = HdcDecoder::new_with_options(ZCursor::new(&encoded), options);

    match decoder.decode_headers() {
        Err(HdcErrors::TooLargeDimensions(width, height)) => assert_eq!((width, height), (20, 10)),
        _ => panic!("Width 20 is above the limit")
    }

    let options = DecoderOptions::default().set_max_width(20).set_max_height(10);
    let mut decoder = HdcDecoder::new_with_options(ZCursor::new(&encoded), options);
    assert_eq!(decoder.decode().unwrap(), pixels);
}

#[test]
fn bit_path_outside_the_table() {
    // 1x1 image, only codeword is 10 for symbol 0, payload starts with 0
    let bits = "0000000000000001 0000000000000001 \
                011111111 00010 10 \
                111111111 \
                10 0";
    let data = pack(bits);

    let mut decoder = HdcDecoder::new(ZCursor::new(&data));
    assert_eq!(decoder.decode().unwrap(), [0, 0, 0]);

    let options = DecoderOptions::default().set_strict_mode(true);
    let mut decoder = HdcDecoder::new_with_options(ZCursor::new(&data), options);
    assert!(matches!(decoder.decode(), Err(HdcErrors::InvalidCode)));
}

#[test]
fn headers_are_not_available_before_decoding() {
    let decoder = HdcDecoder::new(ZCursor::new(encode(&[1, 2, 3], 1, 1)));

    assert!(decoder.dimensions().is_none());
    assert!(decoder.colorspace().is_none());
    assert!(decoder.output_buffer_size().is_none());
    assert!(decoder.code_table_len().is_none());
}

#[test]
fn garbage_never_panics() {
    let mut seed = 0x2545_F491_u32;

    for len in 0..64 {
        let data: Vec<u8> = (0..len)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                seed as u8
            })
            .collect();

        let options = DecoderOptions::default().set_max_width(64).set_max_height(64);
        let _ = HdcDecoder::new_with_options(ZCursor::new(&data), options).decode();
    }
}
