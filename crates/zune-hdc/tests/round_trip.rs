/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};
use zune_hdc::{HdcDecoder, HdcEncoder};

fn encode(pixels: &[u8], width: usize, height: usize, use_prediction: bool) -> Vec<u8> {
    let options =
        EncoderOptions::new(width, height, ColorSpace::RGB).set_use_prediction(use_prediction);

    let mut sink = vec![];
    let size = HdcEncoder::new(pixels, options).encode(&mut sink).unwrap();
    assert_eq!(size, sink.len());
    sink
}

fn decode(data: &[u8], use_prediction: bool) -> (Vec<u8>, (usize, usize)) {
    let options = DecoderOptions::default().set_use_prediction(use_prediction);
    let mut decoder = HdcDecoder::new_with_options(ZCursor::new(data), options);

    let pixels = decoder.decode().unwrap();
    (pixels, decoder.dimensions().unwrap())
}

fn random_pixels(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = nanorand::WyRand::new_seed(seed);
    let mut pixels = vec![0_u8; len];
    rng.fill(&mut pixels);
    pixels
}

#[test]
fn random_images_round_trip() {
    for (seed, (width, height)) in [(1, (17, 9)), (2, (1, 40)), (3, (64, 64)), (4, (3, 1))] {
        let pixels = random_pixels(seed, width * height * 3);

        for use_prediction in [true, false] {
            let encoded = encode(&pixels, width, height, use_prediction);
            let (decoded, dimensions) = decode(&encoded, use_prediction);

            assert_eq!(dimensions, (width, height));
            assert_eq!(decoded, pixels);
        }
    }
}

#[test]
fn smooth_image_compresses() {
    let (width, height) = (128, 32);
    let pixels: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).flat_map(move |x| [(x + y) as u8, (x / 2) as u8, 200]))
        .collect();

    let encoded = encode(&pixels, width, height, true);
    assert!(encoded.len() * 2 < pixels.len());

    assert_eq!(decode(&encoded, true).0, pixels);
}

#[test]
fn single_pixel_image() {
    let pixels = [10, 20, 30];
    let encoded = encode(&pixels, 1, 1, true);

    // 30 -> 0, 20 -> 10, 10 -> 11
    assert_eq!(
        encoded,
        [0x00, 0x01, 0x00, 0x01, 0x84, 0x8B, 0x89, 0x8A, 0x8E, 0x85, 0xFF, 0xE0]
    );
    assert_eq!(decode(&encoded, true), (pixels.to_vec(), (1, 1)));
}

#[test]
fn gray_two_by_two() {
    // [[10, 10], [10, 13]] replicated over three channels
    let pixels = [10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13];
    let encoded = encode(&pixels, 2, 2, true);

    // header 32 + table 3*14 + 2+2+1 + terminator 9 + payload 6*1 + 6*2 bits
    assert_eq!(encoded.len(), 14);

    let mut decoder = HdcDecoder::new(ZCursor::new(&encoded));
    decoder.decode_headers().unwrap();
    assert_eq!(decoder.code_table_len(), Some(3));
    assert_eq!(decoder.decode().unwrap(), pixels);
}

#[test]
fn constant_image_uses_one_bit_codes() {
    let pixels = vec![77_u8; 10 * 10 * 3];

    let encoded = encode(&pixels, 10, 10, false);
    // header 32 + one entry 15 + terminator 9 + payload 300 bits
    assert_eq!(encoded.len(), 45);

    let mut decoder = HdcDecoder::new_with_options(
        ZCursor::new(&encoded),
        DecoderOptions::default().set_use_prediction(false)
    );
    assert_eq!(decoder.decode().unwrap(), pixels);
    assert_eq!(decoder.code_table_len(), Some(1));
}

#[test]
fn empty_images_keep_their_dimensions() {
    for (width, height) in [(0, 7), (9, 0), (0, 0)] {
        let encoded = encode(&[], width, height, true);
        let (decoded, dimensions) = decode(&encoded, true);

        assert!(decoded.is_empty());
        assert_eq!(dimensions, (width, height));
    }
}

#[test]
fn largest_dimensions_fit_in_header() {
    let pixels = random_pixels(5, 65535 * 3);
    let encoded = encode(&pixels, 65535, 1, true);

    assert_eq!(&encoded[..4], &[0x00, 0x01, 0xFF, 0xFF]);

    let mut decoder = HdcDecoder::new(ZCursor::new(&encoded));

    assert_eq!(decoder.decode().unwrap(), pixels);
    assert_eq!(decoder.dimensions(), Some((65535, 1)));
}

#[test]
fn default_decoder_accepts_wide_images() {
    for (width, height) in [(20000, 1), (1, 16385)] {
        let pixels = random_pixels(6, width * height * 3);
        let encoded = encode(&pixels, width, height, true);

        let mut decoder = HdcDecoder::new(ZCursor::new(&encoded));
        assert_eq!(decoder.decode().unwrap(), pixels);
        assert_eq!(decoder.dimensions(), Some((width, height)));
    }
}

#[test]
fn wide_samples_round_trip() {
    // already widened, out of 8 bit range but with in-range residuals
    let samples: Vec<i16> = (0..4 * 3).map(|x| 200 + x * 10).collect();
    let options = EncoderOptions::new(4, 1, ColorSpace::BGR);

    let mut sink = vec![];
    HdcEncoder::new_wide(&samples, options)
        .encode(&mut sink)
        .unwrap();

    let mut decoder = HdcDecoder::new(ZCursor::new(&sink));
    assert_eq!(decoder.decode_samples().unwrap(), samples);
}
