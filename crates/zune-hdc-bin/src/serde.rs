/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_core::colorspace::ColorSpace;

/// Header facts of one encoded file
pub struct ProbeReport<'a> {
    pub file:               &'a str,
    pub size:               u64,
    pub width:              usize,
    pub height:             usize,
    pub colorspace:         ColorSpace,
    pub code_table_entries: usize
}

impl<'a> Serialize for ProbeReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ProbeReport", 6)?;

        state.serialize_field("file", self.file)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("colorspace", &self.colorspace)?;
        state.serialize_field("code_table_entries", &self.code_table_entries)?;

        state.end()
    }
}

/// Compression ratio of one file
pub struct RatioReport<'a> {
    pub file:          &'a str,
    pub original_size: usize,
    pub encoded_size:  usize
}

impl RatioReport<'_> {
    pub fn ratio(&self) -> f64 {
        self.original_size as f64 / self.encoded_size as f64
    }
}

impl<'a> Serialize for RatioReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("RatioReport", 4)?;

        state.serialize_field("file", self.file)?;
        state.serialize_field("original_size", &self.original_size)?;
        state.serialize_field("encoded_size", &self.encoded_size)?;
        state.serialize_field("ratio", &self.ratio())?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::serde::{ProbeReport, RatioReport};

    #[test]
    fn probe_report_json() {
        let report = ProbeReport {
            file:               "a.hdc",
            size:               12,
            width:              1,
            height:             1,
            colorspace:         ColorSpace::RGB,
            code_table_entries: 3
        };
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["file"], "a.hdc");
        assert_eq!(value["colorspace"], "RGB");
        assert_eq!(value["code_table_entries"], 3);
    }

    #[test]
    fn ratio_is_original_over_encoded() {
        let report = RatioReport {
            file:          "a.ppm",
            original_size: 300,
            encoded_size:  120
        };
        assert_eq!(report.ratio(), 2.5);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["ratio"], 2.5);
    }
}
