//! Whole-blob codec: base64 text <-> ordered record sequence.
//!
//! Decoded blob text has the form `{f0;...;f42},{f0;...;f42},`. Decoding is
//! partial-failure tolerant: a malformed chunk is dropped and listed in the
//! [`DecodeReport`], and the rest of the stream is still decoded.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::config::WarehouseConfig;
use crate::types::ItemRecord;

use super::error::{BlobError, EncodingError, RecordError};
use super::record::{ItemRecordCodec, parse_fields};
use super::schema::RecordSchema;

/// Standard alphabet; padding is written on encode and optional on decode.
const BLOB_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A chunk the decoder skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedRecord {
    /// Zero-based index of the chunk in the blob.
    pub index: usize,
    pub error: RecordError,
}

/// Outcome of decoding one blob.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeReport {
    pub records: Vec<ItemRecord>,
    pub dropped: Vec<DroppedRecord>,
    /// Number of decoded records that used the legacy layout.
    pub legacy_records: usize,
    /// Set when the base64 framing itself could not be read.
    pub blob_error: Option<BlobError>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.blob_error.is_none()
    }
}

/// Splits, decodes and re-joins warehouse blobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarehouseCodec {
    records: ItemRecordCodec,
}

impl WarehouseCodec {
    pub const fn new(config: WarehouseConfig) -> Self {
        Self {
            records: ItemRecordCodec::new(config),
        }
    }

    pub const fn record_codec(&self) -> &ItemRecordCodec {
        &self.records
    }

    /// Decodes a blob into its valid records; never fails.
    pub fn decode(&self, blob: &str) -> Vec<ItemRecord> {
        self.decode_with_report(blob).records
    }

    /// Decodes a blob and reports every chunk that was dropped.
    pub fn decode_with_report(&self, blob: &str) -> DecodeReport {
        let compact: String = blob.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if compact.is_empty() {
            return DecodeReport::default();
        }

        let bytes = match BLOB_ENGINE.decode(compact.as_bytes()) {
            Ok(bytes) => bytes,
            Err(error) => {
                return DecodeReport {
                    blob_error: Some(BlobError::from(error)),
                    ..DecodeReport::default()
                };
            }
        };
        let text = String::from_utf8_lossy(&bytes);

        let mut report = DecodeReport::default();
        for (index, chunk) in split_records(&text).enumerate() {
            if chunk.is_empty() {
                continue;
            }
            match self.records.decode_tagged(&parse_fields(chunk)) {
                Ok((record, schema)) => {
                    if schema == RecordSchema::Legacy {
                        report.legacy_records += 1;
                    }
                    report.records.push(record);
                }
                Err(error) => report.dropped.push(DroppedRecord { index, error }),
            }
        }
        report
    }

    /// Encodes records into a blob. An empty sequence encodes to `""`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::InvalidRecord`] for the first record that fails
    /// validation; nothing is emitted in that case.
    pub fn encode(&self, records: &[ItemRecord]) -> Result<String, EncodingError> {
        let text = self.encode_text(records)?;
        if text.is_empty() {
            return Ok(String::new());
        }
        Ok(BLOB_ENGINE.encode(text.as_bytes()))
    }

    /// Encodes records into the decoded text form, without base64.
    pub fn encode_text(&self, records: &[ItemRecord]) -> Result<String, EncodingError> {
        if records.is_empty() {
            return Ok(String::new());
        }
        let rendered = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                self.records
                    .render_record(record)
                    .map_err(|violation| EncodingError::InvalidRecord {
                        index,
                        item_id: record.item_id,
                        violation,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{},", rendered.join(",")))
    }
}

/// Splits decoded blob text into record bodies without their braces.
fn split_records(text: &str) -> impl Iterator<Item = &str> {
    text.split(WarehouseConfig::RECORD_DELIMITER).map(|chunk| {
        let chunk = chunk.trim();
        let chunk = chunk.strip_prefix('{').unwrap_or(chunk);
        let chunk = chunk.strip_suffix(',').unwrap_or(chunk);
        chunk.strip_suffix('}').unwrap_or(chunk)
    })
}

/// Decodes `blob` with the default configuration.
pub fn decode(blob: &str) -> Vec<ItemRecord> {
    WarehouseCodec::default().decode(blob)
}

/// Encodes `records` with the default configuration.
pub fn encode(records: &[ItemRecord]) -> Result<String, EncodingError> {
    WarehouseCodec::default().encode(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ExcellentOptions;
    use crate::types::{ItemId, SlotPosition};

    fn record(position: u8, item: u32) -> ItemRecord {
        ItemRecord::new(SlotPosition::new(position).unwrap(), ItemId(item)).with_durability(30)
    }

    fn wrap(text: &str) -> String {
        BLOB_ENGINE.encode(text.as_bytes())
    }

    #[test]
    fn empty_inputs_round_trip_to_empty() {
        assert!(decode("").is_empty());
        assert_eq!(encode(&[]).unwrap(), "");
    }

    #[test]
    fn encoded_text_has_braces_and_trailing_comma() {
        let text = WarehouseCodec::default()
            .encode_text(&[record(0, 5), record(2, 7)])
            .unwrap();
        assert!(text.starts_with("{0;5;"));
        assert!(text.contains("},{2;7;"));
        assert!(text.ends_with("},"));
    }

    #[test]
    fn decodes_without_trailing_comma() {
        let codec = WarehouseCodec::default();
        let text = codec.encode_text(&[record(0, 5), record(2, 7)]).unwrap();
        let trimmed = text.trim_end_matches(',');
        let decoded = codec.decode(&wrap(trimmed));
        assert_eq!(decoded, vec![record(0, 5), record(2, 7)]);
    }

    #[test]
    fn corrupt_chunks_are_dropped_individually() {
        let codec = WarehouseCodec::default();
        let good = codec.encode_text(&[record(0, 5)]).unwrap();
        let good = good.trim_end_matches(',');
        let zero_id = good.replacen("{0;5;", "{1;0;", 1);
        let text = format!("{good},{{1;2;3}},{zero_id},{good},");

        let report = codec.decode_with_report(&wrap(&text));
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.dropped.len(), 2);
        assert_eq!(report.dropped[0].index, 1);
        assert!(matches!(
            report.dropped[0].error,
            RecordError::TooFewFields { found: 3, .. }
        ));
        assert_eq!(report.dropped[1].error, RecordError::InvalidItemId(0));
        assert!(!report.is_clean());
    }

    #[test]
    fn invalid_base64_yields_empty_report() {
        let report = WarehouseCodec::default().decode_with_report("%%%not base64%%%");
        assert!(report.records.is_empty());
        assert!(report.blob_error.is_some());
    }

    #[test]
    fn unpadded_and_wrapped_blobs_decode() {
        let codec = WarehouseCodec::default();
        let blob = codec.encode(&[record(0, 5)]).unwrap();
        let unpadded = blob.trim_end_matches('=');
        assert_eq!(codec.decode(unpadded), vec![record(0, 5)]);

        let wrapped = format!("{}\n{}", &blob[..10], &blob[10..]);
        assert_eq!(codec.decode(&wrapped), vec![record(0, 5)]);
    }

    #[test]
    fn counts_legacy_records() {
        let fields: Vec<String> = (0..40)
            .map(|index| match index {
                1 => "9".to_string(),
                38 | 39 => "254".to_string(),
                _ => "0".to_string(),
            })
            .collect();
        let text = format!("{{{}}},", fields.join(";"));
        let report = WarehouseCodec::default().decode_with_report(&wrap(&text));
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.legacy_records, 1);
    }

    #[test]
    fn encode_reports_offending_index() {
        let bad = record(3, 9).with_level(99);
        let error = encode(&[record(0, 5), bad]).unwrap_err();
        assert!(matches!(error, EncodingError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn round_trip_keeps_every_attribute_but_serials() {
        let mut original = record(9, 2048)
            .with_level(11)
            .with_luck(true)
            .with_excellent(ExcellentOptions::ALL);
        original.serial = 123;
        let decoded = decode(&encode(std::slice::from_ref(&original)).unwrap());
        original.serial = 0;
        assert_eq!(decoded, vec![original]);
    }
}
