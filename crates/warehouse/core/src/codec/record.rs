//! Single-record codec: ordered integer fields <-> [`ItemRecord`].

use crate::config::{MaskPolicy, WarehouseConfig};
use crate::options::{ExcellentOptions, SocketSlot, WingOption};
use crate::types::{ItemId, ItemRecord, RecordViolation, SlotPosition};

use super::error::RecordError;
use super::schema::{LegacyAdapter, MASTERY_SET_CODE, RESERVED_FILL, RecordSchema, field};

/// Encodes and decodes one fixed-width field record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemRecordCodec {
    config: WarehouseConfig,
}

impl ItemRecordCodec {
    pub const fn new(config: WarehouseConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &WarehouseConfig {
        &self.config
    }

    /// Decodes one record from its numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when fewer than 40 fields are present, when the
    /// item id is not positive, or when a field is outside its range.
    pub fn decode_record(&self, fields: &[i64]) -> Result<ItemRecord, RecordError> {
        let schema = RecordSchema::detect(fields.len()).ok_or(RecordError::TooFewFields {
            found: fields.len(),
            required: WarehouseConfig::LEGACY_FIELD_COUNT,
        })?;
        self.decode_with_schema(fields, schema)
    }

    /// Same as [`Self::decode_record`] but also returns the detected schema tag.
    pub fn decode_tagged(
        &self,
        fields: &[i64],
    ) -> Result<(ItemRecord, RecordSchema), RecordError> {
        let schema = RecordSchema::detect(fields.len()).ok_or(RecordError::TooFewFields {
            found: fields.len(),
            required: WarehouseConfig::LEGACY_FIELD_COUNT,
        })?;
        Ok((self.decode_with_schema(fields, schema)?, schema))
    }

    fn decode_with_schema(
        &self,
        fields: &[i64],
        schema: RecordSchema,
    ) -> Result<ItemRecord, RecordError> {
        let reader = FieldReader { fields };

        let raw_id = reader.raw(field::ITEM_ID);
        if raw_id <= 0 || raw_id > i64::from(u32::MAX) {
            return Err(RecordError::InvalidItemId(raw_id));
        }
        let item_id = ItemId(raw_id as u32);

        let index = reader.bounded(field::POSITION, "position", u32::from(SlotPosition::MAX))?;
        let position = SlotPosition::new(index as u8).ok_or(RecordError::FieldOutOfRange {
            field: "position",
            value: reader.raw(field::POSITION),
        })?;

        let (skill_index, luck_index) =
            LegacyAdapter::new(self.config.legacy_layout).skill_luck(schema);

        let raw_mask = reader.bounded(field::EXCELLENT, "excellent", u32::from(u8::MAX))? as u8;
        let excellent = match ExcellentOptions::from_mask(raw_mask) {
            Ok(options) => options,
            Err(_) => match self.config.mask_policy {
                MaskPolicy::Normalize => ExcellentOptions::normalize(raw_mask),
                MaskPolicy::Reject => return Err(RecordError::UnrecognizedMask(raw_mask)),
            },
        };

        let mut sockets = [SocketSlot::NoSlot; 5];
        for (slot, index) in sockets.iter_mut().zip(field::SOCKETS) {
            let code = reader.bounded(index, "socket", u32::from(u16::MAX))?;
            *slot = SocketSlot::from_code(code as u16);
        }

        Ok(ItemRecord {
            position,
            item_id,
            level: reader.bounded(field::LEVEL, "level", u32::from(ItemRecord::MAX_LEVEL))? as u8,
            durability: reader.bounded(field::DURABILITY, "durability", u32::from(u8::MAX))? as u8,
            skill: reader.flag(skill_index, "skill")?,
            luck: reader.flag(luck_index, "luck")?,
            option_tier: reader.bounded(
                field::OPTION_TIER,
                "option_tier",
                u32::from(ItemRecord::MAX_OPTION_TIER),
            )? as u8,
            excellent,
            mastery_set: reader.raw(field::MASTERY_SET) != 0,
            mastery_bonus: reader.bounded(
                field::MASTERY_BONUS,
                "mastery_bonus",
                u32::from(ItemRecord::MAX_MASTERY_BONUS),
            )? as u8,
            wing_options: [
                reader.wing_option(field::WING_OPTION_1)?,
                reader.wing_option(field::WING_OPTION_2)?,
            ],
            sockets,
            serial: reader.raw(field::SERIAL).clamp(0, i64::from(u32::MAX)) as u32,
            serial2: reader.raw(field::SERIAL2).clamp(0, i64::from(u32::MAX)) as u32,
        })
    }

    /// Encodes one record into exactly [`WarehouseConfig::FIELD_COUNT`] fields.
    ///
    /// Serial fields are always written as zero.
    pub fn encode_record(
        &self,
        record: &ItemRecord,
    ) -> Result<[u32; WarehouseConfig::FIELD_COUNT], RecordViolation> {
        record.validate()?;

        let mut fields = [0u32; WarehouseConfig::FIELD_COUNT];
        for (range, value) in RESERVED_FILL {
            fields[range].fill(value);
        }

        fields[field::POSITION] = u32::from(record.position.index());
        fields[field::ITEM_ID] = record.item_id.0;
        fields[field::LEVEL] = u32::from(record.level);
        fields[field::DURABILITY] = u32::from(record.durability);
        fields[field::SKILL] = u32::from(record.skill);
        fields[field::LUCK] = u32::from(record.luck);
        fields[field::OPTION_TIER] = u32::from(record.option_tier);
        fields[field::EXCELLENT] = u32::from(record.excellent.mask());
        fields[field::MASTERY_SET] = if record.mastery_set { MASTERY_SET_CODE } else { 0 };
        for (index, slot) in field::SOCKETS.zip(record.sockets) {
            fields[index] = u32::from(slot.code());
        }
        fields[field::MASTERY_BONUS] = u32::from(record.mastery_bonus);
        fields[field::WING_OPTION_1] = u32::from(record.wing_options[0].code());
        fields[field::WING_OPTION_2] = u32::from(record.wing_options[1].code());

        Ok(fields)
    }

    /// Renders one record as `{f0;f1;...;f42}`.
    pub fn render_record(&self, record: &ItemRecord) -> Result<String, RecordViolation> {
        let fields = self.encode_record(record)?;
        let body = fields
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(WarehouseConfig::FIELD_DELIMITER);
        Ok(format!("{{{body}}}"))
    }
}

/// Parses the `;`-separated body of one record, discarding non-numeric tokens.
pub fn parse_fields(body: &str) -> Vec<i64> {
    body.split(WarehouseConfig::FIELD_DELIMITER)
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

struct FieldReader<'a> {
    fields: &'a [i64],
}

impl FieldReader<'_> {
    /// Missing trailing fields read as zero; only legacy records lack them.
    fn raw(&self, index: usize) -> i64 {
        self.fields.get(index).copied().unwrap_or(0)
    }

    fn bounded(&self, index: usize, name: &'static str, max: u32) -> Result<u32, RecordError> {
        let value = self.raw(index);
        if (0..=i64::from(max)).contains(&value) {
            Ok(value as u32)
        } else {
            Err(RecordError::FieldOutOfRange { field: name, value })
        }
    }

    fn flag(&self, index: usize, name: &'static str) -> Result<bool, RecordError> {
        Ok(self.bounded(index, name, 1)? == 1)
    }

    fn wing_option(&self, index: usize) -> Result<WingOption, RecordError> {
        let code = self.bounded(index, "wing_option", u32::from(u8::MAX))?;
        Ok(WingOption::from_code(code as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LegacyLayout;

    fn codec() -> ItemRecordCodec {
        ItemRecordCodec::default()
    }

    fn sample() -> ItemRecord {
        ItemRecord::new(SlotPosition::new(17).unwrap(), ItemId::from_parts(12, 36))
            .with_level(13)
            .with_durability(200)
            .with_skill(true)
            .with_luck(true)
            .with_option_tier(4)
            .with_excellent(ExcellentOptions::from_count(4).unwrap())
            .with_mastery(2)
            .with_wing_options([WingOption::Effect(3), WingOption::None])
            .with_sockets([
                SocketSlot::Seed(201),
                SocketSlot::Empty,
                SocketSlot::NoSlot,
                SocketSlot::NoSlot,
                SocketSlot::NoSlot,
            ])
    }

    fn widen(fields: &[u32]) -> Vec<i64> {
        fields.iter().map(|value| i64::from(*value)).collect()
    }

    #[test]
    fn encodes_canonical_layout() {
        let fields = codec().encode_record(&sample()).unwrap();
        assert_eq!(fields.len(), 43);
        assert_eq!(fields[0], 17);
        assert_eq!(fields[1], 12 * 512 + 36);
        assert_eq!(fields[2], 0);
        assert_eq!((fields[3], fields[4]), (0, 0));
        assert_eq!((fields[5], fields[6]), (13, 200));
        assert_eq!((fields[8], fields[9], fields[10]), (1, 1, 4));
        assert_eq!((fields[11], fields[12]), (15, 9));
        assert_eq!(&fields[15..20], &[201, 65534, 65535, 65535, 65535]);
        assert_eq!(fields[20], 2);
        assert!(fields[21..30].iter().all(|value| *value == 0));
        assert!(fields[30..36].iter().all(|value| *value == 255));
        assert_eq!(&fields[36..38], &[0, 0]);
        assert_eq!((fields[38], fields[39]), (3, 254));
        assert_eq!(&fields[40..43], &[254, 254, 254]);
    }

    #[test]
    fn decode_inverts_encode() {
        let record = sample();
        let fields = widen(&codec().encode_record(&record).unwrap());
        let (decoded, schema) = codec().decode_tagged(&fields).unwrap();
        assert_eq!(schema, RecordSchema::Canonical);
        assert_eq!(decoded, record);
    }

    #[test]
    fn serials_are_zeroed_on_encode() {
        let mut record = sample();
        record.serial = 77;
        record.serial2 = 78;
        let fields = codec().encode_record(&record).unwrap();
        assert_eq!((fields[3], fields[4]), (0, 0));
    }

    #[test]
    fn rejects_short_records_and_bad_ids() {
        assert_eq!(
            codec().decode_record(&[0; 39]),
            Err(RecordError::TooFewFields {
                found: 39,
                required: 40
            })
        );
        let mut fields = widen(&codec().encode_record(&sample()).unwrap());
        fields[1] = 0;
        assert_eq!(codec().decode_record(&fields), Err(RecordError::InvalidItemId(0)));
        fields[1] = -4;
        assert_eq!(codec().decode_record(&fields), Err(RecordError::InvalidItemId(-4)));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let base = widen(&codec().encode_record(&sample()).unwrap());
        for (index, value, name) in [
            (field::POSITION, 120, "position"),
            (field::LEVEL, 16, "level"),
            (field::DURABILITY, 256, "durability"),
            (field::SKILL, 2, "skill"),
            (field::OPTION_TIER, 8, "option_tier"),
            (field::MASTERY_BONUS, 4, "mastery_bonus"),
        ] {
            let mut fields = base.clone();
            fields[index] = value;
            assert_eq!(
                codec().decode_record(&fields),
                Err(RecordError::FieldOutOfRange { field: name, value })
            );
        }
    }

    #[test]
    fn illegal_masks_follow_policy() {
        let mut fields = widen(&codec().encode_record(&sample()).unwrap());
        fields[field::EXCELLENT] = 0b1011;

        let normalized = codec().decode_record(&fields).unwrap();
        assert_eq!(normalized.excellent.mask(), 0b11);

        let strict =
            ItemRecordCodec::new(WarehouseConfig::new().with_mask_policy(MaskPolicy::Reject));
        assert_eq!(
            strict.decode_record(&fields),
            Err(RecordError::UnrecognizedMask(0b1011))
        );
    }

    #[test]
    fn legacy_records_use_configured_skill_luck_order() {
        let mut fields = widen(&codec().encode_record(&sample().with_luck(false)).unwrap());
        fields.truncate(40);

        let (record, schema) = codec().decode_tagged(&fields).unwrap();
        assert_eq!(schema, RecordSchema::Legacy);
        assert!(record.skill && !record.luck);

        let swapped = ItemRecordCodec::new(
            WarehouseConfig::new().with_legacy_layout(LegacyLayout::LuckThenSkill),
        );
        let record = swapped.decode_record(&fields).unwrap();
        assert!(!record.skill && record.luck);
        assert_eq!(record.wing_options[0], WingOption::Effect(3));
    }

    #[test]
    fn mastery_bonus_is_kept_without_set_flag() {
        let mut record = sample();
        record.mastery_set = false;
        let fields = codec().encode_record(&record).unwrap();
        assert_eq!((fields[12], fields[20]), (0, 2));

        let decoded = codec().decode_record(&widen(&fields)).unwrap();
        assert!(!decoded.mastery_set);
        assert_eq!(decoded.mastery_bonus, 2);
    }

    #[test]
    fn encode_refuses_invalid_records() {
        let record = sample().with_level(20);
        assert!(matches!(
            codec().encode_record(&record),
            Err(RecordViolation::OutOfRange { field: "level", .. })
        ));
    }

    #[test]
    fn parse_fields_skips_non_numeric_tokens() {
        assert_eq!(parse_fields(" 1; x ;2;;-3"), vec![1, 2, -3]);
    }

    #[test]
    fn renders_braced_record() {
        let rendered = codec().render_record(&sample()).unwrap();
        assert!(rendered.starts_with("{17;6180;0;0;0;13;200;"));
        assert!(rendered.ends_with(";254;254;254}"));
        assert_eq!(rendered.matches(';').count(), 42);
    }
}
