//! Subcommands of the `warehouse` binary.

mod decode;
mod encode;
mod inspect;
mod place;
mod remove;

pub use decode::Decode;
pub use encode::Encode;
pub use inspect::Inspect;
pub use place::Place;
pub use remove::Remove;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use warehouse_content::{ContentBundle, ContentFactory};
use warehouse_core::{
    BlobError, DecodeReport, DroppedRecord, LoadReport, Warehouse, WarehouseError,
};

use crate::config::CliConfig;
use crate::input;

/// Options shared by commands that need the content directory.
#[derive(Args, Clone, Debug)]
pub struct ContentArgs {
    /// Content directory (defaults to WAREHOUSE_DATA_DIR, then the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl ContentArgs {
    pub fn factory(&self, config: &CliConfig) -> ContentFactory {
        ContentFactory::new(self.data_dir.as_ref().unwrap_or(&config.data_dir))
    }

    pub fn load(&self, config: &CliConfig) -> Result<ContentBundle> {
        let factory = self.factory(config);
        factory.load_all().with_context(|| {
            format!("Failed to load content from {}", factory.data_dir().display())
        })
    }
}

/// Reads a blob and lays it out against the loaded content.
pub(crate) fn load_warehouse(
    source: &std::path::Path,
    content: &ContentBundle,
) -> Result<(Warehouse, LoadReport)> {
    let blob = input::read_blob(source)?;
    let (warehouse, report) = Warehouse::load(&blob, &content.env(), content.config)?;
    log_load_report(&report);
    Ok((warehouse, report))
}

/// One decode failure: the chunk index (`None` for the blob framing), its
/// error code and message.
type DecodeProblem = (Option<usize>, &'static str, String);

fn decode_problems(
    blob_error: Option<&BlobError>,
    dropped: &[DroppedRecord],
) -> Vec<DecodeProblem> {
    let framing = blob_error.map(|error| (None, error.error_code(), error.to_string()));
    let chunks = dropped.iter().map(|dropped| {
        (
            Some(dropped.index),
            dropped.error.error_code(),
            format!("dropped record: {}", dropped.error),
        )
    });
    framing.into_iter().chain(chunks).collect()
}

fn log_decode_problems(blob_error: Option<&BlobError>, dropped: &[DroppedRecord]) {
    for (index, code, message) in decode_problems(blob_error, dropped) {
        tracing::warn!(index = ?index, code, "{message}");
    }
}

pub(crate) fn log_decode_report(report: &DecodeReport) {
    log_decode_problems(report.blob_error.as_ref(), &report.dropped);
    if report.legacy_records > 0 {
        tracing::info!(count = report.legacy_records, "decoded legacy records");
    }
}

pub(crate) fn log_load_report(report: &LoadReport) {
    log_decode_problems(report.blob_error.as_ref(), &report.dropped);
    for item in &report.unknown_items {
        tracing::warn!(item = %item, "item not in catalog, laid out as 1x1");
    }
    for orphan in &report.orphaned {
        tracing::warn!(
            index = orphan.index,
            item = %orphan.item_id,
            position = %orphan.position,
            code = orphan.reason.error_code(),
            "orphaned record kept aside: {}",
            orphan.reason
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_content::ItemCatalog;
    use warehouse_core::{ItemOracle, WarehouseCodec, WarehouseConfig, WarehouseEnv};

    const CORRUPT_BLOB: &str = "ezE7Mjt9LA==";

    #[test]
    fn decode_and_load_reports_share_problems() {
        let decoded = WarehouseCodec::default().decode_with_report(CORRUPT_BLOB);
        let catalog = ItemCatalog::default();
        let env = WarehouseEnv::new(Some(&catalog as &dyn ItemOracle), None);
        let (_, loaded) =
            Warehouse::load(CORRUPT_BLOB, &env, WarehouseConfig::default()).expect("catalog");

        let from_decode = decode_problems(decoded.blob_error.as_ref(), &decoded.dropped);
        let from_load = decode_problems(loaded.blob_error.as_ref(), &loaded.dropped);
        assert_eq!(from_decode.len(), 1);
        assert_eq!(from_decode[0].0, Some(0));
        assert!(from_decode[0].2.starts_with("dropped record"));
        assert_eq!(from_decode, from_load);
    }

    #[test]
    fn framing_error_comes_first() {
        let report = WarehouseCodec::default().decode_with_report("%%%");
        let problems = decode_problems(report.blob_error.as_ref(), &report.dropped);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].0, None);
        assert_eq!(problems[0].1, "BLOB_INVALID_BASE64");
    }
}
