use crate::board::Flop;
use crate::cards::{Rank, RankUniverse};
use crate::draws::aggregate::aggregate_flop;
use crate::draws::combinations::choose;
use crate::records::FlopEntry;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;

/// Where the generator writes the artifact, relative to the working
/// directory. Overwritten on every run.
pub const DEFAULT_OUTPUT_PATH: &str = "data/wraps.json";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write catalog artifact: {0}")]
    Io(#[from] io::Error),
}

/// All distinct-rank flops of the universe, in lexicographic order.
pub fn enumerate_flops(universe: &RankUniverse) -> Vec<Flop> {
    choose::<3, Rank>(universe.ranks()).map(Flop::from_ranks).collect()
}

/// Sweep every flop, drop the ones without a qualifying wrap, and return the
/// catalog in flop enumeration order.
///
/// Flops are independent, so the sweep fans out across rayon's worker pool;
/// the ordered collect keeps the output deterministic.
pub fn build_catalog(universe: &RankUniverse) -> Vec<FlopEntry> {
    let flops = enumerate_flops(universe);
    log::debug!("sweeping {} rank-only flops", flops.len());

    let entries: Vec<FlopEntry> = flops
        .par_iter()
        .map(|flop| aggregate_flop(universe, *flop))
        .filter(|summary| !summary.is_empty())
        .map(|summary| FlopEntry::from_summary(&summary))
        .collect();

    log::info!("{} of {} flops carry at least one wrap", entries.len(), flops.len());
    entries
}

/// Serialize the catalog and replace the artifact atomically.
///
/// The JSON is buffered fully in memory, written to a temporary sibling, and
/// renamed over the destination, so no failure mode leaves a truncated
/// artifact behind. The parent directory is created if absent.
pub fn write_catalog(entries: &[FlopEntry], path: &Path) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(entries)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
