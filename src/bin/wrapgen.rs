use std::path::Path;
use std::time::Instant;
use wrap_rs::cards::RankUniverse;
use wrap_rs::catalog::{self, CatalogError};

fn run() -> Result<(), CatalogError> {
    let universe = RankUniverse::standard();
    let started = Instant::now();

    let entries = catalog::build_catalog(&universe);
    log::info!("generated {} flop entries in {:.2?}", entries.len(), started.elapsed());

    let path = Path::new(catalog::DEFAULT_OUTPUT_PATH);
    catalog::write_catalog(&entries, path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("catalog generation failed: {err}");
        std::process::exit(1);
    }
}
