use clap::Args;
use riverforge_core::error::RfResult;
use riverforge_core::grid::GridMask;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Mask file: one line per row, '.' usable, '#' blocked
    #[arg(short, long)]
    pub mask: PathBuf,
}

pub fn run(args: CheckArgs) -> RfResult<()> {
    let mask = GridMask::parse(&fs::read_to_string(&args.mask)?)?;

    info!(
        "Mask {}: {} x {}, {} of {} cells usable",
        args.mask.display(),
        mask.height(),
        mask.width(),
        mask.usable_count(),
        mask.height() * mask.width()
    );

    mask.validate()?;
    if mask.has_usable_border() {
        info!("✅ A usable border cell exists; the river can start.");
    } else {
        warn!("⚠️  No usable border cell: tuning this mask would fail.");
    }

    crate::reports::grid::print_mask(&mask);
    Ok(())
}
