//! Lanes command for listing the lanes of a mode.

use anyhow::Result;
use kirizma_core::{KirizmaMode, LaneSet};

pub fn run(mode: KirizmaMode) -> Result<()> {
    for lane in LaneSet::for_mode(mode).lanes() {
        println!("{}", lane);
    }
    Ok(())
}
