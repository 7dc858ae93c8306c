//! Examples command: list the built-in teaching presets.

use anyhow::Result;

use crate::presets::PRESETS;
use crate::setup::emit;

/// Run the examples command.
pub fn run() -> Result<()> {
    emit(&PRESETS, None)
}
