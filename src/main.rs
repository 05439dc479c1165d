//! setup: merge bundled terminal color schemes into a settings file
//!
//! Reads the bundled defaults and the user's settings (JSON with comments),
//! adds the missing schemes and writes the settings back.

use anyhow::Result;

fn main() -> Result<()> {
    scheme_setup::cli::run()
}
