use anyhow::Result;

/// With no subcommand, evaluate today in human-readable form.
pub fn run() -> Result<()> {
    crate::cmd::check::run(None, false)
}
