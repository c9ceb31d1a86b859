use anyhow::{bail, Result};

use bn_cli::branch_name::normalize_branch_name;

use crate::cli::NormalizeArgs;

pub(crate) fn cmd_normalize(args: NormalizeArgs) -> Result<()> {
    let normalized = normalize_branch_name(&args.text);
    if normalized.is_empty() {
        bail!("Branch name cannot be empty after normalization: {:?}", args.text);
    }
    println!("{normalized}");
    Ok(())
}
