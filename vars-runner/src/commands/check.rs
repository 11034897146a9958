use anyhow::Result;

use crate::{
    args::{Cli, FilesArgs},
    config::parse_config,
    status::{describe_files, done},
};

use super::load_vars;

pub fn check(cli: &Cli, args: &FilesArgs) -> Result<()> {
    let config = parse_config(cli.file.as_deref())?;
    let vars = load_vars(&config, &args.files)?;
    let keys = vars.keys();
    tracing::info!("resolved {keys:?}");
    done(&format!(
        "{} option(s) resolved ({})",
        keys.len(),
        describe_files(&args.files)
    ));
    Ok(())
}
