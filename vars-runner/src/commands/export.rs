use anyhow::Result;
use vagrant::Settings;

use crate::{
    args::{Cli, ExportArgs},
    config::parse_config,
    status::done,
};

use super::load_vars;

pub fn export(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let config = parse_config(cli.file.as_deref())?;
    let vars = load_vars(&config, &args.files.files)?;
    let settings = Settings::build(&vars, &config.defaults)?;
    let format = args.format.unwrap_or(config.export.format);

    match &args.output {
        Some(path) => {
            settings.write(path, format)?;
            done(&format!("Settings written ({})", path.display()));
        }
        None => print!("{}", settings.to_string(format)?),
    }
    Ok(())
}
