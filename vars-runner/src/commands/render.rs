use std::path::PathBuf;

use anyhow::Result;
use common::{export, render::render_with_header};

use crate::{
    args::{Cli, RenderArgs},
    config::parse_config,
};

use super::load_vars;

pub fn render(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config = parse_config(cli.file.as_deref())?;
    let mut vars = load_vars(&config, &args.files.files)?;
    if args.defaults {
        vars = config.defaults.apply(&vars)?;
    }

    let out = match args.format {
        Some(format) => export::to_string(&vars, format)?,
        None => {
            let header = header(&config.loader.base, &args.files.files, args.defaults);
            render_with_header(&vars, &header)
        }
    };
    print!("{out}");
    Ok(())
}

fn header(base: &[PathBuf], files: &[PathBuf], defaults: bool) -> String {
    let mut lines = vec!["Rendered by vars-runner from:".to_owned()];
    lines.extend(
        base.iter()
            .chain(files.iter())
            .map(|f| format!("  {}", f.display())),
    );
    if defaults {
        lines.push("  vagrant defaults".to_owned());
    }
    lines.join("\n")
}
