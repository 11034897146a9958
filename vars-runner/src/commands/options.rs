use anyhow::Result;
use common::schema::{Kind, OPTIONS};

use crate::{args::Cli, config::parse_config};

pub fn options(cli: &Cli) -> Result<()> {
    let config = parse_config(cli.file.as_deref())?;

    for option in OPTIONS {
        println!(
            "{:<22} {:<8} {}",
            option.name,
            option.kind.type_name(),
            option.about
        );
        if let Kind::Choice(choices) = option.kind {
            println!("{:<31} {}", "", choices.join(" | "));
        }
    }

    println!("\n# Vagrantfile defaults");
    print!("{}", config.defaults.render());
    Ok(())
}
