use console::{style, StyledObject};

lazy_static::lazy_static! {
    pub static ref GREEN_TICK: StyledObject<&'static str> = style("✔").green();
    pub static ref RED_CROSS: StyledObject<&'static str> = style("✗").red();
}

pub fn done(msg: &str) {
    println!("{} {}", GREEN_TICK.to_string(), msg);
}

pub fn describe_files(files: &[std::path::PathBuf]) -> String {
    files
        .iter()
        .map(|f| f.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
