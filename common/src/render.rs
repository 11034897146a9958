use std::fmt::Write;

use crate::vars::VagrantVars;

/// Writes `vars` back as `$name = value` lines in schema order.
///
/// Loading the output again gives back an equal record.
pub fn render(vars: &VagrantVars) -> String {
    let mut out = String::new();
    for (name, value) in vars.to_resolved().iter() {
        // writing into a String cannot fail
        let _ = writeln!(out, "${name} = {value}");
    }
    out
}

/// Same as [`render`], preceded by `# ` comment lines.
pub fn render_with_header(vars: &VagrantVars, header: &str) -> String {
    let mut out: String = header.lines().map(|l| format!("# {l}\n")).collect();
    out.push_str(&render(vars));
    out
}
