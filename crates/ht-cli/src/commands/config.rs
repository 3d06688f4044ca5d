//! Config command for showing the effective configuration.

use std::io::Write;

use anyhow::Result;

use crate::Config;
use crate::config::dirs_config_path;

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    writeln!(writer, "Health tracker configuration")?;
    writeln!(writer, "Capacity:     {}", config.capacity)?;
    writeln!(writer, "Label width:  {}", config.effective_label_width())?;

    match dirs_config_path() {
        Some(dir) => writeln!(writer, "Config file:  {}", dir.join("config.toml").display())?,
        None => writeln!(writer, "Config file:  (no config directory)")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn config_command_outputs_settings() {
        let config = Config {
            capacity: 42,
            label_width: 2,
        };
        let mut output = Vec::new();
        run(&mut output, &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        let output = match dirs_config_path() {
            Some(dir) => output.replace(&dir.display().to_string(), "[CONFIG]"),
            None => output.replace("(no config directory)", "[CONFIG]/config.toml"),
        };
        assert_snapshot!(output, @r"
        Health tracker configuration
        Capacity:     42
        Label width:  4
        Config file:  [CONFIG]/config.toml
        ");
    }
}
