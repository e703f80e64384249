//! Thin I/O shell around [ride_core::engine::RideHailing]: reads a
//! newline-delimited command script, feeds each line to the engine, and
//! collects the output lines.

use std::fs;
use std::io;
use std::path::Path;

use ride_core::engine::{EngineConfig, RideHailing};

/// Feed one raw input line to the engine. Blank lines produce no output.
pub fn process_line(engine: &mut RideHailing, line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    let args: Vec<&str> = tokens.collect();
    engine.run_command(command, &args)
}

/// Run every line of `script` in order, collecting the output lines.
pub fn run_script(engine: &mut RideHailing, script: &str) -> Vec<String> {
    script
        .lines()
        .filter_map(|line| process_line(engine, line))
        .collect()
}

/// Load an [EngineConfig] from a JSON file. Missing fields fall back to
/// the defaults.
pub fn load_config(path: &Path) -> io::Result<EngineConfig> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Read the script at `path` and run it against a fresh engine.
pub fn run_file(path: &Path, config: EngineConfig) -> io::Result<Vec<String>> {
    let script = fs::read_to_string(path)?;
    let mut engine = RideHailing::with_config(config);
    Ok(run_script(&mut engine, &script))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_lines_are_skipped() {
        let mut engine = RideHailing::new();
        assert_eq!(process_line(&mut engine, ""), None);
        assert_eq!(process_line(&mut engine, "   "), None);
    }

    #[test]
    fn script_output_preserves_command_order() {
        let mut engine = RideHailing::new();
        let script = "ADD_DRIVER D1 1 1\nADD_RIDER R1 0 0\nMATCH R1\nUNKNOWN\n";
        assert_eq!(
            run_script(&mut engine, script),
            vec!["DRIVERS_MATCHED D1", "INVALID_COMMAND"]
        );
    }
}
