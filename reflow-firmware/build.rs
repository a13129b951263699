//! Build script for reflow-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time
//! - Generates the panel configuration constants from panel.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use reflow_core::config::ProfileField;

/// panel.toml key for each editable profile field
const PROFILE_KEYS: [(ProfileField, &str); 4] = [
    (ProfileField::SoakTemp, "soak_temp_c"),
    (ProfileField::SoakTime, "soak_time_s"),
    (ProfileField::ReflowTemp, "reflow_temp_c"),
    (ProfileField::ReflowTime, "reflow_time_s"),
];

const PANEL_KEYS: [&str; 4] = [
    "pulses_per_detent",
    "debounce_ms",
    "run_pause_ms",
    "loop_period_ms",
];

const RAMP_KEYS: [&str; 4] = ["preheat", "soak", "reflow", "cool_down"];

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml configuration at compile time
fn validate_config() -> toml::Value {
    // Re-run if panel.toml changes
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();
    validate_panel(&config, &mut errors);
    validate_profile(&config, &mut errors);
    validate_ramps(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid panel configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=panel.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up an integer key, recording an error if it is missing
fn integer(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> Option<i64> {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) => Some(*v),
        Some(_) => {
            errors.push(format!("[{}] '{}' must be an integer", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

fn validate_panel(config: &toml::Value, errors: &mut Vec<String>) {
    for key in PANEL_KEYS {
        let Some(v) = integer(config, "panel", key, errors) else {
            continue;
        };

        let (min, max) = match key {
            "pulses_per_detent" => (1, 64),
            "debounce_ms" | "loop_period_ms" => (1, i64::from(u32::MAX)),
            _ => (0, i64::from(u32::MAX)),
        };
        if v < min || v > max {
            errors.push(format!("[panel] {} must be {}-{}", key, min, max));
        }
    }
}

fn validate_profile(config: &toml::Value, errors: &mut Vec<String>) {
    for (field, key) in PROFILE_KEYS {
        let spec = field.spec();
        if let Some(v) = integer(config, "profile", key, errors) {
            if v < i64::from(spec.min) || v > i64::from(spec.max) {
                errors.push(format!(
                    "[profile] {} must be {}-{}",
                    key, spec.min, spec.max
                ));
            }
        }
    }

    if let Some(v) = integer(config, "profile", "soak_end_temp_c", errors) {
        if !(0..=300).contains(&v) {
            errors.push("[profile] soak_end_temp_c must be 0-300".to_string());
        }
    }
}

fn validate_ramps(config: &toml::Value, errors: &mut Vec<String>) {
    for key in RAMP_KEYS {
        if let Some(v) = integer(config, "ramps", key, errors) {
            if v < i64::from(i8::MIN) || v > i64::from(i8::MAX) {
                errors.push(format!("[ramps] {} must fit in -128..127", key));
            }
        }
    }
}

/// Write $OUT_DIR/panel_config.rs
fn generate_config(config: &toml::Value) {
    let value = |section: &str, key: &str| -> i64 {
        config
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(toml::Value::as_integer)
            .unwrap()
    };

    let mut out = String::from("// Generated from panel.toml by build.rs\n\n");

    out.push_str(&format!(
        "pub const PULSES_PER_DETENT: i32 = {};\n",
        value("panel", "pulses_per_detent")
    ));
    for (key, name) in [
        ("debounce_ms", "DEBOUNCE_MS"),
        ("run_pause_ms", "RUN_PAUSE_MS"),
        ("loop_period_ms", "LOOP_PERIOD_MS"),
    ] {
        out.push_str(&format!("pub const {}: u32 = {};\n", name, value("panel", key)));
    }

    for (_, key) in PROFILE_KEYS {
        out.push_str(&format!(
            "pub const {}: u16 = {};\n",
            key.to_uppercase(),
            value("profile", key)
        ));
    }
    out.push_str(&format!(
        "pub const SOAK_END_TEMP_C: u16 = {};\n",
        value("profile", "soak_end_temp_c")
    ));

    for key in RAMP_KEYS {
        out.push_str(&format!(
            "pub const RAMP_{}: i8 = {};\n",
            key.to_uppercase(),
            value("ramps", key)
        ));
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("panel_config.rs"), out).unwrap();
}
