use crate::{OutputMode, emit_success};
use owo_colors::OwoColorize;
use parse_kernel::config::{self, KernelConfig};
use parse_kernel::ui::{Icons, banner, info, section, settings_table, success, warn};
use parse_kernel::{CommandOptions, KernelAdapter};
use std::path::Path;

pub fn run_version(output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        banner(
            &format!("{}", "parse-kernel".bold().style(parse_kernel::ui::theme().info.clone())),
            &format!("Version {}", parse_kernel::VERSION.bold()),
        );
    } else {
        let data = serde_json::json!({
            "version": parse_kernel::VERSION,
        });
        emit_success(output_mode, "version", data)?;
    }
    Ok(())
}

pub fn run_path(output_mode: OutputMode, adapter: &KernelAdapter) -> anyhow::Result<()> {
    let kernel = adapter.kernel().display().to_string();
    let lib = adapter.lib().display().to_string();

    if output_mode.is_human() {
        info(Icons::PACKAGE, "Kernel", &kernel);
        info(Icons::FILE, "Library", &lib);
        section("Settings");
        println!(
            "{}",
            settings_table(&[
                ("Runtime", adapter.runtime()),
                ("Language", adapter.language().as_str()),
                ("Version", parse_kernel::VERSION),
            ])
        );
    } else {
        let data = serde_json::json!({
            "kernel": kernel,
            "lib": lib,
            "runtime": adapter.runtime(),
            "language": adapter.language(),
        });
        emit_success(output_mode, "path", data)?;
    }
    Ok(())
}

/// Print the engine command for `options`.
///
/// Human mode prints the bare command so it can be piped into a shell.
pub fn run_command(
    output_mode: OutputMode,
    adapter: &KernelAdapter,
    options: &CommandOptions,
) -> anyhow::Result<()> {
    let command = adapter.command(options);

    if output_mode.is_human() {
        println!("{}", command);
    } else {
        let invocation = adapter.invocation(options);
        let data = serde_json::json!({
            "command": command,
            "program": invocation.program(),
            "args": invocation.args(),
            "input": invocation.input().display().to_string(),
        });
        emit_success(output_mode, "command", data)?;
    }
    Ok(())
}

pub fn run_server(
    output_mode: OutputMode,
    adapter: &KernelAdapter,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let command = adapter.server_command(port);

    if output_mode.is_human() {
        println!("{}", command);
    } else {
        let data = serde_json::json!({
            "command": command,
            "port": port.unwrap_or(parse_kernel::kernel::DEFAULT_SERVER_PORT),
        });
        emit_success(output_mode, "server", data)?;
    }
    Ok(())
}

pub fn run_init(output_mode: OutputMode, path: &Path, force: bool) -> anyhow::Result<()> {
    if force && path.exists() {
        tracing::info!("Overwriting existing config at {}", path.display());
        if output_mode.is_human() {
            warn(&format!("Overwriting {}", path.display()));
        }
    }

    config::write_config(path, &KernelConfig::starter(), force)?;

    if output_mode.is_human() {
        success(&format!("Wrote {}", path.display()));
        println!(
            "  {} Set {} to point at a custom install root",
            Icons::GEAR,
            "root".bold()
        );
    } else {
        let data = serde_json::json!({
            "config": path.display().to_string(),
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}
