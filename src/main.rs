use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};

use keydispatch::cli::{CliArgs, CliCommand};
use keydispatch::keymap::{
    key_from_event, load_keymap, parse_key_spec, ActionClass, Command, Key, KeyCode, Keymap,
    LoadReport, Modifiers,
};

fn main() -> Result<ExitCode> {
    keydispatch::tracing::init();

    let args = CliArgs::parse();
    let path = args.bindings_path();
    let (mut keymap, report) = load_keymap(path.as_deref());

    match args.command {
        CliCommand::List { json } => list(&keymap, json)?,
        CliCommand::Resolve { key } => resolve(&keymap, &key)?,
        CliCommand::Check => return Ok(check(&report, path.as_deref())),
        CliCommand::Bind { key, action } => {
            let Some(path) = path else {
                bail!("No config directory available; pass --config");
            };
            let outcome = keymap
                .rebind(&key, &action, &path)
                .with_context(|| format!("Failed to bind {key}"))?;
            if let Some(warning) = outcome.conflict_warning(&key) {
                eprintln!("{warning}");
            }
            println!("{key} = {action} (saved to {})", path.display());
        }
        CliCommand::Probe => probe(&keymap)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn list(keymap: &Keymap, json: bool) -> Result<()> {
    let entries = keymap.entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (title, class) in [
        ("Keyboard bindings", ActionClass::Keyboard),
        ("Mouse bindings", ActionClass::Mouse),
    ] {
        println!("{title}:");
        for entry in entries.iter().filter(|e| e.class == class) {
            let key = entry.key.to_string();
            println!("  {key:<24} {}", entry.actions.join(","));
        }
        println!();
    }

    if let Some(help) = keymap.help_key() {
        println!("Help: {help}");
    }
    Ok(())
}

fn resolve(keymap: &Keymap, key_spec: &str) -> Result<()> {
    let key = parse_key_spec(key_spec)?;
    println!("{key_spec} -> {key}");

    if let Some(chain) = keymap.keyboard_chain(&key) {
        println!("keyboard: {chain}");
    } else if let Some(chain) = keymap.mouse_chain(&key) {
        println!("mouse: {chain}");
    } else {
        println!("unbound");
    }
    Ok(())
}

fn check(report: &LoadReport, path: Option<&Path>) -> ExitCode {
    match (&report.user_file, path) {
        (Some(file), _) => println!(
            "Loaded {} entries from {}",
            report.user_entries,
            file.display()
        ),
        (None, Some(path)) if report.is_clean() => {
            println!("No bindings file at {}, defaults only", path.display())
        }
        _ => {}
    }

    for error in &report.errors {
        println!("{error}");
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Key that ends the probe: whatever runs Quit, or Esc if nothing does
fn is_quit(keymap: &Keymap, key: &Key, quit_bound: bool) -> bool {
    if quit_bound {
        keymap
            .keyboard_chain(key)
            .is_some_and(|chain| chain.contains(Command::Quit))
    } else {
        *key == Key::code(KeyCode::Esc, Modifiers::NONE)
    }
}

fn probe(keymap: &Keymap) -> Result<()> {
    let quit_bound = keymap
        .keyboard_bindings()
        .any(|(_, chain)| chain.contains(Command::Quit));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enable mouse capture");
    }

    let result = probe_loop(keymap, quit_bound, &mut stdout);

    // Restore terminal
    let _ = execute!(stdout, DisableMouseCapture);
    disable_raw_mode().context("Failed to restore terminal")?;

    result
}

fn probe_loop(keymap: &Keymap, quit_bound: bool, out: &mut impl Write) -> Result<()> {
    let exit_hint = if quit_bound { "the Quit key" } else { "Esc" };
    write!(out, "Press keys or click; {exit_hint} exits\r\n")?;
    out.flush()?;

    loop {
        let event = event::read()?;
        let Some(key) = key_from_event(&event) else {
            continue;
        };

        let name = key.to_string();
        let line = match (keymap.keyboard_chain(&key), keymap.mouse_chain(&key)) {
            (Some(chain), _) => format!("{name:<24} keyboard: {chain}"),
            (None, Some(chain)) => format!("{name:<24} mouse: {chain}"),
            // Unbound drags and wheel ticks would flood the output
            (None, None) if matches!(event, Event::Mouse(_)) => continue,
            (None, None) => format!("{name:<24} unbound"),
        };
        write!(out, "{line}\r\n")?;
        out.flush()?;

        if is_quit(keymap, &key, quit_bound) {
            return Ok(());
        }
    }
}
