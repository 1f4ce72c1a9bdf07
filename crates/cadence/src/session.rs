//! Interactive schedule editing over a line-oriented terminal.
//!
//! Lines starting with `:` are commands. Any other line is an edit: in
//! preset mode it picks a preset by number or label, in custom mode it
//! replaces the schedule string.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use cadence_schedule::{CUSTOM_PLACEHOLDER, EditMode, EditorView, ScheduleEditor, ScheduleError};
use tracing::{debug, info};

const HELP: &str = "\
commands:
  :preset    show the preset picker
  :custom    show the free-text field
  :toggle    switch between the two
  :list      list presets
  :show      show the current schedule
  :help      show this help
  :quit      finish editing
preset mode: enter a preset number or label
custom mode: enter a schedule string
";

enum Command {
    Mode(EditMode),
    Toggle,
    List,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let name = line.trim().strip_prefix(':')?;
        Some(match name {
            "preset" => Command::Mode(EditMode::Preset),
            "custom" => Command::Mode(EditMode::Custom),
            "toggle" => Command::Toggle,
            "list" => Command::List,
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

/// Run an editing session until `:quit` or end of input.
///
/// Returns the final schedule string.
pub fn run<R: BufRead, W: Write>(initial: &str, input: R, out: &mut W) -> io::Result<String> {
    let changes = RefCell::new(Vec::new());
    let mut editor = ScheduleEditor::new(initial)
        .on_change(|value| changes.borrow_mut().push(value.to_string()));

    info!(initial, mode = %editor.mode(), "editing session started");
    write_view(out, &editor.view())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}> ", editor.mode())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        match Command::parse(line) {
            Some(Command::Mode(mode)) => {
                editor.set_mode(mode);
                write_view(out, &editor.view())?;
            }
            Some(Command::Toggle) => {
                editor.toggle_mode();
                write_view(out, &editor.view())?;
            }
            Some(Command::List) => write_options(out, &editor)?,
            Some(Command::Show) => write_view(out, &editor.view())?,
            Some(Command::Help) => out.write_all(HELP.as_bytes())?,
            Some(Command::Quit) => break,
            Some(Command::Unknown(name)) => writeln!(out, "error: unknown command :{name}")?,
            None => {
                if let Err(e) = apply_edit(&mut editor, line) {
                    writeln!(out, "error: {e}")?;
                }
            }
        }

        for value in changes.borrow_mut().drain(..) {
            debug!(value = %value, "schedule change reported");
            writeln!(out, "changed: {value}")?;
            writeln!(out, "  {}", editor.description())?;
        }
    }

    let value = editor.value().to_string();
    info!(value = %value, "editing session finished");
    Ok(value)
}

fn apply_edit(editor: &mut ScheduleEditor<'_>, line: &str) -> Result<(), ScheduleError> {
    match editor.mode() {
        EditMode::Custom => editor.set_text(line),
        EditMode::Preset => {
            let choice = line.trim();
            match choice.parse::<usize>() {
                Ok(number) if number > 0 => editor.select_preset(number - 1).map(|_| ()),
                _ => editor.select_preset_by_label(choice).map(|_| ()),
            }
        }
    }
}

fn write_view<W: Write>(out: &mut W, view: &EditorView) -> io::Result<()> {
    writeln!(out, "mode: {}", view.mode)?;
    match view.mode {
        EditMode::Preset => writeln!(out, "preset: {}", view.picker_label)?,
        EditMode::Custom if view.value.is_empty() => {
            writeln!(out, "schedule: (empty, e.g. {CUSTOM_PLACEHOLDER})")?
        }
        EditMode::Custom => writeln!(out, "schedule: {}", view.value)?,
    }
    writeln!(out, "description: {}", view.description)
}

fn write_options<W: Write>(out: &mut W, editor: &ScheduleEditor<'_>) -> io::Result<()> {
    for (i, preset) in editor.catalog().entries().iter().enumerate() {
        let marker = if preset.cron == editor.value() { '*' } else { ' ' };
        writeln!(
            out,
            "{marker}{:>2}. {:<22} {:<14} {}",
            i + 1,
            preset.label,
            preset.cron,
            preset.description
        )?;
    }
    Ok(())
}
