//! Scripted host page: owns several mounted controls and feeds them events.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail};
use keywords_bridge::{JsonLinesBridge, KeywordsComponent};
use keywords_core::{Msg, CONFIRM_KEY};
use keywords_logging::{kw_debug, kw_warn};

use crate::render::TextInputControl;
use crate::widgets::WidgetSpec;

type Component = KeywordsComponent<JsonLinesBridge<Box<dyn Write>>, TextInputControl>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Use(String),
    Event(Msg),
    Show,
    Summary,
}

fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };
    let command = match word {
        "use" if !rest.trim().is_empty() => Command::Use(rest.trim().to_string()),
        "type" => Command::Event(Msg::DraftChanged(rest.to_string())),
        "key" if !rest.trim().is_empty() => Command::Event(Msg::KeyPressed(rest.trim().to_string())),
        "enter" => Command::Event(Msg::KeyPressed(CONFIRM_KEY.to_string())),
        "blur" => Command::Event(Msg::FocusLost),
        "delete" => Command::Event(Msg::DeleteToken(rest.to_string())),
        "replace" => Command::Event(Msg::BulkReplace(split_list(rest))),
        "show" => Command::Show,
        "summary" => Command::Summary,
        "use" | "key" => bail!("`{word}` needs an argument"),
        other => bail!("unknown command `{other}`"),
    };
    Ok(Some(command))
}

fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(ToOwned::to_owned).collect()
}

pub struct DemoHost {
    widgets: Vec<(String, Component)>,
    current: usize,
}

impl DemoHost {
    /// Mounts one component per spec; `make_writer` supplies each bridge's output.
    pub fn new(
        specs: &[WidgetSpec],
        make_writer: impl Fn() -> Box<dyn Write>,
    ) -> anyhow::Result<Self> {
        if specs.is_empty() {
            bail!("no widgets to mount");
        }
        let widgets = specs
            .iter()
            .map(|spec| {
                let component = KeywordsComponent::mount(
                    spec.to_config(),
                    JsonLinesBridge::new(make_writer()),
                    TextInputControl::new(),
                );
                (spec.key.clone(), component)
            })
            .collect();
        Ok(Self {
            widgets,
            current: 0,
        })
    }

    /// Values as last pushed to the host, per widget key.
    pub fn host_values(&self) -> Vec<(&str, &[String])> {
        self.widgets
            .iter()
            .map(|(key, component)| (key.as_str(), component.bridge().last_value()))
            .collect()
    }

    pub fn current_key(&self) -> &str {
        &self.widgets[self.current].0
    }

    /// Runs commands until `input` is exhausted. Bad lines are reported and skipped.
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match parse_command(&line).and_then(|command| match command {
                Some(command) => self.execute(command, out),
                None => Ok(()),
            }) {
                Ok(()) => {}
                Err(err) => {
                    kw_warn!("Script line {}: {}", index + 1, err);
                    writeln!(out, "error (line {}): {}", index + 1, err)?;
                }
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<()> {
        match command {
            Command::Use(key) => {
                self.current = self
                    .widgets
                    .iter()
                    .position(|(k, _)| *k == key)
                    .ok_or_else(|| anyhow!("no widget with key `{key}`"))?;
                writeln!(out, "using {key}")?;
            }
            Command::Event(msg) => {
                kw_debug!("{} <- {:?}", self.current_key(), msg);
                let (_, component) = &mut self.widgets[self.current];
                if component.handle(msg) {
                    writeln!(out, "(default key handling suppressed)")?;
                }
            }
            Command::Show => {
                let (key, component) = &self.widgets[self.current];
                let control = component.control();
                writeln!(out, "-- {key} (render #{})", control.render_count())?;
                writeln!(out, "{}", control.frame())?;
            }
            Command::Summary => {
                for (key, value) in self.host_values() {
                    writeln!(out, "{key}: {value:?}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::widgets::builtin_widgets;

    fn host() -> DemoHost {
        DemoHost::new(&builtin_widgets(), || Box::new(io::sink())).unwrap()
    }

    fn run(host: &mut DemoHost, script: &str) -> String {
        let mut out = Vec::new();
        host.run_script(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  # note").unwrap(), None);
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(
            parse_command("type  two spaces").unwrap(),
            Some(Command::Event(Msg::DraftChanged(" two spaces".to_string())))
        );
        assert_eq!(
            parse_command("replace a,b").unwrap(),
            Some(Command::Event(Msg::BulkReplace(strings(&["a", "b"]))))
        );
        assert_eq!(
            parse_command("replace").unwrap(),
            Some(Command::Event(Msg::BulkReplace(Vec::new())))
        );
        assert!(parse_command("key").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn mounted_widgets_report_initial_values() {
        let host = host();
        let values = host.host_values();
        assert_eq!(values[0], ("basic", &[][..]));
        assert_eq!(values[2].1, strings(&["Streamlit", "Python", "Data Science"]).as_slice());
    }

    #[test]
    fn script_drives_selected_widget() {
        let mut host = host();
        let output = run(
            &mut host,
            "use max5\ntype rust\nenter\ntype rust\nenter\ntype serde\nblur\nsummary\n",
        );

        assert!(output.contains("using max5"));
        assert!(output.contains("max5: [\"rust\", \"serde\"]"));
        assert_eq!(host.current_key(), "max5");
    }

    #[test]
    fn limited_widget_keeps_refused_draft() {
        let mut host = host();
        run(&mut host, "use max5\nreplace a,b,c,d,e,f\ntype g\nenter\nshow\n");

        let values = host.host_values();
        assert_eq!(values[1].1, strings(&["a", "b", "c", "d", "e"]).as_slice());
        let (_, component) = &host.widgets[1];
        assert_eq!(component.state().draft(), "g");
        assert!(component.control().frame().ends_with("> g_"));
    }

    #[test]
    fn bad_lines_are_reported_and_skipped() {
        let mut host = host();
        let output = run(&mut host, "use nowhere\nwiggle\ntype a\nenter\nsummary\n");

        assert!(output.contains("error (line 1): no widget with key `nowhere`"));
        assert!(output.contains("error (line 2): unknown command `wiggle`"));
        assert!(output.contains("basic: [\"a\"]"));
    }

    #[test]
    fn delete_from_prepopulated_widget() {
        let mut host = host();
        run(&mut host, "use defaults\ndelete Python\n");
        assert_eq!(host.host_values()[2].1, strings(&["Streamlit", "Data Science"]).as_slice());
    }
}
