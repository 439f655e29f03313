use keywords_bridge::InputControl;
use keywords_core::KeywordsViewModel;

/// Pixel height of one text row.
pub const ROW_HEIGHT_PX: u32 = 24;
/// Vertical padding above and below the control.
pub const PADDING_PX: u32 = 6;
const WRAP_COLUMNS: usize = 60;

/// Plain-text stand-in for the chip widget: renders to a string frame.
#[derive(Debug, Default)]
pub struct TextInputControl {
    frame: String,
    renders: usize,
}

impl TextInputControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent render pass.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl InputControl for TextInputControl {
    fn render(&mut self, view: &KeywordsViewModel) -> u32 {
        let mut rows = vec![match view.max_tokens {
            Some(max) => format!("{} ({}/{})", view.label, view.tokens.len(), max),
            None => view.label.clone(),
        }];
        rows.extend(chip_rows(&view.tokens));

        let field = if view.draft.is_empty() {
            format!("> ({})", view.placeholder)
        } else {
            format!("> {}_", view.draft)
        };
        rows.push(field);

        self.frame = rows.join("\n");
        self.renders += 1;
        rows.len() as u32 * ROW_HEIGHT_PX + 2 * PADDING_PX
    }
}

fn chip_rows(tokens: &[String]) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for token in tokens {
        let chip = format!("[{token} x]");
        let width = current.chars().count() + chip.chars().count() + 1;
        if !current.is_empty() && width > WRAP_COLUMNS {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&chip);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(tokens: &[&str], draft: &str) -> KeywordsViewModel {
        KeywordsViewModel {
            label: "Tags".to_string(),
            placeholder: "Add a tag".to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            draft: draft.to_string(),
            ..KeywordsViewModel::default()
        }
    }

    #[test]
    fn empty_control_shows_placeholder() {
        let mut control = TextInputControl::new();
        let height = control.render(&view(&[], ""));

        assert_eq!(control.frame(), "Tags\n> (Add a tag)");
        assert_eq!(height, 2 * ROW_HEIGHT_PX + 2 * PADDING_PX);
    }

    #[test]
    fn chips_and_draft_are_drawn() {
        let mut control = TextInputControl::new();
        control.render(&view(&["rust", "wasm"], "ser"));

        assert_eq!(control.frame(), "Tags\n[rust x] [wasm x]\n> ser_");
        assert_eq!(control.render_count(), 1);
    }

    #[test]
    fn long_chip_lists_wrap_and_grow() {
        let tokens: Vec<String> = (0..12).map(|i| format!("keyword-{i}")).collect();
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let mut control = TextInputControl::new();

        let short = control.render(&view(&refs[..1], ""));
        let tall = control.render(&view(&refs, ""));

        assert!(tall > short);
        assert!(control.frame().lines().all(|line| line.chars().count() <= 60));
    }
}
