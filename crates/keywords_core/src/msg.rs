/// Key name that promotes the draft to a token.
pub const CONFIRM_KEY: &str = "Enter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Input control reported a complete new selection (paste, programmatic change).
    BulkReplace(Vec<String>),
    /// User edited the draft text.
    DraftChanged(String),
    /// A key went down while the text field had focus.
    KeyPressed(String),
    /// The text field lost focus.
    FocusLost,
    /// User removed a chip.
    DeleteToken(String),
    /// A render pass completed at the given pixel height.
    Rendered { height: u32 },
    /// Fallback for placeholder wiring.
    NoOp,
}
