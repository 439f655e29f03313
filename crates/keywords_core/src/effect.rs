#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push the current token list to the host.
    ReportValue(Vec<String>),
    /// Tell the host how tall the control rendered.
    ReportRenderedHeight { height: u32 },
    /// The input control must not run its own handling of the key just pressed.
    SuppressDefaultKey,
}
