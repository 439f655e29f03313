use keywords_logging::{kw_debug, kw_trace};

use crate::{Admission, ControlState, Effect, Msg, CONFIRM_KEY};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every transition is total. Rejected input is a silent no-op.
pub fn update(mut state: ControlState, msg: Msg) -> (ControlState, Vec<Effect>) {
    let effects = match msg {
        Msg::BulkReplace(tokens) => {
            let offered = tokens.len();
            state.replace_tokens(tokens);
            kw_debug!(
                "Bulk replace: offered={} kept={}",
                offered,
                state.tokens().len()
            );
            vec![report_value(&state)]
        }
        Msg::DraftChanged(text) => {
            state.set_draft(text);
            Vec::new()
        }
        Msg::KeyPressed(key) => {
            if key != CONFIRM_KEY || state.draft().trim().is_empty() {
                return (state, Vec::new());
            }
            let mut effects = vec![Effect::SuppressDefaultKey];
            effects.extend(confirm_draft(&mut state));
            effects
        }
        Msg::FocusLost => confirm_draft(&mut state),
        Msg::DeleteToken(token) => {
            if !state.remove_token(&token) {
                kw_debug!("Delete of unknown token {:?}", token);
            }
            vec![report_value(&state)]
        }
        Msg::Rendered { height } => {
            kw_trace!("Render pass at height {}", height);
            vec![
                report_value(&state),
                Effect::ReportRenderedHeight { height },
            ]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn confirm_draft(state: &mut ControlState) -> Vec<Effect> {
    match state.admit_draft() {
        Admission::Accepted => {
            state.clear_draft();
            vec![report_value(state)]
        }
        Admission::Duplicate => {
            kw_debug!("Duplicate token {:?} ignored", state.draft().trim());
            state.clear_draft();
            Vec::new()
        }
        // Keep the draft so the user still sees what was refused.
        Admission::LimitReached => {
            kw_debug!(
                "Token limit {:?} reached; draft kept",
                state.limit().max()
            );
            Vec::new()
        }
        Admission::Empty => Vec::new(),
    }
}

fn report_value(state: &ControlState) -> Effect {
    Effect::ReportValue(state.tokens().to_vec())
}
