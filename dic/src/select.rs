use crate::view::ViewState;

/// Resolves what the user typed at the meaning selector into a meaning index.
///
/// Accepts a 1-based number or text close enough to a single meaning.
pub fn resolve_selection(view: &ViewState, query: &str) -> Option<usize> {
    let query = query.trim();
    let meanings = &view.model().meanings;
    if let Ok(index) = query.parse::<usize>() {
        let index = index.wrapping_sub(1);
        return (index < meanings.len()).then_some(index);
    }

    let query = query.to_lowercase();
    let mut scores = meanings
        .iter()
        .zip(view.labels())
        .enumerate()
        .map(|(index, (meaning, label))| {
            let by_label = strsim::jaro(&label.to_lowercase(), &query);
            let by_definition = strsim::jaro(&meaning.definition.to_lowercase(), &query);
            (index, by_label.max(by_definition))
        })
        .collect::<Vec<(usize, f64)>>();
    // most similar at the start
    scores.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    let (index, best) = *scores.first()?;
    let runner_up = scores.get(1).map(|(_, score)| *score).unwrap_or(0.0);
    if (best > 0.9 && best - runner_up > 0.25) || best == 1.0 {
        Some(index)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use dictionary::{Meaning, ViewModel};

    use super::*;

    fn view(definitions: &[&str]) -> ViewState {
        ViewState::new(ViewModel {
            word: "run".to_owned(),
            meanings: definitions
                .iter()
                .map(|definition| Meaning {
                    part_of_speech: "verb".to_owned(),
                    definition: (*definition).to_owned(),
                    example: "No example available".to_owned(),
                })
                .collect(),
            phonetics: vec![],
            audio_urls: vec![],
        })
    }

    #[test]
    fn selects_by_number() {
        let view = view(&["move fast", "flow", "manage"]);
        assert_eq!(resolve_selection(&view, "1"), Some(0));
        assert_eq!(resolve_selection(&view, " 3 "), Some(2));
        assert_eq!(resolve_selection(&view, "0"), None);
        assert_eq!(resolve_selection(&view, "4"), None);
    }

    #[test]
    fn selects_by_exact_text_ignoring_case() {
        let view = view(&["move fast", "be in charge of a business"]);
        assert_eq!(resolve_selection(&view, "Be in charge of a business"), Some(1));
        assert_eq!(resolve_selection(&view, "verb: move fast..."), Some(0));
    }

    #[test]
    fn rejects_unrelated_text() {
        let view = view(&["move fast", "flow"]);
        assert_eq!(resolve_selection(&view, "qqqq"), None);
    }

    #[test]
    fn nothing_to_select_from() {
        let view = view(&[]);
        assert_eq!(resolve_selection(&view, "1"), None);
        assert_eq!(resolve_selection(&view, "move"), None);
    }
}
