use osprey_core::api::{Presenter, PresenterEvent};

/// Prints a one-line mascot to stderr. Command output on stdout is untouched.
pub struct MascotPresenter;

impl MascotPresenter {
    pub fn boxed_if(enabled: bool) -> Option<Box<dyn Presenter>> {
        enabled.then(|| Box::new(MascotPresenter) as Box<dyn Presenter>)
    }
}

fn mascot_line(event: &PresenterEvent) -> Option<String> {
    match event {
        PresenterEvent::ThemeChanged { theme } => Some(format!("🦅 Osprey circles overhead: {theme} mode")),
        PresenterEvent::Failed { verb } => Some(format!("🦎 Mongoose sniffs at '{verb}' and shrugs")),
        PresenterEvent::Succeeded { .. } => None,
    }
}

impl Presenter for MascotPresenter {
    fn present(&self, event: &PresenterEvent) {
        if let Some(line) = mascot_line(event) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_theme_changes_and_failures_get_a_mascot() {
        let theme = mascot_line(&PresenterEvent::ThemeChanged {
            theme: "mario".to_string(),
        });
        assert_eq!(theme.as_deref(), Some("🦅 Osprey circles overhead: mario mode"));
        assert!(mascot_line(&PresenterEvent::Succeeded {
            verb: "ls".to_string()
        })
        .is_none());
        assert!(mascot_line(&PresenterEvent::Failed {
            verb: "cat".to_string()
        })
        .unwrap()
        .contains("'cat'"));
    }

    #[test]
    fn disabled_flag_builds_nothing() {
        assert!(MascotPresenter::boxed_if(false).is_none());
        assert!(MascotPresenter::boxed_if(true).is_some());
    }
}
