/// What happened in the last dispatch, for decorative output only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    ThemeChanged { theme: String },
    Succeeded { verb: String },
    Failed { verb: String },
}

/// Optional decoration hook. Nothing it does can change a command's output.
pub trait Presenter: Send + Sync {
    fn present(&self, event: &PresenterEvent);
}
