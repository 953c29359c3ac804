mod question;

pub use question::Question;

/// Widget lifecycle. `Submitted` is terminal; there is no reset path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Rendered,
    Submitted,
}
