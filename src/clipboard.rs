//! Clipboard collaborator contract (spec §4.12, §6). The interactive
//! UI's own clipboard IPC is explicitly out of scope (spec §1); this
//! crate defines the trait boundary plus a no-op implementation so the
//! demo binary has something to hand a selected match to.

/// Accepts copied text from a UI collaborator. OS clipboard integration
/// is left to the real interactive frontend.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str);
}

/// Records the most recent write without touching any OS clipboard.
#[derive(Debug, Default)]
pub struct NullClipboard {
    last: Option<String>,
}

impl NullClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_write(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl ClipboardWriter for NullClipboard {
    fn write(&mut self, text: &str) {
        self.last = Some(text.to_owned());
    }
}
