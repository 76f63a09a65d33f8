// Keyfob — Clipboard integration
//
// Generated passwords are placed on the system clipboard so they can be
// pasted straight into a signup form. Clipboard access can fail on headless
// machines; callers treat that as a warning, not a failed generation.

/// Copy the given text to the system clipboard.
pub fn copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())
}
