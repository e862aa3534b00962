// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}
