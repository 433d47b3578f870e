//! Temporary data.

/// Temporary data used by various parts of the engine.
///
/// Make sure to check any documented invariants when using this. Also make sure to check all
/// existing users when adding invariants.
#[derive(Default)]
pub struct TmpData {
    /// A boolean for each variable.
    ///
    /// Reset to all-false, keep size.
    pub seen: Vec<bool>,
}

impl TmpData {
    /// Update structures for a new variable count.
    pub fn set_var_count(&mut self, count: usize) {
        self.seen.resize(count, false);
    }
}
