/// Opaque scanner state demanded by the host's plugin contract.
///
/// The classifier keeps no state between invocations, so every lifecycle
/// hook here is inert: serialized state is always empty and restoring it
/// changes nothing. The hooks exist so a grammar build can hand the host
/// a complete scanner surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScannerState;

impl ScannerState {
    /// Host hook: allocate scanner state for a new parse.
    pub fn create() -> Self {
        ScannerState
    }

    /// Host hook: persist scanner state. Always empty.
    pub fn serialize(&self) -> Vec<u8> {
        Vec::new()
    }

    /// Host hook: restore scanner state. No-op.
    pub fn deserialize(&mut self, _bytes: &[u8]) {}

    /// Host hook: release scanner state. No-op.
    pub fn destroy(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_state_is_empty() {
        let state = ScannerState::create();
        assert!(state.serialize().is_empty());
    }

    #[test]
    fn deserialize_accepts_any_bytes() {
        let mut state = ScannerState::create();
        state.deserialize(b"");
        state.deserialize(b"stale bytes from an older host");
        assert_eq!(state, ScannerState);
        state.destroy();
    }
}
