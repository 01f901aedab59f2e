/// Single-slot style key-value storage used for resume state.
///
/// Writes are fire-and-forget: implementations that can fail log and move on, since the
/// worst outcome is losing the ability to resume.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str);
}
