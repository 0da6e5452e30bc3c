/// A record that can flow through a [`ListViewModel`](super::ListViewModel).
///
/// Only the fields named in the list configuration are ever inspected.
pub trait ListRecord {
    /// Unique identifier of the record
    fn record_id(&self) -> String;

    /// Returns the value of the named field, or `None` when the record has no
    /// such field or the value is missing.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Field value with missing values read as an empty string
    fn field_text(&self, field: &str) -> String {
        self.field_value(field).unwrap_or_default()
    }
}
