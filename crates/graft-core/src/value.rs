//! Edit-routine return values

use std::fmt;

use serde::Serialize;

use graft_source_map::EditBuffer;

/// A value produced by an edit routine.
///
/// The adapter accepts three shapes: replacement text for the whole module,
/// a buffer the routine built itself, or nothing (`None` at the call site,
/// meaning the buffer the routine was handed is used as mutated in place).
/// Anything else is a caller programming error: it travels as
/// [`EditValue::Other`] and is rejected during normalization.
#[derive(Debug)]
pub enum EditValue {
    /// Replacement text for the entire module source.
    Text(String),
    /// A buffer that replaces the working buffer outright.
    Buffer(EditBuffer),
    /// Any other value; rejected with `InvalidReturnShape`.
    Other(UnexpectedValue),
}

impl From<String> for EditValue {
    fn from(text: String) -> Self {
        EditValue::Text(text)
    }
}

impl From<&str> for EditValue {
    fn from(text: &str) -> Self {
        EditValue::Text(text.to_string())
    }
}

impl From<EditBuffer> for EditValue {
    fn from(buffer: EditBuffer) -> Self {
        EditValue::Buffer(buffer)
    }
}

/// A type-erased value the adapter does not understand.
///
/// Keeps just enough of the value to render it in the failure message: the
/// structured JSON encoding when the value serializes cleanly, its `Debug`
/// form when the encoding itself fails (self-referential maps, non-string
/// keys, and the like).
pub struct UnexpectedValue(Box<dyn ErasedValue>);

impl UnexpectedValue {
    /// Erase `value` for later rendering.
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + fmt::Debug + Send + Sync + 'static,
    {
        UnexpectedValue(Box::new(value))
    }

    /// Best-effort textual rendering of the erased value.
    pub fn render(&self) -> String {
        self.0.encode().unwrap_or_else(|_| self.0.describe())
    }
}

impl fmt::Debug for UnexpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnexpectedValue").field(&self.render()).finish()
    }
}

trait ErasedValue: Send + Sync {
    fn encode(&self) -> serde_json::Result<String>;
    fn describe(&self) -> String;
}

impl<T> ErasedValue for T
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_render_number() {
        assert_eq!(UnexpectedValue::new(0).render(), "0");
    }

    #[test]
    fn test_render_structured_value() {
        let value = UnexpectedValue::new(vec![1, 2, 3]);
        assert_eq!(value.render(), "[1,2,3]");
    }

    #[test]
    fn test_render_falls_back_to_debug() {
        // Tuple keys cannot become JSON object keys, so the structured
        // encoding fails and the Debug form is used instead.
        let mut map = HashMap::new();
        map.insert((1u8, 2u8), 3u8);
        let rendered = UnexpectedValue::new(map).render();
        assert!(rendered.contains("(1, 2)"));
        assert!(rendered.contains('3'));
    }

    #[test]
    fn test_conversions() {
        assert!(matches!(EditValue::from("abc"), EditValue::Text(text) if text == "abc"));
        assert!(matches!(
            EditValue::from(EditBuffer::new("x")),
            EditValue::Buffer(_)
        ));
    }
}
