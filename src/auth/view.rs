/// Render-ready snapshot of one form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Raw value; secret fields are masked by the widget, not here
    pub value: String,
    pub cursor: usize,
    pub secret: bool,
    pub error: Option<String>,
}

/// Render-ready snapshot of a whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
    /// Generic error banner, present only after a failure
    pub banner: Option<&'static str>,
    pub submit_enabled: bool,
}

impl FormView {
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}
