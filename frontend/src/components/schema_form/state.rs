//! Component state for the schema.ini form.
//!
//! All form values live in `common::form::SchemaForm`; this struct only adds
//! the bits that exist for the widgets (expander, pending download).

use common::form::SchemaForm;

pub struct SchemaFormComponent {
    /// Everything the user typed. Rebuilt into a descriptor on every render.
    pub form: SchemaForm,

    /// Whether the options expander is open.
    pub options_open: bool,

    /// A download request is in flight; the button is disabled meanwhile.
    pub downloading: bool,
}

impl SchemaFormComponent {
    pub fn new() -> Self {
        Self {
            form: SchemaForm::default(),
            options_open: false,
            downloading: false,
        }
    }
}
