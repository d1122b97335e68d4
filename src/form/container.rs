//! Mount targets for the payment form
//!
//! The presenter never looks elements up globally. It is handed a
//! [`Container`] directly, or a [`Document`] plus an id when the caller only
//! knows the id.

use super::FormField;
use std::collections::HashMap;

/// An element the payment form can be mounted into
pub trait Container {
    /// Identifier of the element
    fn id(&self) -> &str;

    /// Replace the element's contents with the form and an empty status block.
    ///
    /// Field values are reset to empty.
    fn mount(&mut self, form_html: String, status_html: String);

    /// Current value of a field, or `None` when no form is mounted
    fn field_value(&self, field: FormField) -> Option<String>;

    /// Set a field's value; returns `false` when no form is mounted
    fn set_field_value(&mut self, field: FormField, value: String) -> bool;

    /// Replace the status block
    fn set_status(&mut self, status_html: String);
}

/// A set of containers addressable by id
pub trait Document {
    /// Container type held by this document
    type Container: Container;

    /// Find a container by id
    fn container_mut(&mut self, id: &str) -> Option<&mut Self::Container>;
}

/// In-memory container, used for server-side rendering and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    id: String,
    form_html: String,
    status_html: String,
    fields: Option<HashMap<FormField, String>>,
}

impl MemoryContainer {
    /// Create an empty container
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Whether a form has been mounted
    pub fn is_mounted(&self) -> bool {
        self.fields.is_some()
    }

    /// Fill a field, returning `self` for chaining
    pub fn fill(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set_field_value(field, value.into());
        self
    }

    /// Markup of the status block alone
    pub fn status_html(&self) -> &str {
        &self.status_html
    }

    /// Full inner markup: the form followed by the status block
    pub fn inner_html(&self) -> String {
        format!("{}\n{}", self.form_html, self.status_html)
    }
}

impl Container for MemoryContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn mount(&mut self, form_html: String, status_html: String) {
        self.form_html = form_html;
        self.status_html = status_html;
        self.fields = Some(
            FormField::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        );
    }

    fn field_value(&self, field: FormField) -> Option<String> {
        self.fields.as_ref()?.get(&field).cloned()
    }

    fn set_field_value(&mut self, field: FormField, value: String) -> bool {
        match self.fields.as_mut() {
            Some(fields) => {
                fields.insert(field, value);
                true
            }
            None => false,
        }
    }

    fn set_status(&mut self, status_html: String) {
        self.status_html = status_html;
    }
}

/// In-memory document holding named containers
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    containers: HashMap<String, MemoryContainer>,
}

impl MemoryDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty container with the given id
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.containers.insert(id.clone(), MemoryContainer::new(id));
        self
    }

    /// Borrow a container by id
    pub fn container(&self, id: &str) -> Option<&MemoryContainer> {
        self.containers.get(id)
    }
}

impl Document for MemoryDocument {
    type Container = MemoryContainer;

    fn container_mut(&mut self, id: &str) -> Option<&mut MemoryContainer> {
        self.containers.get_mut(id)
    }
}
