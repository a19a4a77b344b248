use pblint_core::{EntityRef, Method, SchemaFile, Service};

/// A method together with the service and file it is declared in.
#[derive(Debug, Clone, Copy)]
pub struct MethodScope<'a> {
    pub file: &'a SchemaFile,
    pub service: &'a Service,
    pub method: &'a Method,
}

impl<'a> MethodScope<'a> {
    #[must_use]
    pub const fn new(file: &'a SchemaFile, service: &'a Service, method: &'a Method) -> Self {
        Self {
            file,
            service,
            method,
        }
    }

    #[must_use]
    pub fn entity(&self) -> EntityRef {
        EntityRef::method(&self.file.name, &self.service.name, &self.method.name)
    }
}
