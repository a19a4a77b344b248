//! Message placement: service files hold only request and response messages.

use pblint_core::{EntityRef, MessageType, SchemaFile, Violation, ViolationKind};

/// File name suffix marking a service definition file.
pub const SERVICE_FILE_SUFFIX: &str = "_service.proto";

const MESSAGE_SUFFIXES: [&str; 2] = ["Request", "Response"];

/// A model message (not ending in `Request` or `Response`) must not be
/// declared in a `_service.proto` file.
#[must_use]
pub fn check_model_message_placement(
    file: &SchemaFile,
    message: &MessageType,
) -> Option<Violation> {
    if MESSAGE_SUFFIXES
        .iter()
        .any(|suffix| message.name.ends_with(suffix))
    {
        return None;
    }

    file.name.ends_with(SERVICE_FILE_SUFFIX).then(|| {
        Violation::new(
            ViolationKind::ModelMessageInServiceFile,
            EntityRef::message(&file.name, &message.name),
        )
        .with_actual(file.name.as_str())
    })
}
