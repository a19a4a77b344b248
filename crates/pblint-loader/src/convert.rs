//! Conversion from `prost-reflect` descriptors to the pblint schema model.

use pblint_core::{
    HTTP_RULE_EXTENSION, MessageRef, MessageType, Method, OptionMap, SchemaFile, Service,
};
use prost_reflect::{
    FileDescriptor, MapKey, MessageDescriptor, MethodDescriptor, ServiceDescriptor, Value,
};
use serde_json::Value as Json;
use tracing::debug;

use crate::error::LoaderError;

pub(crate) fn schema_file(file: &FileDescriptor) -> Result<SchemaFile, LoaderError> {
    Ok(SchemaFile {
        name: file.name().to_string(),
        services: file
            .services()
            .map(|service| service_of(&service))
            .collect::<Result<_, _>>()?,
        messages: file
            .messages()
            .map(|message| MessageType::new(message.name()))
            .collect(),
    })
}

fn service_of(service: &ServiceDescriptor) -> Result<Service, LoaderError> {
    Ok(Service {
        name: service.name().to_string(),
        methods: service
            .methods()
            .map(|method| method_of(&method))
            .collect::<Result<_, _>>()?,
    })
}

fn method_of(method: &MethodDescriptor) -> Result<Method, LoaderError> {
    Ok(Method {
        name: method.name().to_string(),
        input: message_ref(&method.input()),
        output: message_ref(&method.output()),
        options: method_options(method)?,
    })
}

fn message_ref(message: &MessageDescriptor) -> MessageRef {
    MessageRef::new(message.name(), message.parent_file().name())
}

/// Every extension set on the method's options, keyed by its full name.
fn method_options(method: &MethodDescriptor) -> Result<OptionMap, LoaderError> {
    let options = method.options();
    collect_options(
        method.full_name(),
        options
            .extensions()
            .map(|(extension, value)| (extension.full_name().to_string(), to_json(value))),
    )
}

/// Only a failure to render the HTTP binding aborts the load; any other
/// extension that cannot be rendered is left out of the map.
fn collect_options(
    method: &str,
    rendered: impl IntoIterator<Item = (String, Result<Json, serde_json::Error>)>,
) -> Result<OptionMap, LoaderError> {
    let mut map = OptionMap::new();

    for (extension, json) in rendered {
        match json {
            Ok(json) => {
                map.insert(extension, json);
            }
            Err(source) if extension == HTTP_RULE_EXTENSION => {
                return Err(LoaderError::Option {
                    extension,
                    method: method.to_string(),
                    source,
                });
            }
            Err(error) => {
                debug!(%extension, method, %error, "skipping unreadable method option");
            }
        }
    }

    Ok(map)
}

fn to_json(value: &Value) -> Result<Json, serde_json::Error> {
    Ok(match value {
        Value::Bool(v) => Json::from(*v),
        Value::I32(v) | Value::EnumNumber(v) => Json::from(*v),
        Value::I64(v) => Json::from(*v),
        Value::U32(v) => Json::from(*v),
        Value::U64(v) => Json::from(*v),
        Value::F32(v) => Json::from(f64::from(*v)),
        Value::F64(v) => Json::from(*v),
        Value::String(v) => Json::from(v.as_str()),
        Value::Bytes(v) => Json::from(v.to_vec()),
        Value::Message(message) => serde_json::to_value(message)?,
        Value::List(items) => Json::Array(items.iter().map(to_json).collect::<Result<_, _>>()?),
        Value::Map(entries) => {
            let mut object = serde_json::Map::new();
            for (key, value) in entries {
                object.insert(map_key(key), to_json(value)?);
            }
            Json::Object(object)
        }
    })
}

fn map_key(key: &MapKey) -> String {
    match key {
        MapKey::Bool(v) => v.to_string(),
        MapKey::I32(v) => v.to_string(),
        MapKey::I64(v) => v.to_string(),
        MapKey::U32(v) => v.to_string(),
        MapKey::U64(v) => v.to_string(),
        MapKey::String(v) => v.clone(),
    }
}
