//! Compile requested `.proto` files and build the schema model.

use std::path::{Path, PathBuf};

use pblint_core::SchemaFile;
use protox::Compiler;
use tracing::debug;

use crate::convert::schema_file;
use crate::error::LoaderError;

/// Compile `schema_paths` against `import_paths` and return the requested
/// files, in request order.
///
/// When `import_paths` is empty the current directory is the only include
/// directory.
///
/// # Errors
///
/// Returns [`LoaderError`] when no file is given, a file is missing, or the
/// files fail to compile. Nothing is returned for a partially resolved tree.
pub fn parse<S, I>(schema_paths: &[S], import_paths: &[I]) -> Result<Vec<SchemaFile>, LoaderError>
where
    S: AsRef<Path>,
    I: AsRef<Path>,
{
    if schema_paths.is_empty() {
        return Err(LoaderError::NoFiles);
    }
    if let Some(missing) = schema_paths.iter().find(|path| !path.as_ref().is_file()) {
        return Err(LoaderError::FileNotFound(missing.as_ref().to_path_buf()));
    }

    let includes: Vec<PathBuf> = if import_paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        import_paths
            .iter()
            .map(|path| path.as_ref().to_path_buf())
            .collect()
    };
    debug!(files = schema_paths.len(), includes = ?includes, "compiling schema files");

    let mut compiler = Compiler::new(&includes)?;
    compiler.include_imports(true);
    compiler.open_files(schema_paths)?;

    let requested = requested_file_names(&compiler, schema_paths);
    let pool = compiler.descriptor_pool();

    requested
        .iter()
        .map(|name| {
            let file = pool
                .get_file_by_name(name)
                .ok_or_else(|| LoaderError::MissingFromPool(name.clone()))?;
            debug!(file = %name, "building schema model");
            schema_file(&file)
        })
        .collect()
}

/// Names of the explicitly opened (non-import) files, ordered as requested.
fn requested_file_names<S: AsRef<Path>>(compiler: &Compiler, schema_paths: &[S]) -> Vec<String> {
    let wanted: Vec<Option<PathBuf>> = schema_paths
        .iter()
        .map(|path| path.as_ref().canonicalize().ok())
        .collect();

    let mut opened: Vec<(usize, String)> = compiler
        .files()
        .filter(|file| !file.is_import())
        .map(|file| {
            let on_disk = file.path().and_then(|path| path.canonicalize().ok());
            let position = wanted
                .iter()
                .position(|want| want.is_some() && *want == on_disk)
                .unwrap_or(wanted.len());
            (position, file.name().to_string())
        })
        .collect();

    opened.sort_by_key(|(position, _)| *position);
    opened.into_iter().map(|(_, name)| name).collect()
}
