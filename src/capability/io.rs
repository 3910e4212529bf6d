//! File capabilities - expose the file helpers to the model

use std::path::PathBuf;
use std::sync::Arc;

use super::{string_arg, Capability, ParameterDefinition};
use crate::files;

fn folder_param() -> ParameterDefinition {
    ParameterDefinition::string(
        "folderPath",
        "The folder containing the file, relative to the base directory.",
    )
}

fn file_name_param() -> ParameterDefinition {
    ParameterDefinition::string("fileName", "The name of the file, including its extension.")
}

/// Read a local file
pub fn read_file(root: Arc<PathBuf>) -> Capability {
    Capability::provide(
        "readFile",
        "Reads the contents of a local file and returns them as text.",
        vec![folder_param(), file_name_param()],
        move |args| {
            let folder = string_arg(args, "folderPath")?;
            let file_name = string_arg(args, "fileName")?;
            files::read_file(&root, &folder, &file_name)
        },
    )
}

/// Create (or overwrite) a local file
pub fn create_file(root: Arc<PathBuf>) -> Capability {
    Capability::provide(
        "createFile",
        "Creates a local file with the given content, overwriting any existing file.",
        vec![
            folder_param(),
            file_name_param(),
            ParameterDefinition::string("fileContent", "The text content to write into the file."),
        ],
        move |args| {
            let folder = string_arg(args, "folderPath")?;
            let file_name = string_arg(args, "fileName")?;
            let content = string_arg(args, "fileContent")?;
            files::create_file(&root, &folder, &file_name, &content)
        },
    )
}

/// Parse a local CSV file into rows
pub fn parse_csv(root: Arc<PathBuf>) -> Capability {
    Capability::provide(
        "parseCsv",
        "Parses a local CSV file and returns its rows as a JSON array of string arrays.",
        vec![folder_param(), file_name_param()],
        move |args| {
            let folder = string_arg(args, "folderPath")?;
            let file_name = string_arg(args, "fileName")?;
            let rows = files::parse_csv(&root, &folder, &file_name)?;
            Ok(serde_json::to_string(&rows)?)
        },
    )
}

/// All file capabilities rooted at `root`
pub fn all(root: Arc<PathBuf>) -> Vec<Capability> {
    vec![read_file(root.clone()), create_file(root.clone()), parse_csv(root)]
}
