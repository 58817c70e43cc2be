use anyhow::{bail, Result};

use crate::core::interfaces::adapters::{FileNameComposer, FileNameField};
use crate::global_constants::{FILE_NAME_FIELD_DATE, FILE_NAME_FIELD_FORMAT};

const ILLEGAL_FILE_NAME_CHARACTERS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Expands `{field}` placeholders in a file-name template.
pub struct TemplateFileNameComposer;

impl TemplateFileNameComposer {
    pub fn new() -> Self {
        Self
    }

    fn extract_field_names(template: &str) -> Result<Vec<&str>> {
        let mut field_names = Vec::new();
        let mut remainder = template;

        while let Some(open_index) = remainder.find(['{', '}']) {
            if remainder[open_index..].starts_with('}') {
                bail!("unmatched '}}' in file name template '{}'", template);
            }

            let after_open = &remainder[open_index + 1..];
            let Some(close_index) = after_open.find(['{', '}']) else {
                bail!("unclosed '{{' in file name template '{}'", template);
            };
            if after_open[close_index..].starts_with('{') {
                bail!("nested '{{' in file name template '{}'", template);
            }

            field_names.push(&after_open[..close_index]);
            remainder = &after_open[close_index + 1..];
        }

        Ok(field_names)
    }

    fn check_file_name_characters(file_name: &str) -> Result<()> {
        if file_name.trim().is_empty() {
            bail!("file name must not be empty");
        }

        if let Some(illegal) = file_name
            .chars()
            .find(|c| ILLEGAL_FILE_NAME_CHARACTERS.contains(c) || c.is_control())
        {
            bail!("file name '{}' contains illegal character {:?}", file_name, illegal);
        }

        Ok(())
    }
}

impl Default for TemplateFileNameComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl FileNameComposer for TemplateFileNameComposer {
    fn compose(&self, template: &str, date_string: &str, extension: &str) -> Result<String> {
        self.validate_template(template)?;

        let file_stem = template
            .replace(&format!("{{{}}}", FILE_NAME_FIELD_DATE), date_string)
            .replace(
                &format!("{{{}}}", FILE_NAME_FIELD_FORMAT),
                &extension.to_uppercase(),
            );
        let file_name = format!("{}.{}", file_stem, extension);

        Self::check_file_name_characters(&file_name)?;

        log::debug!("[FILE_NAME] composed '{}' from '{}'", file_name, template);
        Ok(file_name)
    }

    fn supported_fields(&self) -> Vec<FileNameField> {
        vec![
            FileNameField {
                name: FILE_NAME_FIELD_DATE,
                description: "Capture time, formatted with the date format.",
                required: true,
            },
            FileNameField {
                name: FILE_NAME_FIELD_FORMAT,
                description: "Image format in upper case, e.g. PNG.",
                required: false,
            },
        ]
    }

    fn validate_template(&self, template: &str) -> Result<()> {
        let field_names = Self::extract_field_names(template)?;
        let supported_fields = self.supported_fields();

        if let Some(unknown) = field_names
            .iter()
            .find(|name| !supported_fields.iter().any(|field| field.name == **name))
        {
            bail!("unknown field '{{{}}}' in file name template '{}'", unknown, template);
        }

        if let Some(missing) = supported_fields
            .iter()
            .find(|field| field.required && !field_names.contains(&field.name))
        {
            bail!(
                "file name template '{}' must contain '{{{}}}'",
                template,
                missing.name
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_expands_date_and_appends_extension() {
        let composer = TemplateFileNameComposer::new();

        let file_name = composer
            .compose("MSFS_{date}", "2024-01-01-120000", "png")
            .unwrap();

        assert_eq!(file_name, "MSFS_2024-01-01-120000.png");
    }

    #[test]
    fn test_compose_expands_optional_format_field() {
        let composer = TemplateFileNameComposer::new();

        let file_name = composer.compose("{format}-{date}", "0800", "tiff").unwrap();

        assert_eq!(file_name, "TIFF-0800.tiff");
    }

    #[test]
    fn test_compose_rejects_date_with_path_separator() {
        let composer = TemplateFileNameComposer::new();

        let result = composer.compose("MSFS_{date}", "2024/01/01", "jpg");

        assert!(result.unwrap_err().to_string().contains("illegal character"));
    }

    #[test]
    fn test_validate_template_requires_date_field() {
        let composer = TemplateFileNameComposer::new();

        let error = composer.validate_template("MSFS_{format}").unwrap_err();

        assert!(error.to_string().contains("{date}"));
    }

    #[test]
    fn test_validate_template_rejects_unknown_field() {
        let composer = TemplateFileNameComposer::new();

        let error = composer.validate_template("{aircraft}_{date}").unwrap_err();

        assert!(error.to_string().contains("{aircraft}"));
    }

    #[test]
    fn test_validate_template_rejects_unbalanced_braces() {
        let composer = TemplateFileNameComposer::new();

        assert!(composer.validate_template("MSFS_{date").is_err());
        assert!(composer.validate_template("MSFS_date}").is_err());
        assert!(composer.validate_template("MSFS_{{date}}").is_err());
    }

    #[test]
    fn test_supported_fields_lists_date_first_and_required() {
        let composer = TemplateFileNameComposer::new();

        let fields = composer.supported_fields();

        assert_eq!(fields[0].name, "date");
        assert!(fields[0].required);
        assert!(fields.iter().skip(1).all(|field| !field.required));
    }
}
