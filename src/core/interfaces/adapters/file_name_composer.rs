use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameField {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

pub trait FileNameComposer: Send + Sync {
    fn compose(&self, template: &str, date_string: &str, extension: &str) -> Result<String>;

    fn supported_fields(&self) -> Vec<FileNameField>;

    fn validate_template(&self, template: &str) -> Result<()>;
}
