use crate::cli::main_types::{Commands, DocumentFormat};
use crate::error::{AppError, CliError, ParseError, StorageError};
use crate::storage::settings::Settings;
use crate::storage::{Document, read_json, read_structured, write_json};
use crate::utils::logging::{Logger, VerboseLogger};
use crate::utils::{create_directories, decode_image, encode_image_to_string, file_size_kb};
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct Dispatcher {
    logger: Box<dyn Logger>,
    verbose: VerboseLogger,
    settings: Settings,
    settings_path: PathBuf,
}

impl Dispatcher {
    pub fn new(
        logger: Box<dyn Logger>,
        verbose: bool,
        settings: Settings,
        settings_path: PathBuf,
    ) -> Self {
        Self {
            logger,
            verbose: VerboseLogger::new(verbose),
            settings,
            settings_path,
        }
    }

    pub fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Show { path, format, key } => {
                let format = format.unwrap_or_else(|| DocumentFormat::from_path(&path));
                self.verbose
                    .log(&format!("Reading {} as {:?}", path.display(), format));
                let document = self.load_document(&path, format)?;
                println!("{}", render_document(&document, key.as_deref())?);
                Ok(())
            }
            Commands::Convert { input, output } => {
                self.verbose.log(&format!(
                    "Converting {} to {}",
                    input.display(),
                    output.display()
                ));
                let document = read_structured(&input, self.logger.as_ref())?;
                write_json(&output, &document, self.logger.as_ref())?;
                println!("Wrote {}", output.display());
                Ok(())
            }
            Commands::Mkdirs { paths } => {
                create_directories(&paths, self.verbose.is_enabled(), self.logger.as_ref())
            }
            Commands::Size { path } => {
                println!("{}", file_size_kb(&path, self.logger.as_ref())?);
                Ok(())
            }
            Commands::Encode { input } => {
                println!("{}", encode_image_to_string(&input, self.logger.as_ref())?);
                Ok(())
            }
            Commands::Decode { input, output } => {
                let encoded = read_input(&input)?;
                decode_image(encoded, &output, self.logger.as_ref())?;
                println!("Wrote {}", output.display());
                Ok(())
            }
            Commands::Settings { save } => {
                print!("{}", self.settings.to_toml()?);
                if save {
                    self.settings.save(Some(self.settings_path.clone()))?;
                    self.logger.info(&format!(
                        "settings saved at: {}",
                        self.settings_path.display()
                    ));
                }
                Ok(())
            }
        }
    }

    fn load_document(&self, path: &Path, format: DocumentFormat) -> Result<Document, AppError> {
        match format {
            DocumentFormat::Yaml => read_structured(path, self.logger.as_ref()),
            DocumentFormat::Json => read_json(path, self.logger.as_ref()),
        }
    }
}

/// Pretty JSON for the whole document, or for the value at `key`.
pub fn render_document(document: &Document, key: Option<&str>) -> Result<String, AppError> {
    let rendered = match key {
        Some(key) => {
            let value = document
                .lookup(key)
                .ok_or_else(|| ParseError::MissingField {
                    field: key.to_string(),
                })?;
            serde_json::to_string_pretty(value)
        }
        None => serde_json::to_string_pretty(document),
    };
    rendered.map_err(|e| {
        StorageError::Serialize {
            path: "<stdout>".to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn read_input(input: &str) -> Result<String, AppError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::InvalidArguments(format!("failed to read stdin: {}", e)))?;
        return Ok(buf);
    }
    let path = Path::new(input);
    std::fs::read_to_string(path)
        .map_err(|e| crate::utils::error_helpers::convert_io_error(e, path).into())
}
