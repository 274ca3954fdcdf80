use std::path::PathBuf;

use tracing::info;

use crate::{
    generator::{invocation::command_line, invocation::Invocation, templates::go},
    utils::{config::Config, file::write_generated},
    GeneratorError,
};

#[derive(Debug)]
pub struct Generator {
    config: Config,
    invocation: Invocation,
    args: Vec<String>,
}

impl Generator {
    /// `args` are the raw command-line arguments (without the program name),
    /// recorded verbatim in the generated header.
    pub fn new(config: Config, invocation: Invocation, args: Vec<String>) -> Self {
        Self {
            config,
            invocation,
            args,
        }
    }

    /// Writes the enum source file and returns its path.
    pub fn generate(&self) -> Result<PathBuf, GeneratorError> {
        self.invocation.validate_target()?;

        let command_line = command_line(&self.config.app_name, &self.args);
        let mut context = self.invocation.render_context(&command_line);
        context.allow_empty |= self.config.allow_empty;

        let output_file = self.invocation.output_file();
        info!(
            "Generating {} enum {} with {} values",
            self.invocation.kind,
            self.invocation.enum_name,
            self.invocation.values.len()
        );

        write_generated(&output_file, || go::render(&context))?;

        info!("Wrote {}", output_file.display());
        Ok(output_file)
    }
}
