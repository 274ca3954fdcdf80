use std::{ffi::OsString, fs, path::PathBuf};

use itertools::Itertools;
use tracing::debug;

use crate::utils::helpers::shell_quote;
use crate::utils::naming::{check_names, generated_file_name, package_name};
use crate::{EnumKind, GeneratorError};

/// `<KIND> <ENUM_NAME> <VALUE>...`
const KIND_ARG: usize = 0;
const NAME_ARG: usize = 1;
const VALUES_ARG: usize = 2;
const ARG_MIN_COUNT: usize = 3;

/// One run of the generator, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub target_dir: PathBuf,
    pub allow_empty: bool,
    pub kind: EnumKind,
    pub enum_name: String,
    pub values: Vec<String>,
}

/// Data handed to the templates.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub command_line: &'a str,
    pub kind: &'a EnumKind,
    pub enum_name: &'a str,
    pub values: &'a [String],
    pub allow_empty: bool,
}

impl Invocation {
    /// Resolves the positional arguments and checks that every name yields a
    /// compilable Go identifier. Nothing on disk is looked at here.
    pub fn new(
        target_dir: PathBuf,
        allow_empty: bool,
        positional: &[String],
    ) -> Result<Self, GeneratorError> {
        if positional.len() < ARG_MIN_COUNT {
            return Err(GeneratorError::Usage(format!(
                "expected <KIND> <ENUM_NAME> <VALUE>..., got {} argument(s)",
                positional.len()
            )));
        }

        let kind = positional[KIND_ARG].parse::<EnumKind>()?;
        check_names(&positional[NAME_ARG], &kind, &positional[VALUES_ARG..])?;
        let invocation = Invocation {
            target_dir,
            allow_empty,
            kind,
            enum_name: positional[NAME_ARG].clone(),
            values: positional[VALUES_ARG..].to_vec(),
        };
        debug!("{:?}", invocation);
        Ok(invocation)
    }

    /// Fails unless the target directory exists and is a directory.
    pub fn validate_target(&self) -> Result<(), GeneratorError> {
        let metadata = fs::metadata(&self.target_dir).map_err(|err| {
            GeneratorError::Configuration(format!(
                "cannot access {}: {}",
                self.target_dir.display(),
                err
            ))
        })?;
        if !metadata.is_dir() {
            return Err(GeneratorError::Configuration(format!(
                "{} is not a directory",
                self.target_dir.display()
            )));
        }
        Ok(())
    }

    pub fn package_name(&self) -> String {
        package_name(&self.enum_name)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.target_dir.join(self.package_name())
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir().join(generated_file_name(&self.enum_name))
    }

    pub fn render_context<'a>(&'a self, command_line: &'a str) -> RenderContext<'a> {
        RenderContext {
            command_line,
            kind: &self.kind,
            enum_name: &self.enum_name,
            values: &self.values,
            allow_empty: self.allow_empty,
        }
    }
}

/// Reproducible command line for the generated header: `app_name` followed by
/// the arguments, shell-quoted where needed.
pub fn command_line<I, S>(app_name: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    std::iter::once(app_name.to_owned())
        .chain(args.into_iter().map(|arg| shell_quote(arg.as_ref())))
        .join(" ")
}

/// Process arguments as recorded in the header. Bytes that are not UTF-8 are
/// replaced, since paths given to `--dir` need not be UTF-8.
pub fn header_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
