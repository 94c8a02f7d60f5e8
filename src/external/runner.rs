use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info, warn};
use tempfile::TempDir;

use super::{ExternalAnnotatorConfig, ExternalError, InputKind};

/// Number of trailing stderr lines kept in [`ExternalError::Failed`]
const STDERR_TAIL_LINES: usize = 20;

/// Fully resolved converter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorCommand {
    /// Interpreter to execute
    pub program: String,
    /// Script path followed by its arguments
    pub args: Vec<OsString>,
    /// Where the converter writes the annotated MAF
    pub output_maf: PathBuf,
    /// Input kind the command was built for
    pub kind: InputKind,
}

impl AnnotatorCommand {
    /// Build a [`Command`] ready to spawn
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Human-readable command line for logging
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Runs the converter scripts and owns their working directory
#[derive(Debug)]
pub struct ExternalAnnotator {
    config: ExternalAnnotatorConfig,
    scratch: Option<TempDir>,
}

impl ExternalAnnotator {
    /// Annotator using `config`
    pub fn new(config: ExternalAnnotatorConfig) -> Self {
        Self {
            config,
            scratch: None,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ExternalAnnotatorConfig {
        &self.config
    }

    /// Directory the converter works in, created on first use
    pub fn intermediate_dir(&mut self) -> Result<PathBuf, ExternalError> {
        if let Some(dir) = &self.config.intermediate_dir {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        let scratch = match self.scratch.take() {
            Some(scratch) => scratch,
            None => tempfile::Builder::new().prefix("maf-annotator-").tempdir()?,
        };
        let path = scratch.path().to_path_buf();
        self.scratch = Some(scratch);
        Ok(path)
    }

    /// Converter invocation for `input`
    pub fn command_for(&mut self, input: &Path) -> Result<AnnotatorCommand, ExternalError> {
        let kind = InputKind::detect(input);
        let dir = self.intermediate_dir()?;
        let output_maf = dir.join(&self.config.intermediate_maf);

        let mut args: Vec<OsString> = vec![self.config.script_path(kind).into_os_string()];
        if let Some(vep_path) = &self.config.vep_path {
            args.push("--vep-path".into());
            args.push(vep_path.clone().into_os_string());
        }
        args.push(kind.input_flag().into());
        args.push(input.as_os_str().to_os_string());
        if kind == InputKind::Maf {
            args.push("--output-dir".into());
            args.push(dir.into_os_string());
        }
        args.push("--output-maf".into());
        args.push(output_maf.clone().into_os_string());
        args.extend(self.config.extra_args.iter().map(OsString::from));

        Ok(AnnotatorCommand {
            program: self.config.perl.clone(),
            args,
            output_maf,
            kind,
        })
    }

    /// Annotate `input` and return the path of the annotated MAF.
    ///
    /// Converter output is echoed through the logger line by line.
    pub fn run(&mut self, input: &Path) -> Result<PathBuf, ExternalError> {
        let command = self.command_for(input)?;
        info!("Running {}", command.display_line());

        let output = command
            .to_command()
            .output()
            .map_err(|source| ExternalError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            info!("[{}] {}", command.kind.script_name(), line);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            warn!("[{}] {}", command.kind.script_name(), line);
        }

        if !output.status.success() {
            return Err(ExternalError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: tail_lines(&stderr, STDERR_TAIL_LINES),
            });
        }

        if !command.output_maf.exists() {
            return Err(ExternalError::MissingOutput(command.output_maf));
        }

        debug!("Annotated MAF written to {}", command.output_maf.display());
        Ok(command.output_maf)
    }
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(command: &AnnotatorCommand) -> Vec<String> {
        command
            .args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_detect_input_kind() {
        assert_eq!(InputKind::detect(Path::new("calls.VCF")), InputKind::Vcf);
        assert_eq!(InputKind::detect(Path::new("calls.vcf")), InputKind::Vcf);
        assert_eq!(InputKind::detect(Path::new("study.maf")), InputKind::Maf);
        assert_eq!(InputKind::detect(Path::new("mutations.txt")), InputKind::Maf);
        assert_eq!(InputKind::detect(Path::new("noext")), InputKind::Maf);
    }

    #[test]
    fn test_merge_base_for_vcf_is_converter_output() {
        let annotated = Path::new("scratch/annotator_out.maf");

        let vcf = Path::new("calls.vcf");
        assert_eq!(InputKind::detect(vcf).merge_base(vcf, annotated), annotated);

        let maf = Path::new("study.maf");
        assert_eq!(InputKind::detect(maf).merge_base(maf, annotated), maf);
    }

    #[test]
    fn test_maf_command_line() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExternalAnnotatorConfig {
            script_dir: Some(PathBuf::from("/opt/vcf2maf")),
            vep_path: Some(PathBuf::from("/opt/vep")),
            intermediate_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let mut annotator = ExternalAnnotator::new(config);
        let command = annotator.command_for(Path::new("study.maf")).unwrap();
        let output_maf = dir.path().join("annotator_out.maf");

        assert_eq!(command.program, "perl");
        assert_eq!(
            args_of(&command),
            vec![
                "/opt/vcf2maf/maf2maf.pl".to_string(),
                "--vep-path".to_string(),
                "/opt/vep".to_string(),
                "--input-maf".to_string(),
                "study.maf".to_string(),
                "--output-dir".to_string(),
                dir.path().to_string_lossy().into_owned(),
                "--output-maf".to_string(),
                output_maf.to_string_lossy().into_owned(),
            ]
        );
        assert_eq!(command.output_maf, output_maf);
    }

    #[test]
    fn test_vcf_command_line_uses_scratch_dir() {
        let mut annotator = ExternalAnnotator::new(ExternalAnnotatorConfig {
            extra_args: vec!["--ncbi-build".to_string(), "GRCh38".to_string()],
            ..Default::default()
        });
        let command = annotator.command_for(Path::new("calls.vcf")).unwrap();
        let args = args_of(&command);

        assert_eq!(args[0], "vcf2maf.pl");
        assert_eq!(args[1], "--input-vcf");
        assert!(!args.contains(&"--output-dir".to_string()));
        assert!(!args.contains(&"--vep-path".to_string()));
        assert_eq!(&args[args.len() - 2..], &["--ncbi-build", "GRCh38"]);

        let scratch = annotator.intermediate_dir().unwrap();
        assert!(scratch.is_dir());
        assert!(command.output_maf.starts_with(&scratch));
    }

    #[test]
    fn test_missing_program() {
        let mut annotator = ExternalAnnotator::new(ExternalAnnotatorConfig {
            perl: "definitely-not-an-installed-interpreter".to_string(),
            ..Default::default()
        });

        let err = annotator.run(Path::new("study.maf")).unwrap_err();
        assert!(matches!(err, ExternalError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_script_success_and_failure() {
        let scripts = tempfile::tempdir().unwrap();
        std::fs::write(
            scripts.path().join("maf2maf.pl"),
            "eval \"out=\\${$#}\"\nprintf 'Chromosome\\tStart_Position\\n' > \"$out\"\necho done\n",
        )
        .unwrap();
        std::fs::write(
            scripts.path().join("vcf2maf.pl"),
            "echo 'VEP failed' >&2\nexit 3\n",
        )
        .unwrap();

        let mut annotator = ExternalAnnotator::new(ExternalAnnotatorConfig {
            perl: "sh".to_string(),
            script_dir: Some(scripts.path().to_path_buf()),
            ..Default::default()
        });

        let output = annotator.run(Path::new("study.maf")).unwrap();
        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "Chromosome\tStart_Position\n");

        let err = annotator.run(Path::new("calls.vcf")).unwrap_err();
        match err {
            ExternalError::Failed { status, stderr } => {
                assert_eq!(status, 3);
                assert_eq!(stderr, "VEP failed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tail_lines() {
        assert_eq!(tail_lines("a\nb\nc\n", 2), "b\nc");
        assert_eq!(tail_lines("a", 5), "a");
        assert_eq!(tail_lines("", 5), "");
    }
}
